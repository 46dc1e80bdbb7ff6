//! Fixed word lists. Immutable after first use; every lookup is by lowercase lemma.

use std::collections::HashSet;
use std::sync::LazyLock;

use grader_core::models::Gender;

macro_rules! word_set {
    ($name:ident, [$($word:literal),* $(,)?]) => {
        pub static $name: LazyLock<HashSet<&'static str>> =
            LazyLock::new(|| HashSet::from([$($word),*]));
    };
}

word_set!(MALE_PRONOUNS, ["he", "him", "his", "himself"]);
word_set!(FEMALE_PRONOUNS, ["she", "her", "hers", "herself"]);

word_set!(MALE_NOUNS, [
    "man", "men", "boy", "boys", "father", "fathers", "son", "sons", "brother", "brothers",
    "husband", "husbands", "gentleman", "gentlemen", "king", "kings", "uncle", "uncles",
    "nephew", "nephews", "grandfather", "grandfathers", "dad", "dads", "guy", "guys",
    "male", "males", "sir", "businessman", "businessmen", "chairman", "chairmen",
]);

word_set!(FEMALE_NOUNS, [
    "woman", "women", "girl", "girls", "mother", "mothers", "daughter", "daughters", "sister",
    "sisters", "wife", "wives", "lady", "ladies", "queen", "queens", "aunt", "aunts", "niece",
    "nieces", "grandmother", "grandmothers", "mom", "moms", "mum", "mums", "female",
    "females", "madam", "businesswoman", "businesswomen", "chairwoman", "chairwomen",
]);

word_set!(PROFESSIONAL_TERMS, [
    "scientist", "scientists", "doctor", "doctors", "engineer", "engineers", "nurse", "nurses",
    "teacher", "teachers", "professor", "professors", "researcher", "researchers",
    "programmer", "programmers", "developer", "developers", "physician", "physicians",
    "surgeon", "surgeons", "lawyer", "lawyers", "judge", "judges", "pilot", "pilots",
    "architect", "architects", "mathematician", "mathematicians", "physicist", "physicists",
    "chemist", "chemists", "biologist", "biologists", "executive", "executives", "ceo", "ceos",
    "manager", "managers", "director", "directors", "founder", "founders", "entrepreneur",
    "entrepreneurs", "leader", "leaders", "analyst", "analysts", "accountant", "accountants",
    "secretary", "secretaries", "receptionist", "receptionists", "politician", "politicians",
    "economist", "economists", "inventor", "inventors",
]);

word_set!(HONORIFICS, [
    "mr", "mrs", "ms", "miss", "mx", "dr", "prof", "professor", "sir", "dame", "lady", "lord",
    "madam", "rev", "st",
]);

word_set!(GIVEN_NAMES, [
    "ada", "alan", "albert", "alice", "amanda", "amy", "angela", "anna", "anthony", "ashley",
    "barbara", "bob", "brenda", "carol", "charles", "christopher", "cynthia", "daniel",
    "david", "deborah", "donald", "dorothy", "elizabeth", "emily", "emma", "ethan", "eve",
    "frances", "frank", "george", "grace", "hedy", "helen", "henry", "isaac", "jacob",
    "james", "jane", "jean", "jennifer", "jessica", "john", "joseph", "julia", "karen",
    "katherine", "kathleen", "kevin", "laura", "liam", "linda", "lisa", "lucy", "margaret",
    "maria", "marie", "mark", "mary", "matthew", "melissa", "michael", "nancy", "nicole",
    "niels", "nikola", "noah", "olivia", "pamela", "patricia", "paul", "peter", "rachel",
    "rebecca", "richard", "robert", "rosalind", "ruth", "samuel", "sarah", "sharon",
    "shirley", "sophia", "stephanie", "steve", "susan", "thomas", "tim", "tom", "william",
]);

// Capitalised words that mark an organisation, place or artefact rather than a person.
word_set!(NON_PERSON_WORDS, [
    "engine", "university", "institute", "college", "school", "company", "corporation",
    "inc", "ltd", "group", "foundation", "society", "agency", "association", "bank",
    "river", "mountain", "city", "state", "states", "republic", "kingdom", "union", "ocean",
    "sea", "lake", "street", "road", "park", "center", "centre", "museum", "laboratory",
    "lab", "labs", "project", "program", "programme", "prize", "award", "act", "war",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday", "the", "of",
]);

// Common verb forms the parser treats as clause heads.
word_set!(VERBS, [
    "say", "says", "said", "tell", "tells", "told", "ask", "asks", "asked", "know", "knows",
    "knew", "think", "thinks", "thought", "believe", "believes", "believed", "work", "worked",
    "write", "writes", "wrote", "written", "make", "makes", "made", "take", "takes", "took",
    "give", "gives", "gave", "get", "gets", "got", "go", "goes", "went", "come", "comes",
    "came", "see", "sees", "saw", "find", "finds", "leave", "leaves", "left", "follow",
    "follows", "followed", "led", "publish", "publishes", "published", "build", "builds",
    "built", "design", "designs", "designed", "develop", "develops", "developed", "create",
    "creates", "created", "discover", "discovers", "discovered", "invent", "invents",
    "invented", "win", "wins", "won", "help", "helps", "helped", "use", "uses", "used",
    "need", "needs", "needed", "want", "wants", "wanted", "become", "becomes", "became",
    "run", "runs", "ran", "check", "checks", "checked", "study", "studies", "studied",
    "teach", "teaches", "taught", "learn", "learns", "learned", "live", "lives", "lived",
    "die", "dies", "died", "start", "starts", "started", "join", "joins", "joined",
    "founded", "receive", "receives", "received", "earn", "earns", "earned", "show",
    "shows", "showed", "argue", "argues", "argued", "explain", "explains", "explained",
    "describe", "describes", "described", "prove", "proves", "proved", "lose", "loses",
    "lost", "keep", "keeps", "kept", "hold", "holds", "held", "bring", "brings", "brought",
    "meet", "meets", "met", "manage", "manages", "managed", "marry", "marries", "married",
    "hire", "hires", "hired", "grow", "grows", "grew", "rise", "rises", "rose", "fall",
    "falls", "fell", "contain", "contains", "contained", "measure", "measured", "collapse",
    "collapses", "collapsed", "yield", "yields", "yielded", "reach", "reaches", "reached",
    "treat", "treats", "treated", "lead", "leads", "love", "loves", "loved",
]);

/// Gender of a pronoun lemma.
pub fn pronoun_gender(lemma: &str) -> Option<Gender> {
    if MALE_PRONOUNS.contains(lemma) {
        Some(Gender::Male)
    } else if FEMALE_PRONOUNS.contains(lemma) {
        Some(Gender::Female)
    } else {
        None
    }
}

/// Gender of any gendered term, pronoun or common noun.
pub fn term_gender(lemma: &str) -> Option<Gender> {
    pronoun_gender(lemma).or_else(|| {
        if MALE_NOUNS.contains(lemma) {
            Some(Gender::Male)
        } else if FEMALE_NOUNS.contains(lemma) {
            Some(Gender::Female)
        } else {
            None
        }
    })
}

pub fn is_professional(lemma: &str) -> bool {
    PROFESSIONAL_TERMS.contains(lemma)
}
