//! Pronoun-to-entity attribution over a dependency parse.
//!
//! Syntactic strategies run first and their results are unioned, so one
//! pronoun may be attributed to several entities. Carry-over rules only apply
//! to pronouns the syntax left unattributed.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use grader_core::models::{DepRole, Gender, GenderCounts, ParsedText};

use crate::lexicon::pronoun_gender;

/// Gendered pronoun token index to the indices of the entities it refers to.
pub type Attributions = BTreeMap<usize, BTreeSet<usize>>;

/// Resolve every gendered pronoun in `parsed`.
pub fn resolve(parsed: &ParsedText, carry_over: bool) -> Attributions {
    let mut attributions = Attributions::new();
    // Pronoun genders seen so far per entity text.
    let mut genders: HashMap<&str, GenderCounts> = HashMap::new();

    for (index, token) in parsed.tokens.iter().enumerate() {
        let Some(gender) = pronoun_gender(&token.lemma) else {
            continue;
        };

        let mut found = syntactic(parsed, index);
        if found.is_empty() && carry_over {
            found = agreeing_antecedent(parsed, index, gender, &genders)
                .or_else(|| previous_subject(parsed, index, gender, &genders))
                .into_iter()
                .collect();
        }
        if found.is_empty() {
            continue;
        }

        for &entity in &found {
            if let Some(e) = parsed.entities.get(entity) {
                genders.entry(e.text.as_str()).or_default().add(gender);
            }
        }
        attributions.insert(index, found);
    }
    attributions
}

/// Resolved gender of a tally: unanimous or nothing.
pub fn resolved_gender(counts: &GenderCounts) -> Option<Gender> {
    match (counts.male, counts.female) {
        (m, 0) if m > 0 => Some(Gender::Male),
        (0, f) if f > 0 => Some(Gender::Female),
        _ => None,
    }
}

fn entity_of(parsed: &ParsedText, token: usize) -> Option<usize> {
    parsed.entities.iter().position(|e| e.span.contains(token))
}

fn syntactic(parsed: &ParsedText, pronoun: usize) -> BTreeSet<usize> {
    let mut found = BTreeSet::new();
    let token = &parsed.tokens[pronoun];

    // Ancestor chain.
    found.extend(
        parsed
            .ancestors(pronoun)
            .into_iter()
            .filter_map(|a| entity_of(parsed, a)),
    );

    // Subject: siblings under the governing verb, then under the verbs that
    // govern its clause.
    if token.dep == DepRole::Subject {
        let mut verb = token.head;
        let mut visited = 0;
        loop {
            found.extend(
                parsed
                    .children(verb)
                    .filter(|&c| c != pronoun)
                    .filter_map(|c| entity_of(parsed, c)),
            );
            let Some(v) = parsed.tokens.get(verb) else { break };
            visited += 1;
            if !matches!(v.dep, DepRole::Complement | DepRole::Conjunct)
                || v.head == verb
                || visited > parsed.tokens.len()
            {
                break;
            }
            verb = v.head;
        }
    }

    // Possessive: the possessed head.
    if token.dep == DepRole::Possessive {
        found.extend(entity_of(parsed, token.head));
    }

    // Noun chunks holding both the pronoun and a name.
    for chunk in parsed.noun_chunks.iter().filter(|c| c.contains(pronoun)) {
        found.extend((chunk.start..chunk.end).filter_map(|k| entity_of(parsed, k)));
    }

    found
}

/// The one earlier entity whose established gender matches.
fn agreeing_antecedent(
    parsed: &ParsedText,
    pronoun: usize,
    gender: Gender,
    genders: &HashMap<&str, GenderCounts>,
) -> Option<usize> {
    let mut latest: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, entity) in parsed.entities.iter().enumerate() {
        if entity.span.end > pronoun {
            break;
        }
        let agrees = genders
            .get(entity.text.as_str())
            .and_then(resolved_gender)
            .is_some_and(|g| g == gender);
        if agrees {
            latest.insert(entity.text.as_str(), i);
        }
    }
    match latest.len() {
        1 => latest.into_values().next(),
        _ => None,
    }
}

/// A sentence-subject pronoun continues the previous sentence's named subject
/// when that subject's gender is unknown or agrees. A coordinated subject
/// ("John and Mary") names more than one person and is never continued.
fn previous_subject(
    parsed: &ParsedText,
    pronoun: usize,
    gender: Gender,
    genders: &HashMap<&str, GenderCounts>,
) -> Option<usize> {
    let token = &parsed.tokens[pronoun];
    let root = token.head;
    if token.dep != DepRole::Subject || parsed.tokens.get(root)?.dep != DepRole::Root {
        return None;
    }

    let previous_root = (0..root)
        .rev()
        .find(|&i| parsed.tokens[i].dep == DepRole::Root && parsed.tokens[i].head == i)?;
    let subject = parsed
        .children(previous_root)
        .find(|&c| parsed.tokens[c].dep == DepRole::Subject)?;
    let entity = entity_of(parsed, subject)?;
    if is_coordinated(parsed, parsed.entities[entity].span.start) {
        return None;
    }

    let established = genders
        .get(parsed.entities[entity].text.as_str())
        .and_then(resolved_gender);
    match established {
        Some(g) if g != gender => None,
        _ => Some(entity),
    }
}

/// Whether the phrase starting at `start` is the second half of a coordination.
fn is_coordinated(parsed: &ParsedText, start: usize) -> bool {
    start
        .checked_sub(1)
        .and_then(|p| parsed.tokens.get(p))
        .is_some_and(|t| matches!(t.lemma.as_str(), "and" | "or" | "&" | ","))
}
