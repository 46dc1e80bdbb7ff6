//! Coarse word-class tagging.

use crate::lexicon::VERBS;

/// Word class used to build the dependency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Punct,
    Det,
    Prep,
    /// Coordinator or subordinator.
    Conj,
    Aux,
    Verb,
    PronSubj,
    PronObj,
    PronPoss,
    Adv,
    /// Possessive `'s`.
    Clitic,
    /// Nouns, adjectives, numbers, names: anything not otherwise classified.
    Noun,
}

fn closed_class(lemma: &str) -> Option<Tag> {
    let tag = match lemma {
        "the" | "a" | "an" | "this" | "these" | "those" | "every" | "each" | "some" | "any"
        | "no" | "all" | "both" | "either" | "neither" | "another" | "such" => Tag::Det,
        "of" | "in" | "on" | "at" | "to" | "for" | "with" | "by" | "from" | "about" | "as"
        | "into" | "like" | "through" | "after" | "before" | "over" | "under" | "between"
        | "without" | "during" | "against" | "among" | "within" | "across" | "behind"
        | "beyond" | "upon" | "toward" | "towards" | "via" | "per" | "since" | "until"
        | "than" => Tag::Prep,
        "and" | "or" | "but" | "nor" | "yet" | "so" | "because" | "while" | "although"
        | "though" | "whereas" | "if" | "when" | "whether" => Tag::Conj,
        "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" | "has" | "have"
        | "had" | "do" | "does" | "did" | "will" | "would" | "can" | "could" | "should"
        | "may" | "might" | "must" | "shall" => Tag::Aux,
        "he" | "she" | "they" | "i" | "we" | "you" | "it" => Tag::PronSubj,
        "him" | "them" | "me" | "us" | "hers" | "himself" | "herself" | "themselves"
        | "itself" | "myself" | "yourself" | "ourselves" => Tag::PronObj,
        "his" | "their" | "its" | "my" | "our" | "your" => Tag::PronPoss,
        "not" | "never" | "also" | "very" | "often" | "always" | "then" | "still" | "just"
        | "only" | "too" | "even" | "now" | "later" | "soon" | "already" => Tag::Adv,
        "'s" | "’s" => Tag::Clitic,
        _ => return None,
    };
    Some(tag)
}

fn is_ordinal(lemma: &str) -> bool {
    matches!(
        lemma,
        "first" | "second" | "third" | "last" | "next" | "final" | "most" | "least" | "best"
    )
}

fn is_punct(text: &str) -> bool {
    text.chars().all(|c| !c.is_alphanumeric())
}

/// Tag one sentence. `lemmas` and `texts` cover the sentence only; `is_entity`
/// marks tokens inside a recognised person name.
pub fn tag_sentence(texts: &[String], lemmas: &[String], is_entity: &[bool]) -> Vec<Tag> {
    let mut tags: Vec<Tag> = texts
        .iter()
        .zip(lemmas)
        .zip(is_entity)
        .map(|((text, lemma), &entity)| {
            if entity {
                Tag::Noun
            } else if is_punct(text) {
                Tag::Punct
            } else if lemma == "her" || lemma == "that" {
                // Resolved from context below.
                Tag::Noun
            } else if let Some(tag) = closed_class(lemma) {
                tag
            } else if VERBS.contains(lemma.as_str()) {
                Tag::Verb
            } else if lemma.len() > 3 && lemma.ends_with("ly") {
                Tag::Adv
            } else {
                Tag::Noun
            }
        })
        .collect();

    for i in 0..tags.len() {
        let lemma = lemmas[i].as_str();
        let next = tags.get(i + 1).copied();

        if lemma == "her" && !is_entity[i] {
            tags[i] = if next == Some(Tag::Noun) {
                Tag::PronPoss
            } else {
                Tag::PronObj
            };
            continue;
        }
        if lemma == "that" && !is_entity[i] {
            let next_is_entity = is_entity.get(i + 1).copied().unwrap_or(false);
            tags[i] = if next == Some(Tag::PronSubj) || next_is_entity {
                Tag::Conj
            } else {
                Tag::Det
            };
            continue;
        }
        if tags[i] == Tag::Verb && lemma.ends_with("ed") && next == Some(Tag::Noun) {
            // Participle used as an adjective: "the first published algorithm".
            let prev = (0..i).rev().find(|&p| tags[p] != Tag::Adv);
            let attributive = prev.is_some_and(|p| {
                matches!(tags[p], Tag::Det | Tag::PronPoss) || is_ordinal(&lemmas[p])
            });
            if attributive {
                tags[i] = Tag::Noun;
            }
            continue;
        }
        if tags[i] != Tag::Noun || is_entity[i] {
            continue;
        }

        // Unknown word right after a subject pronoun, or an -ed form after a
        // subject or auxiliary, heads a clause.
        let prev = (0..i).rev().find(|&p| tags[p] != Tag::Adv);
        let prev_tag = prev.map(|p| tags[p]);
        let prev_is_entity = prev.is_some_and(|p| is_entity[p]);
        if prev_tag == Some(Tag::PronSubj) {
            tags[i] = Tag::Verb;
        } else if lemma.len() > 4
            && lemma.ends_with("ed")
            && (prev_tag == Some(Tag::Aux) || prev_is_entity)
        {
            tags[i] = Tag::Verb;
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(sentence: &str, entities: &[usize]) -> Vec<Tag> {
        let texts: Vec<String> = sentence.split(' ').map(str::to_string).collect();
        let lemmas: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();
        let mask: Vec<bool> = (0..texts.len()).map(|i| entities.contains(&i)).collect();
        tag_sentence(&texts, &lemmas, &mask)
    }

    #[test]
    fn her_object_versus_possessive() {
        use Tag::*;
        assert_eq!(tag("He followed her .", &[]), vec![PronSubj, Verb, PronObj, Punct]);
        assert_eq!(
            tag("She checked her notes .", &[]),
            vec![PronSubj, Verb, PronPoss, Noun, Punct]
        );
    }

    #[test]
    fn unknown_word_after_subject_pronoun_is_a_verb() {
        assert_eq!(tag("she dances", &[])[1], Tag::Verb);
        assert_eq!(tag("Ada calculated", &[0])[1], Tag::Verb);
        assert_eq!(tag("a talented engineer", &[])[1], Tag::Noun);
    }

    #[test]
    fn attributive_participles_are_nominal() {
        let tags = tag("wrote the first published algorithm", &[]);
        assert_eq!(tags[3], Tag::Noun);
        assert_eq!(tag("the engineer published results", &[])[2], Tag::Verb);
    }

    #[test]
    fn complementizer_that() {
        assert_eq!(tag("said that she left", &[])[1], Tag::Conj);
        assert_eq!(tag("that book", &[])[0], Tag::Det);
    }
}
