//! Person-name recognition.
//!
//! A run of capitalised words is a person when it follows an honorific,
//! starts with a known given name, or sits mid-sentence, spans at least two
//! words and contains no organisation or place word. A single capitalised
//! word repeating part of an accepted name is accepted as well.

use std::ops::Range;

use grader_core::models::{EntitySpan, Span};

use crate::lexicon::{GIVEN_NAMES, HONORIFICS, NON_PERSON_WORDS};

fn is_capitalised_word(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(|c| c.is_alphabetic() || c == '-')
}

/// Lowercase words that never start a name even when capitalised.
fn is_function_word(lemma: &str) -> bool {
    matches!(
        lemma,
        "he" | "she" | "it" | "they" | "we" | "i" | "you" | "his" | "her" | "their" | "its"
            | "my" | "our" | "your" | "the" | "a" | "an" | "this" | "that" | "these"
            | "those" | "every" | "each" | "in" | "on" | "at" | "of" | "for" | "and" | "or"
            | "but" | "if" | "when" | "while" | "after" | "before" | "as" | "to" | "with"
    )
}

struct Run {
    range: Range<usize>,
    honorific: bool,
    sentence_start: usize,
}

/// Capitalised runs per sentence, with leading honorifics stripped.
fn capitalised_runs(texts: &[String], lemmas: &[String], sentences: &[Range<usize>]) -> Vec<Run> {
    let mut runs = Vec::new();
    for sentence in sentences {
        let mut i = sentence.start;
        while i < sentence.end {
            let is_name_word =
                |k: usize| is_capitalised_word(&texts[k]) && !is_function_word(&lemmas[k]);
            if !is_name_word(i) {
                i += 1;
                continue;
            }
            let mut start = i;
            let mut end = i;
            while end < sentence.end && is_name_word(end) {
                end += 1;
            }
            i = end;

            // Capitalised only because it opens the sentence.
            let opener = lemmas[start].as_str();
            if start == sentence.start
                && !GIVEN_NAMES.contains(opener)
                && !HONORIFICS.contains(opener)
            {
                start += 1;
            }

            // "Dr Smith" or "Dr. Smith"
            let mut honorific = start < end && preceded_by_honorific(start, sentence.start, lemmas);
            while start < end && HONORIFICS.contains(lemmas[start].as_str()) {
                start += 1;
                honorific = true;
            }
            if start < end {
                runs.push(Run {
                    range: start..end,
                    honorific,
                    sentence_start: sentence.start,
                });
            }
        }
    }
    runs
}

fn preceded_by_honorific(start: usize, sentence_start: usize, lemmas: &[String]) -> bool {
    let before = |k: usize| k.checked_sub(1).filter(|p| *p >= sentence_start);
    match before(start) {
        Some(p) if lemmas[p] == "." => {
            before(p).is_some_and(|q| HONORIFICS.contains(lemmas[q].as_str()))
        }
        Some(p) => HONORIFICS.contains(lemmas[p].as_str()),
        None => false,
    }
}

fn is_person(run: &Run, lemmas: &[String]) -> bool {
    let words = &lemmas[run.range.clone()];
    if words.iter().any(|w| NON_PERSON_WORDS.contains(w.as_str())) {
        return false;
    }
    run.honorific
        || GIVEN_NAMES.contains(words[0].as_str())
        || (run.range.start > run.sentence_start && words.len() >= 2)
}

/// Recognise person entities across all sentences, in token order.
pub fn recognize(
    texts: &[String],
    lemmas: &[String],
    sentences: &[Range<usize>],
) -> Vec<EntitySpan> {
    let runs = capitalised_runs(texts, lemmas, sentences);
    let join = |range: &Range<usize>| texts[range.clone()].join(" ");

    let accepted: Vec<bool> = runs.iter().map(|r| is_person(r, lemmas)).collect();
    let name_words: Vec<&str> = runs
        .iter()
        .zip(&accepted)
        .filter(|(r, ok)| **ok && r.range.len() >= 2)
        .flat_map(|(r, _)| texts[r.range.clone()].iter().map(String::as_str))
        .collect();

    runs.iter()
        .zip(&accepted)
        .filter(|(run, ok)| {
            **ok || (run.range.len() == 1 && name_words.contains(&texts[run.range.start].as_str()))
        })
        .map(|(run, _)| EntitySpan {
            text: join(&run.range),
            span: Span::new(run.range.start, run.range.end),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize::{sentences, tokenize};

    fn names(text: &str) -> Vec<String> {
        let texts = tokenize(text).unwrap();
        let lemmas: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();
        let s = sentences(&texts);
        recognize(&texts, &lemmas, &s)
            .into_iter()
            .map(|e| e.text)
            .collect()
    }

    #[test]
    fn gazetteer_and_mid_sentence_names() {
        assert_eq!(
            names("Ada Lovelace met Charles Babbage. Later Lovelace wrote notes."),
            vec!["Ada Lovelace", "Charles Babbage", "Lovelace"]
        );
    }

    #[test]
    fn honorifics_are_excluded_from_the_name() {
        assert_eq!(names("Yesterday Dr. Okafor presented."), vec!["Okafor"]);
        assert_eq!(names("Mrs Whitfield agreed."), vec!["Whitfield"]);
    }

    #[test]
    fn places_and_sentence_openers_are_not_people() {
        assert!(names("Measurement matters. He visited the Analytical Engine.").is_empty());
        assert!(names("She studied at Stanford University.").is_empty());
    }
}
