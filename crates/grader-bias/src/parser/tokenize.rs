//! Word/punctuation tokenisation and sentence splitting.

use std::ops::Range;
use std::sync::LazyLock;

use grader_core::errors::ParserError;
use regex::Regex;

use crate::lexicon::HONORIFICS;

static TOKEN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*|[^\s\p{L}\p{N}]").ok());

/// Split text into word and punctuation tokens. A trailing possessive `'s`
/// becomes its own token.
pub fn tokenize(text: &str) -> Result<Vec<String>, ParserError> {
    let pattern = TOKEN_PATTERN.as_ref().ok_or_else(|| ParserError::Failed {
        reason: "token pattern failed to compile".to_string(),
    })?;

    let mut tokens = Vec::new();
    for m in pattern.find_iter(text) {
        let word = m.as_str();
        match split_possessive(word) {
            Some((base, clitic)) => {
                tokens.push(base.to_string());
                tokens.push(clitic.to_string());
            }
            None => tokens.push(word.to_string()),
        }
    }
    Ok(tokens)
}

fn split_possessive(word: &str) -> Option<(&str, &str)> {
    for suffix in ["'s", "’s", "'S", "’S"] {
        if let Some(base) = word.strip_suffix(suffix) {
            if !base.is_empty() {
                return Some((base, &word[base.len()..]));
            }
        }
    }
    None
}

/// Token ranges of each sentence. Periods after honorifics and single-letter
/// initials do not end a sentence.
pub fn sentences(tokens: &[String]) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        let terminal = match token.as_str() {
            "!" | "?" => true,
            "." => !i
                .checked_sub(1)
                .and_then(|p| tokens.get(p))
                .is_some_and(|prev| is_abbreviation(prev)),
            _ => false,
        };
        if terminal {
            out.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < tokens.len() {
        out.push(start..tokens.len());
    }
    out
}

fn is_abbreviation(word: &str) -> bool {
    let mut chars = word.chars();
    let single_initial =
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    single_initial || HONORIFICS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_punctuation_and_possessives() {
        let tokens = tokenize("Maria's team didn't stop, she said.").unwrap();
        assert_eq!(
            tokens,
            vec!["Maria", "'s", "team", "didn't", "stop", ",", "she", "said", "."]
        );
    }

    #[test]
    fn honorific_periods_do_not_split() {
        let tokens = tokenize("Dr. Smith arrived. J. Doe left! Done").unwrap();
        let s = sentences(&tokens);
        assert_eq!(s.len(), 3);
        assert_eq!(&tokens[s[0].clone()], ["Dr", ".", "Smith", "arrived", "."]);
        assert_eq!(&tokens[s[2].clone()], ["Done"]);
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(sentences(&[]).is_empty());
    }
}
