//! Built-in heuristic dependency parser.
//!
//! Lexicon- and rule-based; deterministic for identical input. Good enough to
//! relate English pronouns to the names around them, not a general parser.

pub mod entities;
pub mod tagger;
pub mod tokenize;
pub mod tree;

use grader_core::errors::{GraderResult, ParserError};
use grader_core::models::{ParsedText, Token};
use grader_core::traits::IDependencyParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicParser;

impl HeuristicParser {
    pub fn new() -> Self {
        Self
    }
}

impl IDependencyParser for HeuristicParser {
    fn parse(&self, text: &str) -> GraderResult<ParsedText> {
        let texts = tokenize::tokenize(text)?;
        let lemmas: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();
        let sentences = tokenize::sentences(&texts);
        let entities = entities::recognize(&texts, &lemmas, &sentences);

        let mut is_entity = vec![false; texts.len()];
        for entity in &entities {
            for flag in &mut is_entity[entity.span.start..entity.span.end] {
                *flag = true;
            }
        }

        let mut arcs = Vec::with_capacity(texts.len());
        let mut noun_chunks = Vec::new();
        for sentence in &sentences {
            let range = sentence.clone();
            let tags = tagger::tag_sentence(
                &texts[range.clone()],
                &lemmas[range.clone()],
                &is_entity[range.clone()],
            );
            let built = tree::build(
                range.clone(),
                &tags,
                &lemmas[range.clone()],
                &is_entity[range],
            );
            arcs.extend(built.arcs);
            noun_chunks.extend(built.chunks);
        }

        let len = texts.len();
        let tokens = texts
            .into_iter()
            .zip(lemmas)
            .zip(arcs)
            .enumerate()
            .map(|(index, ((text, lemma), (dep, head)))| {
                if head >= len {
                    return Err(ParserError::DanglingHead { index, head, len });
                }
                Ok(Token {
                    text,
                    lemma,
                    dep,
                    head,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParsedText {
            tokens,
            entities,
            noun_chunks,
        })
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_core::models::DepRole;

    fn parse(text: &str) -> ParsedText {
        HeuristicParser::new().parse(text).unwrap()
    }

    #[test]
    fn every_token_has_an_in_range_head() {
        let parsed =
            parse("Ada Lovelace wrote notes. She worked with Charles Babbage on his engine.");
        let len = parsed.tokens.len();
        assert!(parsed.tokens.iter().all(|t| t.head < len));
        let roots = parsed
            .tokens
            .iter()
            .enumerate()
            .filter(|(i, t)| t.dep == DepRole::Root && t.head == *i)
            .count();
        assert_eq!(roots, 2);
    }

    #[test]
    fn names_possessives_and_subjects() {
        let parsed = parse("Maria said she left.");
        assert_eq!(parsed.entities.len(), 1);
        assert_eq!(parsed.entities[0].text, "Maria");
        let she = &parsed.tokens[2];
        assert_eq!(she.dep, DepRole::Subject);
        assert_eq!(parsed.tokens[she.head].text, "left");
        assert_eq!(parsed.tokens[3].dep, DepRole::Complement);
        assert_eq!(parsed.tokens[3].head, 1);
    }

    #[test]
    fn deterministic_and_empty_safe() {
        let text = "Every scientist should check his assumptions before he publishes.";
        assert_eq!(parse(text), parse(text));
        assert!(parse("").tokens.is_empty());
        assert_eq!(HeuristicParser::new().name(), "heuristic");
    }
}
