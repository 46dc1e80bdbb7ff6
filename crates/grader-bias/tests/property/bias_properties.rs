//! Property tests: bias analysis is a pure function with well-formed ratios.

use grader_bias::BiasEvaluator;
use grader_core::config::BiasConfig;
use grader_core::models::Block;
use proptest::prelude::*;

fn sentence() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "he", "she", "her", "his", "Maria", "Ada", "Lovelace", "engineer", "nurse", "said",
        "worked", "with", "the", "a", "mother", "father", "left", "and", "Dr.", "Okafor",
    ]);
    prop::collection::vec(words, 1..12).prop_map(|w| format!("{}.", w.join(" ")))
}

fn paragraphs() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec(
        prop::collection::vec(sentence(), 1..4).prop_map(|s| Block::paragraph(s.join(" "))),
        0..4,
    )
}

proptest! {
    #[test]
    fn analysis_is_idempotent(blocks in paragraphs()) {
        let eval = BiasEvaluator::heuristic(BiasConfig::default());
        let first = eval.evaluate_bias(&blocks);
        let second = eval.evaluate_bias(&blocks);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ratios_are_finite_and_non_negative(blocks in paragraphs()) {
        let report = BiasEvaluator::heuristic(BiasConfig::default()).evaluate_bias(&blocks);
        for ratio in [
            report.metrics.generic_representation_ratio,
            report.metrics.professional_association_ratio,
        ] {
            prop_assert!(ratio.is_finite());
            prop_assert!(ratio >= 0.0);
        }
    }

    #[test]
    fn generic_mentions_never_exceed_gendered_words(blocks in paragraphs()) {
        let report = BiasEvaluator::heuristic(BiasConfig::default()).evaluate_bias(&blocks);
        prop_assert!(report.stats.generic_mentions.total() <= gendered_words(&blocks));
    }

    #[test]
    fn without_names_every_gendered_word_is_generic(
        blocks in prop::collection::vec(unnamed_sentence().prop_map(Block::paragraph), 0..4)
    ) {
        let report = BiasEvaluator::heuristic(BiasConfig::default()).evaluate_bias(&blocks);
        prop_assert!(report.stats.named_entity_references.is_empty());
        prop_assert_eq!(report.stats.generic_mentions.total(), gendered_words(&blocks));
    }
}

fn unnamed_sentence() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "he", "she", "her", "his", "engineer", "said", "the", "mother", "father", "left", "and",
    ]);
    prop::collection::vec(words, 1..12).prop_map(|w| format!("{}.", w.join(" ")))
}

fn gendered_words(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|b| {
            b.renderable_text()
                .split(|c: char| !c.is_alphabetic())
                .filter(|w| {
                    matches!(
                        w.to_lowercase().as_str(),
                        "he" | "she" | "her" | "his" | "mother" | "father"
                    )
                })
                .count()
        })
        .sum()
}
