//! Entity, generic and professional-context tallies for one parsed block.

use std::collections::BTreeSet;

use grader_core::models::{BiasStats, ContextAnalysisEntry, Gender, GenderCounts, ParsedText};

use crate::coreference::{resolved_gender, Attributions};
use crate::lexicon::{is_professional, pronoun_gender, term_gender};

/// Fold one parsed paragraph into `stats`.
///
/// Entity-attributed pronouns and tokens inside a name are excluded from the
/// generic and professional tallies.
pub fn tally(
    parsed: &ParsedText,
    attributions: &Attributions,
    window: usize,
    stats: &mut BiasStats,
) {
    for entity in &parsed.entities {
        stats
            .named_entity_references
            .entry(entity.text.clone())
            .or_default();
    }
    for (&pronoun, entities) in attributions {
        let written = &parsed.tokens[pronoun].text;
        let names: BTreeSet<&str> = entities
            .iter()
            .filter_map(|&e| parsed.entities.get(e))
            .map(|e| e.text.as_str())
            .collect();
        for name in names {
            stats
                .named_entity_references
                .entry(name.to_string())
                .or_default()
                .pronouns
                .push(written.clone());
        }
    }

    let excluded = |i: usize| attributions.contains_key(&i) || parsed.entity_at(i).is_some();
    let gender_at = |i: usize| {
        if excluded(i) {
            None
        } else {
            term_gender(&parsed.tokens[i].lemma)
        }
    };

    for i in 0..parsed.tokens.len() {
        if let Some(gender) = gender_at(i) {
            stats.generic_mentions.add(gender);
        }
    }

    let words: Vec<usize> = (0..parsed.tokens.len())
        .filter(|&i| is_word(&parsed.tokens[i].text))
        .collect();
    for (position, &index) in words.iter().enumerate() {
        let term = &parsed.tokens[index].lemma;
        if !is_professional(term) {
            continue;
        }
        let lo = position.saturating_sub(window);
        let hi = (position + window + 1).min(words.len());
        let around = &words[lo..hi];

        let mut male = false;
        let mut female = false;
        for &k in around.iter().filter(|&&k| k != index) {
            match gender_at(k) {
                Some(Gender::Male) => male = true,
                Some(Gender::Female) => female = true,
                None => {}
            }
        }
        if !male && !female {
            continue;
        }
        if male {
            stats.professional_context.add(Gender::Male);
        }
        if female {
            stats.professional_context.add(Gender::Female);
        }
        stats.context_analysis.push(ContextAnalysisEntry {
            term: parsed.tokens[index].text.clone(),
            excerpt: around
                .iter()
                .map(|&k| parsed.tokens[k].text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            male,
            female,
        });
    }
}

/// Recompute every entity's gender from its attributed pronouns.
pub fn settle_entity_genders(stats: &mut BiasStats) {
    for reference in stats.named_entity_references.values_mut() {
        let mut counts = GenderCounts::default();
        for pronoun in &reference.pronouns {
            if let Some(gender) = pronoun_gender(&pronoun.to_lowercase()) {
                counts.add(gender);
            }
        }
        reference.gender = resolved_gender(&counts);
    }
}

fn is_word(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coreference::resolve;
    use crate::parser::HeuristicParser;
    use grader_core::traits::IDependencyParser;

    fn stats_for(text: &str, window: usize) -> BiasStats {
        let parsed = HeuristicParser::new().parse(text).unwrap();
        let attributions = resolve(&parsed, true);
        let mut stats = BiasStats::default();
        tally(&parsed, &attributions, window, &mut stats);
        settle_entity_genders(&mut stats);
        stats
    }

    #[test]
    fn attributed_pronouns_are_not_generic() {
        let stats = stats_for("Maria said she left. He followed her.", 5);
        let maria = &stats.named_entity_references["Maria"];
        assert_eq!(maria.pronouns, vec!["she", "her"]);
        assert_eq!(maria.gender, Some(Gender::Female));
        assert_eq!(stats.generic_mentions.male, 1);
        assert_eq!(stats.generic_mentions.female, 0);
    }

    #[test]
    fn professional_window_records_excerpt() {
        let stats = stats_for("A good engineer knows his tools.", 5);
        assert_eq!(stats.professional_context.male, 1);
        assert_eq!(stats.professional_context.female, 0);
        let entry = &stats.context_analysis[0];
        assert_eq!(entry.term, "engineer");
        assert_eq!(entry.excerpt, "A good engineer knows his tools");
        assert_eq!(entry.one_sided(), Some(Gender::Male));
    }

    #[test]
    fn window_bounds_are_respected() {
        let stats = stats_for("The doctor arrived early and then much later he left.", 2);
        assert_eq!(stats.professional_context.total(), 0);
        assert!(stats.context_analysis.is_empty());
        assert_eq!(stats.generic_mentions.male, 1);
    }

    #[test]
    fn unreferenced_entities_are_listed_without_gender() {
        let stats = stats_for("Yesterday Dr. Okafor presented the results.", 5);
        assert_eq!(stats.named_entity_references["Okafor"].gender, None);
        assert!(stats.named_entity_references["Okafor"].pronouns.is_empty());
    }
}
