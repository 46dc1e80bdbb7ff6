//! Human-readable recommendations from bias metrics.

use grader_core::config::BiasConfig;
use grader_core::models::{BiasMetrics, BiasStats, Gender};

pub fn recommend(stats: &BiasStats, metrics: &BiasMetrics, config: &BiasConfig) -> Vec<String> {
    let mut out = Vec::new();

    out.extend(balance("generic references", metrics.generic_representation_ratio, config));
    out.extend(balance(
        "professional contexts",
        metrics.professional_association_ratio,
        config,
    ));
    for indicator in &metrics.bias_indicators {
        out.push(format!(
            "Detected {indicator}; revise wording toward neutral or balanced references"
        ));
    }

    out.extend(
        stats
            .context_analysis
            .iter()
            .filter_map(|entry| entry.one_sided().map(|gender| (entry, gender)))
            .take(config.max_examples)
            .map(|(entry, gender)| {
                format!(
                    "Example: \"{}\" associates {} with {} terms only",
                    entry.excerpt, entry.term, gender
                )
            }),
    );
    out
}

fn balance(area: &str, ratio: f64, config: &BiasConfig) -> Option<String> {
    if ratio == 0.0 || (config.balanced_ratio_min..=config.balanced_ratio_max).contains(&ratio) {
        return None;
    }
    let under = if ratio < config.balanced_ratio_min {
        Gender::Female
    } else {
        Gender::Male
    };
    Some(format!(
        "Balance {area}: add {under} references (female-to-male ratio {ratio:.2})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_core::models::{BiasIndicator, ContextAnalysisEntry, GenderCounts};

    fn entry(term: &str, male: bool, female: bool) -> ContextAnalysisEntry {
        ContextAnalysisEntry {
            term: term.to_string(),
            excerpt: format!("the {term} and his notes"),
            male,
            female,
        }
    }

    #[test]
    fn balanced_or_zero_ratios_are_silent() {
        let config = BiasConfig::default();
        let metrics = BiasMetrics {
            generic_representation_ratio: 1.0,
            professional_association_ratio: 0.0,
            ..Default::default()
        };
        assert!(recommend(&BiasStats::default(), &metrics, &config).is_empty());
    }

    #[test]
    fn skewed_ratio_names_the_underrepresented_side() {
        let config = BiasConfig::default();
        let metrics = BiasMetrics {
            generic_representation_ratio: 0.25,
            professional_association_ratio: 3.0,
            ..Default::default()
        };
        let recs = recommend(&BiasStats::default(), &metrics, &config);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("add female references"));
        assert!(recs[0].contains("0.25"));
        assert!(recs[1].contains("add male references"));
    }

    #[test]
    fn examples_are_capped_and_one_sided() {
        let config = BiasConfig {
            max_examples: 2,
            ..Default::default()
        };
        let stats = BiasStats {
            professional_context: GenderCounts { male: 4, female: 1 },
            context_analysis: vec![
                entry("engineer", true, false),
                entry("nurse", true, true),
                entry("doctor", true, false),
                entry("pilot", true, false),
            ],
            ..Default::default()
        };
        let metrics = BiasMetrics {
            bias_indicators: [BiasIndicator::StrongMaleProfessionalBias].into(),
            ..Default::default()
        };
        let recs = recommend(&stats, &metrics, &config);
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("strong male bias in professional contexts"));
        assert!(recs[1].contains("engineer"));
        assert!(recs[2].contains("doctor"));
    }

    #[test]
    fn examples_stand_on_their_own() {
        let stats = BiasStats {
            professional_context: GenderCounts { male: 1, female: 1 },
            context_analysis: vec![entry("engineer", true, false), entry("nurse", false, true)],
            ..Default::default()
        };
        let metrics = BiasMetrics {
            generic_representation_ratio: 1.0,
            professional_association_ratio: 1.0,
            ..Default::default()
        };
        let recs = recommend(&stats, &metrics, &BiasConfig::default());
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.starts_with("Example:")));
        assert!(recs[1].contains("nurse with female terms only"));
    }
}
