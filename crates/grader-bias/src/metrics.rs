//! Ratios and strong-skew flags derived from [`BiasStats`].

use std::collections::BTreeSet;

use grader_core::config::BiasConfig;
use grader_core::models::{
    BiasIndicator, BiasMetrics, BiasStats, Gender, GenderCounts, NamedEntityCounts,
};

pub fn derive(stats: &BiasStats, config: &BiasConfig) -> BiasMetrics {
    let mut named_entities = NamedEntityCounts::default();
    for reference in stats.named_entity_references.values() {
        match reference.gender {
            Some(Gender::Male) => named_entities.male_count += 1,
            Some(Gender::Female) => named_entities.female_count += 1,
            None => {}
        }
    }

    let mut bias_indicators = BTreeSet::new();
    bias_indicators.extend(skew(
        &stats.generic_mentions,
        config.skew_threshold,
        BiasIndicator::StrongMaleGenericBias,
        BiasIndicator::StrongFemaleGenericBias,
    ));
    bias_indicators.extend(skew(
        &stats.professional_context,
        config.skew_threshold,
        BiasIndicator::StrongMaleProfessionalBias,
        BiasIndicator::StrongFemaleProfessionalBias,
    ));

    BiasMetrics {
        named_entities,
        generic_representation_ratio: stats.generic_mentions.representation_ratio(),
        professional_association_ratio: stats.professional_context.representation_ratio(),
        bias_indicators,
    }
}

/// Flag a tally whose male or female share strictly exceeds `threshold`.
fn skew(
    counts: &GenderCounts,
    threshold: f64,
    male: BiasIndicator,
    female: BiasIndicator,
) -> Option<BiasIndicator> {
    if counts.male_share()? > threshold {
        Some(male)
    } else if counts.female_share()? > threshold {
        Some(female)
    } else {
        None
    }
}
