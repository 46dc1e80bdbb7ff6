use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical gender of a lexicon term or a resolved entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Pronouns attributed to one named person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityReference {
    /// Attributed pronouns in document order, as written.
    pub pronouns: Vec<String>,
    /// `None` when the pronouns are absent or disagree.
    pub gender: Option<Gender>,
}

/// Male/female tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

impl GenderCounts {
    pub fn add(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }

    /// `female / max(male, 1)`, always finite and non-negative.
    pub fn representation_ratio(&self) -> f64 {
        self.female as f64 / self.male.max(1) as f64
    }

    /// Fraction of the tally that is male, or `None` for an empty tally.
    pub fn male_share(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.male as f64 / total as f64)
    }

    /// Fraction of the tally that is female, or `None` for an empty tally.
    pub fn female_share(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.female as f64 / total as f64)
    }
}

/// A professional term together with the gendered terms found near it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAnalysisEntry {
    pub term: String,
    /// The token window around the term, space-joined.
    pub excerpt: String,
    pub male: bool,
    pub female: bool,
}

impl ContextAnalysisEntry {
    /// The single gender associated with the term, if only one co-occurred.
    pub fn one_sided(&self) -> Option<Gender> {
        match (self.male, self.female) {
            (true, false) => Some(Gender::Male),
            (false, true) => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Raw tallies produced by the bias analyzer.
///
/// A pronoun attributed to a named entity is never also counted in
/// `generic_mentions` or `professional_context`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasStats {
    pub named_entity_references: BTreeMap<String, EntityReference>,
    pub generic_mentions: GenderCounts,
    pub professional_context: GenderCounts,
    pub context_analysis: Vec<ContextAnalysisEntry>,
}

/// Named entities grouped by resolved gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntityCounts {
    pub male_count: usize,
    pub female_count: usize,
}

/// Qualitative skew flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasIndicator {
    StrongMaleGenericBias,
    StrongFemaleGenericBias,
    StrongMaleProfessionalBias,
    StrongFemaleProfessionalBias,
}

impl fmt::Display for BiasIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StrongMaleGenericBias => "strong male bias in generic mentions",
            Self::StrongFemaleGenericBias => "strong female bias in generic mentions",
            Self::StrongMaleProfessionalBias => "strong male bias in professional contexts",
            Self::StrongFemaleProfessionalBias => "strong female bias in professional contexts",
        })
    }
}

/// Metrics derived from [`BiasStats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasMetrics {
    pub named_entities: NamedEntityCounts,
    pub generic_representation_ratio: f64,
    pub professional_association_ratio: f64,
    pub bias_indicators: BTreeSet<BiasIndicator>,
}

/// Full bias analysis output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub stats: BiasStats,
    pub metrics: BiasMetrics,
    pub recommendations: Vec<String>,
}
