//! Cross-axis feedback merge.

use grader_core::models::Feedback;

/// Merge feedback in order: duplicates dropped keeping the first occurrence,
/// priority is the highest contributor's.
pub fn merge_feedback<'a>(parts: impl IntoIterator<Item = &'a Feedback>) -> Feedback {
    parts.into_iter().fold(Feedback::default(), |mut merged, part| {
        merged.merge(part);
        merged
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grader_core::models::PriorityLevel;

    fn feedback(area: &str, priority: PriorityLevel) -> Feedback {
        Feedback {
            areas_for_improvement: vec![area.to_string()],
            specific_recommendations: vec!["Add citations".to_string()],
            priority_level: priority,
            ..Default::default()
        }
    }

    #[test]
    fn first_occurrence_wins_and_priority_is_max() {
        let a = feedback("Flow", PriorityLevel::Medium);
        let b = feedback("Citations missing", PriorityLevel::High);
        let c = feedback("Flow", PriorityLevel::Low);
        let merged = merge_feedback([&a, &b, &c]);
        assert_eq!(merged.areas_for_improvement, vec!["Flow", "Citations missing"]);
        assert_eq!(merged.specific_recommendations, vec!["Add citations"]);
        assert_eq!(merged.priority_level, PriorityLevel::High);
    }

    #[test]
    fn empty_merge_is_low_priority() {
        let merged = merge_feedback(std::iter::empty());
        assert!(merged.is_empty());
        assert_eq!(merged.priority_level, PriorityLevel::Low);
    }
}
