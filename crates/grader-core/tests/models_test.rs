use grader_core::models::*;

#[test]
fn overall_score_weights_relevance_over_coherence() {
    let m = EvaluationMetrics::new(1.0, 0.0);
    assert!((m.overall_score - 0.6).abs() < 1e-12);
    let m = EvaluationMetrics::new(0.0, 1.0);
    assert!((m.overall_score - 0.4).abs() < 1e-12);
}

#[test]
fn invalid_structure_forces_zero_score() {
    let r = EvaluationResult::invalid_structure(BlockKind::Metric, true);
    assert!(!r.structure_valid);
    assert_eq!(r.content_score, 0.0);
    assert!(r.error_message.is_some());
}

#[test]
fn representation_ratio_floors_denominator() {
    let counts = GenderCounts { male: 0, female: 3 };
    assert_eq!(counts.representation_ratio(), 3.0);
    assert_eq!(GenderCounts::default().representation_ratio(), 0.0);
    assert_eq!(GenderCounts::default().male_share(), None);
    assert_eq!(GenderCounts::default().female_share(), None);
}

#[test]
fn one_sided_context_entries() {
    let entry = ContextAnalysisEntry {
        term: "engineer".into(),
        excerpt: "the engineer said he".into(),
        male: true,
        female: false,
    };
    assert_eq!(entry.one_sided(), Some(Gender::Male));
    let both = ContextAnalysisEntry {
        female: true,
        ..entry
    };
    assert_eq!(both.one_sided(), None);
}

#[test]
fn failed_correction_serialises_error_key_and_original() {
    let original = Block::metric("5", "");
    let correction = Correction::failed("missing fields", &original);
    assert!(!correction.is_usable());
    let value = serde_json::to_value(&correction).unwrap();
    assert_eq!(value["error"], "missing fields");
    assert_eq!(value["original_content"]["metric"], "5");
    assert!(correction.render().contains("Error generating correction: missing fields"));
}

#[test]
fn usable_correction_renders_json() {
    let correction = Correction::Metric {
        metric: "12%".into(),
        description: "annual growth, 2023".into(),
    };
    let text = correction.render();
    assert!(text.starts_with("Suggested correction:\n"));
    assert!(text.contains("\"metric\": \"12%\""));
}

#[test]
fn priority_levels_are_ordered() {
    assert!(PriorityLevel::Low < PriorityLevel::Medium);
    assert!(PriorityLevel::High < PriorityLevel::Critical);
    assert_eq!(PriorityLevel::Critical.indicator(), "🔴");
}
