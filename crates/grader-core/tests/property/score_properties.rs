use grader_core::models::{Block, Cell, EvaluationMetrics, GenderCounts};
use grader_core::score::{clamp_score, parse_unit_score};
use proptest::prelude::*;

// ── Overall score is exactly the 0.6/0.4 blend ────────────────────────────

proptest! {
    #[test]
    fn overall_score_identity(relevance in 0.0f64..=1.0, coherence in 0.0f64..=1.0) {
        let m = EvaluationMetrics::new(relevance, coherence);
        prop_assert!((m.overall_score - (0.6 * relevance + 0.4 * coherence)).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&m.overall_score));
    }
}

// ── Ratios are always finite and non-negative ─────────────────────────────

proptest! {
    #[test]
    fn representation_ratio_well_defined(male in 0usize..1000, female in 0usize..1000) {
        let ratio = GenderCounts { male, female }.representation_ratio();
        prop_assert!(ratio.is_finite());
        prop_assert!(ratio >= 0.0);
    }
}

// ── Clamped unit scores never leave [0, 1] ────────────────────────────────

proptest! {
    #[test]
    fn unit_score_in_range(value in proptest::num::f64::ANY) {
        let clamped = clamp_score(value, 0.0, 1.0);
        prop_assert!((0.0..=1.0).contains(&clamped));
    }

    #[test]
    fn printed_floats_parse_back(value in -10.0f64..10.0) {
        let parsed = parse_unit_score(&format!("  {value}\n")).unwrap();
        prop_assert_eq!(parsed, value.clamp(0.0, 1.0));
    }
}

// ── Text blocks survive the keyed wire form ───────────────────────────────

proptest! {
    #[test]
    fn paragraph_wire_form(text in "[a-zA-Z .,]{0,40}") {
        let block = Block::paragraph(text.clone());
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.renderable_text(), text.as_str());
    }

    #[test]
    fn text_cells_blank_iff_trim_empty(text in "[ a-z]{0,8}") {
        prop_assert_eq!(Cell::Text(text.clone()).is_blank(), text.trim().is_empty());
    }
}
