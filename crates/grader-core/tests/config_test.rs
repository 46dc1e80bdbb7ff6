use std::collections::HashMap;

use grader_core::config::defaults;
use grader_core::errors::ConfigError;
use grader_core::GraderConfig;

#[test]
fn defaults_are_valid() {
    let config = GraderConfig::default();
    config.validate().unwrap();
    assert_eq!(
        config.relevance.coherence_batch_size,
        defaults::DEFAULT_COHERENCE_BATCH_SIZE
    );
    assert_eq!(config.oracle.model, "gpt-4");
    assert_eq!(config.bias.context_window, 5);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = GraderConfig::from_toml(
        r#"
        [relevance]
        coherence_batch_size = 8

        [bias]
        skew_threshold = 0.75
        "#,
    )
    .unwrap();
    assert_eq!(config.relevance.coherence_batch_size, 8);
    assert_eq!(config.bias.skew_threshold, 0.75);
    assert_eq!(config.relevance.fallback_score, 0.5);
    assert_eq!(config.accuracy.intervention_threshold, 0.6);
}

#[test]
fn zero_batch_size_is_rejected() {
    let err = GraderConfig::from_toml("[relevance]\ncoherence_batch_size = 0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "relevance.coherence_batch_size")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inverted_ratio_bounds_are_rejected() {
    let err = GraderConfig::from_toml(
        "[bias]\nbalanced_ratio_min = 1.5\nbalanced_ratio_max = 1.2\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("bias.balanced_ratio_min"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GraderConfig::from_toml("[relevance\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_apply_and_ignore_garbage() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("GRADER_BATCH_SIZE", "2"),
        ("GRADER_ORACLE_MODEL", "gpt-4o"),
        ("GRADER_ORACLE_TIMEOUT_SECS", "not-a-number"),
    ]);
    let mut config = GraderConfig::default();
    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));
    assert_eq!(config.relevance.coherence_batch_size, 2);
    assert_eq!(config.oracle.model, "gpt-4o");
    assert_eq!(
        config.oracle.timeout_secs,
        defaults::DEFAULT_ORACLE_TIMEOUT_SECS
    );
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grader.toml");
    std::fs::write(&path, "[accuracy]\nintervention_threshold = 0.5\n").unwrap();
    let config = GraderConfig::load(&path).unwrap();
    assert_eq!(config.accuracy.intervention_threshold, 0.5);
}

#[test]
fn load_reports_missing_file() {
    let err = GraderConfig::load(std::path::Path::new("/nonexistent/grader.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
