//! Configuration system for the grader.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod accuracy_config;
pub mod bias_config;
pub mod defaults;
pub mod grader_config;
pub mod oracle_config;
pub mod relevance_config;

pub use accuracy_config::AccuracyConfig;
pub use bias_config::BiasConfig;
pub use grader_config::GraderConfig;
pub use oracle_config::OracleConfig;
pub use relevance_config::RelevanceConfig;
