//! # grader-core
//!
//! Foundation crate for the response grading engine.
//! Defines the block model, result types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod score;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GraderConfig;
pub use errors::{GraderError, GraderResult};
pub use models::{Block, BlockKind, EvaluationMetrics, EvaluationResult, Feedback, PriorityLevel};
