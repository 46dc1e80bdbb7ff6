//! # grader-engine
//!
//! Orchestrator for document grading. Runs the accuracy, relevance and bias
//! evaluators over one document, merges their feedback, requests corrections
//! for low-scoring blocks, and returns a single [`Verdict`](grader_core::models::Verdict).

pub mod feedback;
pub mod orchestrator;
pub mod report;
pub mod tracing_setup;

pub use feedback::merge_feedback;
pub use orchestrator::CoreEvaluator;
pub use report::VerdictReport;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
