//! # grader-relevance
//!
//! Relevance and coherence axis. Adjacent block pairs are graded for
//! coherence in fixed-size concurrent batches; the whole document is graded
//! once against the query; both run overlapped and combine into
//! [`EvaluationMetrics`](grader_core::models::EvaluationMetrics).

pub mod batch;
pub mod engine;
pub mod feedback;
pub mod prompts;

pub use batch::run_batched;
pub use engine::RelevanceEvaluator;
pub use feedback::generate_actionable_feedback;
