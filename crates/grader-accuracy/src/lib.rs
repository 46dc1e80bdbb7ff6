//! # grader-accuracy
//!
//! Accuracy axis of the grader: a pure structure validator for metric and
//! table blocks, an oracle-backed content scorer, deterministic feedback, and
//! correction requests for low-scoring blocks.

pub mod citations;
pub mod engine;
pub mod feedback;
pub mod prompts;
pub mod structure;

pub use citations::CitationLookup;
pub use engine::AccuracyEvaluator;
pub use feedback::{format_feedback, generate_actionable_feedback};
pub use structure::validate;
