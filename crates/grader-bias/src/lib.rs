//! # grader-bias
//!
//! Gender-representation analysis. Paragraphs are parsed into a dependency
//! tree, gendered pronouns are attributed to named people where the tree or
//! the surrounding sentences allow it, and everything left over is tallied as
//! generic or professional-context usage. Pure and deterministic: no oracle.

pub mod coreference;
pub mod counting;
pub mod engine;
pub mod lexicon;
pub mod metrics;
pub mod parser;
pub mod recommendations;

pub use engine::{generate_actionable_feedback, BiasEvaluator};
pub use parser::HeuristicParser;
