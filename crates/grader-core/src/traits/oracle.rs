//! IScoringOracle: the external "judge" capability.
//!
//! Given a fully specified natural-language evaluation prompt, the oracle
//! returns raw reply text. Callers own interpretation: a reply that does not
//! parse is treated exactly like a transport failure.

use crate::errors::GraderResult;

/// Scoring oracle capability.
#[allow(async_fn_in_trait)]
pub trait IScoringOracle: Send + Sync {
    /// Send a grading prompt expecting a bare numeric reply.
    async fn score(&self, prompt: &str) -> GraderResult<String>;

    /// Send a prompt expecting a single JSON object as the reply.
    async fn score_json(&self, prompt: &str) -> GraderResult<String>;

    /// Human-readable oracle name.
    fn name(&self) -> &str;
}
