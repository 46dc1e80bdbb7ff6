use crate::errors::GraderResult;
use crate::models::ParsedText;

/// Dependency-parse capability. Must be deterministic for identical input.
pub trait IDependencyParser: Send + Sync {
    /// Parse text into tokens with heads and roles, person entities, and noun chunks.
    fn parse(&self, text: &str) -> GraderResult<ParsedText>;

    /// Human-readable parser name.
    fn name(&self) -> &str;
}
