/// Dependency-parse errors.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("parse failed: {reason}")]
    Failed { reason: String },

    #[error("token {index} has head {head} outside the sentence of {len} tokens")]
    DanglingHead { index: usize, head: usize, len: usize },
}
