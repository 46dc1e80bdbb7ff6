/// Scoring oracle errors. Every variant is recoverable: scorers map them to
/// their fixed fallback score.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("transport failed: {reason}")]
    Transport { reason: String },

    #[error("oracle returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("oracle call timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("oracle returned an empty reply")]
    EmptyReply,

    #[error("reply is not a score: {reply:?}")]
    MalformedScore { reply: String },

    #[error("reply is not valid JSON: {reason}")]
    MalformedJson { reason: String },

    #[error("missing credentials: {var} is not set")]
    MissingCredentials { var: String },
}
