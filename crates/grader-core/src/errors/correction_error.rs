/// Errors produced while requesting a content correction.
#[derive(Debug, thiserror::Error)]
pub enum CorrectionError {
    #[error("correction for {kind} block is missing fields: {fields}")]
    MissingFields { kind: String, fields: String },

    #[error("correction reply is not a JSON object: {reason}")]
    MalformedJson { reason: String },

    #[error("corrections are not supported for {kind} blocks")]
    UnsupportedKind { kind: String },
}
