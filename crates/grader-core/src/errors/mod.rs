//! Error handling for the grader.
//! One error enum per subsystem, `thiserror` only.

pub mod block_error;
pub mod config_error;
pub mod correction_error;
pub mod oracle_error;
pub mod parser_error;

pub use block_error::BlockError;
pub use config_error::ConfigError;
pub use correction_error::CorrectionError;
pub use oracle_error::OracleError;
pub use parser_error::ParserError;

/// Root error type. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("correction error: {0}")]
    Correction(#[from] CorrectionError),

    #[error("block error: {0}")]
    Block(#[from] BlockError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GraderResult<T> = Result<T, GraderError>;
