/// Grader version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight of the relevance axis in the overall relevance/coherence score.
pub const RELEVANCE_WEIGHT: f64 = 0.6;

/// Weight of the coherence axis in the overall relevance/coherence score.
pub const COHERENCE_WEIGHT: f64 = 0.4;

/// Score assigned to a coherence pair or relevance call whose reply was unusable.
pub const NEUTRAL_FALLBACK_SCORE: f64 = 0.5;

/// Score assigned to an accuracy evaluation that failed or was rejected.
pub const ACCURACY_FAILURE_SCORE: f64 = 0.0;

/// Minimum number of rows (header row included) for a table to be well-formed.
pub const MIN_TABLE_ROWS: usize = 2;

/// Header used when a document does not start with a header block.
pub const NO_HEADER: &str = "No Header";
