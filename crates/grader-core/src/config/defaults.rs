// Single source of truth for all default values.

// --- Oracle ---
pub const DEFAULT_ORACLE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_ORACLE_MODEL: &str = "gpt-4";
pub const DEFAULT_ORACLE_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_ORACLE_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ORACLE_MAX_RETRIES: u32 = 3;
pub const DEFAULT_ORACLE_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_ORACLE_MAX_BACKOFF_MS: u64 = 30_000;

// --- Accuracy ---
pub const DEFAULT_INTERVENTION_THRESHOLD: f64 = 0.6;

// --- Relevance / coherence ---
pub const DEFAULT_COHERENCE_BATCH_SIZE: usize = 4;
pub const DEFAULT_RELEVANCE_FALLBACK_SCORE: f64 = 0.5;
pub const DEFAULT_STRENGTH_THRESHOLD: f64 = 0.8;

// --- Bias ---
pub const DEFAULT_CONTEXT_WINDOW: usize = 5;
pub const DEFAULT_SKEW_THRESHOLD: f64 = 0.7;
pub const DEFAULT_BALANCED_RATIO_MIN: f64 = 0.8;
pub const DEFAULT_BALANCED_RATIO_MAX: f64 = 1.2;
pub const DEFAULT_MAX_EXAMPLES: usize = 3;
pub const DEFAULT_CARRY_OVER_RESOLUTION: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "grader=info";
