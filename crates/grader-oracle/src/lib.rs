//! # grader-oracle
//!
//! Concrete [`IScoringOracle`](grader_core::traits::IScoringOracle) backed by an
//! OpenAI-compatible chat-completions API. Transport failures, HTTP errors and
//! timeouts all surface as ordinary `OracleError`s; scorers map them to their
//! fallback scores.

pub mod chat;
pub mod protocol;

pub use chat::ChatOracle;
