//! Test support for the grader workspace: sample documents and a scripted oracle.
//!
//! `ScriptedOracle` stands in for the network oracle in every scorer test. It
//! records each prompt it receives, answers from a rule list keyed on prompt
//! substrings, and tracks how many calls are in flight at once.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use grader_core::errors::{GraderResult, OracleError};
use grader_core::models::Block;
use grader_core::traits::IScoringOracle;
use serde::de::DeserializeOwned;

/// Root directory of the bundled fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("documents")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The bundled sample documents: a JSON array of block arrays.
pub fn sample_documents() -> Vec<Vec<Block>> {
    load_fixture("sample_responses.json")
}

/// Reply a rule produces.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Text(String),
    /// Simulate a transport failure.
    Fail,
}

/// One call observed by the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub json: bool,
}

/// Deterministic fake oracle.
///
/// Rules are checked in insertion order; the first whose needle occurs in the
/// prompt wins. Prompts matching no rule get the default reply.
#[derive(Debug)]
pub struct ScriptedOracle {
    rules: Vec<(String, ScriptedReply)>,
    default_reply: ScriptedReply,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedOracle {
    /// An oracle answering every prompt with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self::with_default(ScriptedReply::Text(reply.into()))
    }

    /// An oracle failing every call unless a rule matches.
    pub fn failing() -> Self {
        Self::with_default(ScriptedReply::Fail)
    }

    fn with_default(default_reply: ScriptedReply) -> Self {
        Self {
            rules: Vec::new(),
            default_reply,
            delay: None,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Reply with `reply` to prompts containing `needle`.
    pub fn when(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules
            .push((needle.into(), ScriptedReply::Text(reply.into())));
        self
    }

    /// Fail prompts containing `needle`.
    pub fn fail_when(mut self, needle: impl Into<String>) -> Self {
        self.rules.push((needle.into(), ScriptedReply::Fail));
        self
    }

    /// Hold every call open for `delay` before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.prompt).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    /// Number of recorded prompts containing `needle`.
    pub fn count_matching(&self, needle: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.prompt.contains(needle))
            .count()
    }

    /// Highest number of calls observed in flight at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn reply_for(&self, prompt: &str) -> ScriptedReply {
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default_reply.clone())
    }

    async fn respond(&self, prompt: &str, json: bool) -> GraderResult<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                json,
            });
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        match self.delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.reply_for(prompt) {
            ScriptedReply::Text(text) => Ok(text),
            ScriptedReply::Fail => Err(OracleError::Transport {
                reason: "scripted failure".to_string(),
            }
            .into()),
        }
    }
}

impl IScoringOracle for ScriptedOracle {
    async fn score(&self, prompt: &str) -> GraderResult<String> {
        self.respond(prompt, false).await
    }

    async fn score_json(&self, prompt: &str) -> GraderResult<String> {
        self.respond(prompt, true).await
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn bundled_fixtures_exist() {
        assert!(fixture_exists("sample_responses.json"));
        assert!(fixture_exists("citations.json"));
    }

    #[test]
    fn sample_documents_parse() {
        let docs = sample_documents();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| !d.is_empty()));
        let citations: BTreeMap<u32, String> = load_fixture("citations.json");
        assert_eq!(citations.len(), 3);
    }

    #[tokio::test]
    async fn first_matching_rule_wins() {
        let oracle = ScriptedOracle::new("0.5")
            .when("coherence", "0.9")
            .when("co", "0.1")
            .fail_when("broken");

        assert_eq!(oracle.score("check coherence").await.unwrap(), "0.9");
        assert_eq!(oracle.score("check co").await.unwrap(), "0.1");
        assert_eq!(oracle.score("other").await.unwrap(), "0.5");
        assert!(oracle.score("broken pipe").await.is_err());
        assert_eq!(oracle.call_count(), 4);
        assert_eq!(oracle.count_matching("co"), 2);
    }

    #[tokio::test]
    async fn json_calls_are_marked() {
        let oracle = ScriptedOracle::new("{}");
        oracle.score_json("fix it").await.unwrap();
        assert!(oracle.calls()[0].json);
    }
}
