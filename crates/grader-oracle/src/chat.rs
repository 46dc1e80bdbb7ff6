//! Chat-completions oracle with timeout, retry, and exponential backoff.

use std::future::Future;
use std::time::Duration;

use grader_core::config::OracleConfig;
use grader_core::errors::{GraderResult, OracleError};
use grader_core::traits::IScoringOracle;
use tracing::{debug, warn};

use crate::protocol::{extract_reply, ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// Role line sent as the system message of every request.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an expert evaluator of machine-generated content. Follow the instructions exactly.";

/// Scoring oracle over an OpenAI-compatible chat-completions endpoint.
pub struct ChatOracle {
    client: reqwest::Client,
    config: OracleConfig,
    api_key: String,
    system_prompt: String,
}

impl std::fmt::Debug for ChatOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatOracle")
            .field("endpoint", &self.config.endpoint)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl ChatOracle {
    /// Create an oracle with an explicit API key.
    pub fn new(config: OracleConfig, api_key: impl Into<String>) -> GraderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| OracleError::Transport {
                reason: format!("client build failed: {e}"),
            })?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        })
    }

    /// Create an oracle reading the API key from `config.api_key_env`.
    pub fn from_env(config: OracleConfig) -> GraderResult<Self> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| OracleError::MissingCredentials {
                var: config.api_key_env.clone(),
            })?;
        Self::new(config, api_key)
    }

    /// Replace the system message.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Build the request body for a prompt.
    pub fn build_request(&self, prompt: &str, json_mode: bool) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(prompt),
            ],
            temperature: self.config.temperature,
            response_format: json_mode.then(ResponseFormat::json_object),
        }
    }

    /// Delay before retry `attempt` (1-based), doubling up to the configured ceiling.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let initial = Duration::from_millis(self.config.initial_backoff_ms);
        let ceiling = Duration::from_millis(self.config.max_backoff_ms);
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        initial.saturating_mul(factor).min(ceiling)
    }

    /// Send a request, retrying transport errors, timeouts, and 5xx replies.
    async fn complete(&self, request: &ChatRequest) -> Result<String, OracleError> {
        self.with_retries(|| self.send_once(request)).await
    }

    /// Drive `send` until it succeeds, fails with a non-retryable error, or
    /// `max_retries` retries are spent. Returns the last error in that case.
    async fn with_retries<F, Fut>(&self, mut send: F) -> Result<String, OracleError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, OracleError>>,
    {
        let mut last_err = OracleError::EmptyReply;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = self.backoff_for(attempt);
                debug!(
                    attempt,
                    max_retries = self.config.max_retries,
                    ?delay,
                    "retrying oracle request"
                );
                tokio::time::sleep(delay).await;
            }

            match send().await {
                Ok(reply) => return Ok(reply),
                Err(e) if !is_retryable(&e) => return Err(e),
                Err(e) => {
                    warn!(attempt, error = %e, "oracle request failed");
                    last_err = e;
                }
            }
        }

        Err(last_err)
    }

    async fn send_once(&self, request: &ChatRequest) -> Result<String, OracleError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| OracleError::MalformedJson {
                reason: format!("response body: {e}"),
            })?;
        extract_reply(parsed)
    }

    fn transport_error(&self, e: reqwest::Error) -> OracleError {
        if e.is_timeout() {
            OracleError::Timeout {
                secs: self.config.timeout_secs,
            }
        } else {
            OracleError::Transport {
                reason: e.to_string(),
            }
        }
    }
}

/// Client errors (4xx) and malformed bodies won't improve on retry.
fn is_retryable(err: &OracleError) -> bool {
    match err {
        OracleError::Transport { .. } | OracleError::Timeout { .. } => true,
        OracleError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
        _ => false,
    }
}

impl IScoringOracle for ChatOracle {
    async fn score(&self, prompt: &str) -> GraderResult<String> {
        let request = self.build_request(prompt, false);
        Ok(self.complete(&request).await?)
    }

    async fn score_json(&self, prompt: &str) -> GraderResult<String> {
        let request = self.build_request(prompt, true);
        Ok(self.complete(&request).await?)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
