// src/llm/mod.rs
// Completion backend trait and error definitions.

use async_trait::async_trait;
use thiserror::Error;

pub mod completion;
pub mod gemini;

pub use completion::{CompletionClient, EMPTY_REPLY_FALLBACK, FAILURE_FALLBACK};
pub use gemini::GeminiBackend;

/// Errors a backend can surface. These never cross the completion-client
/// boundary: callers above it only ever see reply text (see `completion`).
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Completion service error {status}: {body}")]
    Service {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl CompletionError {
    /// Tag recorded in logs for observability. Not exposed to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Transport(e) if e.is_timeout() => "timeout",
            CompletionError::Transport(e) if e.is_decode() => "decode",
            CompletionError::Transport(_) => "transport",
            CompletionError::Service { .. } => "service",
        }
    }
}

/// One request/response exchange with a hosted text-completion service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Backend name for logging/debugging
    fn name(&self) -> &'static str;

    /// Send one prompt, return the raw reply text (possibly empty).
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
