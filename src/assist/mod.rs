// src/assist/mod.rs
// AI-assist pipeline: prompt construction, the completion round-trip, and
// chat session handling behind one service.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

pub mod markdown;
pub mod mode;
pub mod prompt;
pub mod session;

pub use markdown::Block;
pub use mode::{GenerationOptions, QuizDifficulty, QuizFormat, ToolMode};
pub use session::{ChatMessage, Role, SessionRegistry};

use crate::content::ContentStore;
use crate::llm::CompletionClient;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Input text must not be empty")]
    EmptyInput,
    #[error("Chat mode runs through the chat session endpoints")]
    ChatMode,
    #[error("Unknown chat session: {0}")]
    UnknownSession(Uuid),
}

/// One direct-generation result: the raw reply plus its display blocks.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub output: String,
    pub blocks: Vec<Block>,
}

pub struct AssistService {
    completion: CompletionClient,
    content: Arc<ContentStore>,
    sessions: SessionRegistry,
    chat_history_cap: usize,
}

impl AssistService {
    pub fn new(
        completion: CompletionClient,
        content: Arc<ContentStore>,
        chat_history_cap: usize,
    ) -> Self {
        Self {
            completion,
            content,
            sessions: SessionRegistry::new(),
            chat_history_cap,
        }
    }

    /// Run one direct-generation request (every mode except chat).
    ///
    /// Input that is empty after trimming never reaches the prompt builder
    /// or the completion service.
    pub async fn generate(
        &self,
        mode: ToolMode,
        input: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, AssistError> {
        if input.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }

        let prompt =
            prompt::generation_prompt(mode, input, options).ok_or(AssistError::ChatMode)?;

        info!(mode = mode.id(), "Generating assist content");
        let output = self.completion.generate(&prompt).await;
        let blocks = markdown::render_blocks(&output);

        Ok(GenerationResult { output, blocks })
    }

    /// Open a chat session, returning its id and the greeting message.
    pub async fn open_chat(&self) -> (Uuid, ChatMessage) {
        let (id, greeting) = self.sessions.open().await;
        info!(session = %id, "Chat session opened");
        (id, greeting)
    }

    /// Submit one chat turn and return the assistant reply.
    ///
    /// The reply joins the transcript only if no newer submission claimed the
    /// session in the meantime and the session is still open; a superseded or
    /// orphaned reply is dropped.
    pub async fn chat_submit(&self, id: Uuid, text: &str) -> Result<String, AssistError> {
        if text.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }

        let (token, history) = self
            .sessions
            .begin_turn(id, text)
            .await
            .ok_or(AssistError::UnknownSession(id))?;

        let windowed = window_history(history, self.chat_history_cap);
        let prompt = prompt::chat_prompt(&self.content, &windowed, text);
        let reply = self.completion.generate(&prompt).await;

        if !self.sessions.commit_reply(id, token, &reply).await {
            debug!(session = %id, turn = token, "Dropping superseded chat reply");
        }

        Ok(reply)
    }

    /// Transcript of a session in strict append order.
    pub async fn chat_transcript(&self, id: Uuid) -> Result<Vec<ChatMessage>, AssistError> {
        self.sessions
            .transcript(id)
            .await
            .ok_or(AssistError::UnknownSession(id))
    }

    /// Discard a session and everything it held.
    pub async fn close_chat(&self, id: Uuid) -> bool {
        let closed = self.sessions.close(id).await;
        if closed {
            info!(session = %id, "Chat session closed");
        }
        closed
    }
}

/// Sliding window over the prompt context: the greeting plus the most recent
/// messages, capped at `cap`. Eviction is oldest-first (the greeting is never
/// evicted) and affects only the prompt; the stored transcript is never
/// truncated. A cap of zero disables the window.
fn window_history(mut history: Vec<ChatMessage>, cap: usize) -> Vec<ChatMessage> {
    if cap == 0 || history.len() <= cap {
        return history;
    }
    let tail_start = history.len() - (cap - 1);
    let mut windowed = Vec::with_capacity(cap);
    windowed.extend(history.first().cloned());
    windowed.extend(history.drain(tail_start..));
    windowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<ChatMessage> {
        (0..n).map(|i| ChatMessage::user(format!("m{i}"))).collect()
    }

    #[test]
    fn window_keeps_full_history_under_cap() {
        assert_eq!(window_history(history(10), 64).len(), 10);
        assert_eq!(window_history(history(10), 10).len(), 10);
    }

    #[test]
    fn window_evicts_oldest_but_keeps_greeting() {
        let windowed = window_history(history(10), 4);
        assert_eq!(windowed.len(), 4);
        assert_eq!(windowed[0].text, "m0");
        assert_eq!(windowed[1].text, "m7");
        assert_eq!(windowed[3].text, "m9");
    }

    #[test]
    fn window_of_zero_is_disabled() {
        assert_eq!(window_history(history(3), 0).len(), 3);
    }
}
