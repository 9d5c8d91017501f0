// src/assist/session.rs
// In-memory chat sessions. One session per overlay instance: opened with the
// greeting, append-only while it lives, discarded on close. Nothing survives
// a close or a process restart.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::prompt::CHAT_GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

#[derive(Debug)]
struct ChatSession {
    messages: Vec<ChatMessage>,
    // Single-slot in-flight token: bumped on every submission, so a reply
    // from a superseded turn can be recognized and dropped.
    turn: u64,
}

/// Registry of live chat sessions, keyed by session id.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, ChatSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session seeded with the assistant greeting.
    pub async fn open(&self) -> (Uuid, ChatMessage) {
        let id = Uuid::new_v4();
        let greeting = ChatMessage::model(CHAT_GREETING);
        let session = ChatSession { messages: vec![greeting.clone()], turn: 0 };
        self.sessions.write().await.insert(id, session);
        (id, greeting)
    }

    /// Append the user turn and claim an in-flight token. Returns the token
    /// and a snapshot of the transcript as it was before this turn, or None
    /// if the session does not exist.
    pub async fn begin_turn(&self, id: Uuid, text: &str) -> Option<(u64, Vec<ChatMessage>)> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        let history = session.messages.clone();
        session.messages.push(ChatMessage::user(text));
        session.turn += 1;
        Some((session.turn, history))
    }

    /// Append the assistant reply iff `token` is still the session's latest
    /// turn. Returns false when the reply was superseded or the session is
    /// already closed; the reply is dropped in that case.
    pub async fn commit_reply(&self, id: Uuid, token: u64, text: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(session) if session.turn == token => {
                session.messages.push(ChatMessage::model(text));
                true
            }
            _ => false,
        }
    }

    /// Messages in strict append order.
    pub async fn transcript(&self, id: Uuid) -> Option<Vec<ChatMessage>> {
        self.sessions.read().await.get(&id).map(|s| s.messages.clone())
    }

    /// Discard the session. Returns whether it existed.
    pub async fn close(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }
}
