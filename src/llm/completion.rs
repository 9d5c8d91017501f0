// src/llm/completion.rs
// The completion boundary: one prompt in, reply text out, always.
//
// Failures collapse to two fixed user-facing strings (one for an empty
// payload, one for a failed call). Nothing above this layer receives an
// error; the error kind survives only in logs.

use std::sync::Arc;
use tracing::{error, warn};

use super::CompletionBackend;

/// Shown when the service answered but returned an empty payload.
pub const EMPTY_REPLY_FALLBACK: &str = "Lo siento, no pude generar una respuesta.";

/// Shown when the call itself failed (transport, timeout, service error).
pub const FAILURE_FALLBACK: &str =
    "Hubo un error al conectar con el asistente. Por favor intenta de nuevo.";

#[derive(Clone)]
pub struct CompletionClient {
    backend: Arc<dyn CompletionBackend>,
}

impl CompletionClient {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Send one prompt and return reply text. Infallible by contract: any
    /// error or empty reply becomes the corresponding fallback string.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.backend.complete(prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                warn!(backend = self.backend.name(), "Completion returned an empty payload");
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Err(e) => {
                error!(
                    backend = self.backend.name(),
                    kind = e.kind(),
                    "Completion call failed: {}",
                    e
                );
                FAILURE_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CompletionError;
    use async_trait::async_trait;

    /// Backend stub with a scripted outcome per call.
    struct ScriptedBackend {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(CompletionError::Service {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn successful_reply_passes_through() {
        let client = CompletionClient::new(Arc::new(ScriptedBackend {
            reply: Ok("Una respuesta.".to_string()),
        }));
        assert_eq!(client.generate("hola").await, "Una respuesta.");
    }

    #[tokio::test]
    async fn empty_reply_collapses_to_fixed_string() {
        let client = CompletionClient::new(Arc::new(ScriptedBackend {
            reply: Ok(String::new()),
        }));
        let reply = client.generate("hola").await;
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
        assert!(!reply.is_empty());
    }

    #[tokio::test]
    async fn service_error_collapses_to_fixed_string() {
        let client = CompletionClient::new(Arc::new(ScriptedBackend { reply: Err(()) }));
        let reply = client.generate("hola").await;
        assert_eq!(reply, FAILURE_FALLBACK);
        assert!(!reply.is_empty());
    }
}
