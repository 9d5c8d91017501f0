// src/state.rs

use serde::Serialize;
use std::sync::Arc;

use crate::assist::AssistService;
use crate::config::AulaConfig;
use crate::content::ContentStore;
use crate::llm::{CompletionClient, GeminiBackend};

/// Dashboard user shown in the greeting header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub assist: Arc<AssistService>,
    pub profile: Profile,
}

impl AppState {
    /// Assemble the full application state from configuration and an already
    /// loaded content store.
    pub fn assemble(config: &AulaConfig, content: ContentStore) -> anyhow::Result<Self> {
        let content = Arc::new(content);
        let backend = Arc::new(GeminiBackend::from_config(config)?);
        let completion = CompletionClient::new(backend);
        let assist = Arc::new(AssistService::new(
            completion,
            content.clone(),
            config.chat_history_cap,
        ));

        Ok(Self {
            content,
            assist,
            profile: Profile {
                first_name: config.user_first_name.clone(),
                last_name: config.user_last_name.clone(),
            },
        })
    }

    /// State with a substituted completion client, for tests and tooling.
    pub fn with_completion(
        completion: CompletionClient,
        content: ContentStore,
        profile: Profile,
        chat_history_cap: usize,
    ) -> Self {
        let content = Arc::new(content);
        let assist = Arc::new(AssistService::new(
            completion,
            content.clone(),
            chat_history_cap,
        ));
        Self { content, assist, profile }
    }
}
