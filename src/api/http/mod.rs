// src/api/http/mod.rs
// HTTP router composition for the dashboard REST API

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::state::AppState;

mod assist;
mod content;

pub use assist::{
    assist_tools_handler, chat_message_handler, chat_transcript_handler, close_chat_handler,
    generate_handler, open_chat_handler,
};
pub use content::{
    calendar_handler, health_handler, profile_handler, resource_category_handler,
    resources_handler, tutorials_handler,
};

/// Main HTTP router. Nested under /api in main.rs.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_handler))

        // Dashboard content
        .route("/profile", get(profile_handler))
        .route("/calendar", get(calendar_handler))
        .route("/resources", get(resources_handler))
        .route("/resources/{category}", get(resource_category_handler))
        .route("/tutorials", get(tutorials_handler))

        // AI assist
        .route("/assist/tools", get(assist_tools_handler))
        .route("/assist/generate", post(generate_handler))
        .route("/assist/chat", post(open_chat_handler))
        .route(
            "/assist/chat/{session_id}",
            get(chat_transcript_handler).delete(close_chat_handler),
        )
        .route("/assist/chat/{session_id}/message", post(chat_message_handler))

        .with_state(app_state)
}
