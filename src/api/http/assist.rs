// src/api/http/assist.rs
// AI-assist endpoints: direct generation and the chat session lifecycle.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::assist::{Block, ChatMessage, GenerationOptions, ToolMode};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ToolEntry {
    pub mode: ToolMode,
    pub title: &'static str,
}

#[derive(Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolEntry>,
}

/// Directory of the assist modes the overlay can open.
pub async fn assist_tools_handler() -> Json<ToolsResponse> {
    let tools = ToolMode::ALL
        .into_iter()
        .map(|mode| ToolEntry { mode, title: mode.title() })
        .collect();
    Json(ToolsResponse { tools })
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub mode: ToolMode,
    pub input: String,
    #[serde(default)]
    pub options: GenerationOptions,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub output: String,
    pub blocks: Vec<Block>,
}

pub async fn generate_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    info!(mode = request.mode.id(), "Assist generation request");

    let result = app_state
        .assist
        .generate(request.mode, &request.input, &request.options)
        .await?;

    Ok(Json(GenerateResponse { output: result.output, blocks: result.blocks }))
}

#[derive(Serialize)]
pub struct OpenChatResponse {
    pub session_id: Uuid,
    pub greeting: ChatMessage,
}

pub async fn open_chat_handler(
    State(app_state): State<Arc<AppState>>,
) -> Json<OpenChatResponse> {
    let (session_id, greeting) = app_state.assist.open_chat().await;
    Json(OpenChatResponse { session_id, greeting })
}

#[derive(Deserialize)]
pub struct ChatMessageRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ChatMessageResponse {
    pub reply: String,
}

pub async fn chat_message_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ChatMessageRequest>,
) -> ApiResult<Json<ChatMessageResponse>> {
    let reply = app_state.assist.chat_submit(session_id, &request.text).await?;
    Ok(Json(ChatMessageResponse { reply }))
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
}

pub async fn chat_transcript_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<TranscriptResponse>> {
    let messages = app_state.assist.chat_transcript(session_id).await?;
    Ok(Json(TranscriptResponse { messages }))
}

/// Closing is idempotent: an unknown id is already closed.
pub async fn close_chat_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> StatusCode {
    app_state.assist.close_chat(session_id).await;
    StatusCode::NO_CONTENT
}
