// src/api/http/content.rs
// Read-only endpoints behind the dashboard panels.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::content::{AcademicEvent, ResourceCategory, Tutorial};
use crate::state::{AppState, Profile};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn profile_handler(State(app_state): State<Arc<AppState>>) -> Json<Profile> {
    Json(app_state.profile.clone())
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub events: Vec<AcademicEvent>,
}

/// Events sorted by start instant, ready for display.
pub async fn calendar_handler(State(app_state): State<Arc<AppState>>) -> Json<CalendarResponse> {
    Json(CalendarResponse { events: app_state.content.sorted_events() })
}

#[derive(Serialize)]
pub struct ResourcesResponse {
    pub categories: Vec<ResourceCategory>,
}

pub async fn resources_handler(State(app_state): State<Arc<AppState>>) -> Json<ResourcesResponse> {
    Json(ResourcesResponse { categories: app_state.content.resources.clone() })
}

pub async fn resource_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(label): Path<String>,
) -> ApiResult<Json<ResourceCategory>> {
    app_state
        .content
        .resource_category(&label)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Unknown resource category: {label}")))
}

#[derive(Serialize)]
pub struct TutorialsResponse {
    pub tutorials: Vec<Tutorial>,
}

pub async fn tutorials_handler(State(app_state): State<Arc<AppState>>) -> Json<TutorialsResponse> {
    Json(TutorialsResponse { tutorials: app_state.content.tutorials.clone() })
}
