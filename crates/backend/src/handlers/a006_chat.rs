use axum::{extract::State, Json};
use chrono::Utc;
use contracts::domain::a006_chat::aggregate::{ChatRequest, ChatResponse};

use crate::domain::a001_project;
use crate::shared::api_error::ApiError;
use crate::shared::state::AppState;

/// POST /chatbot
pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    request.validate().map_err(ApiError::bad_request)?;

    // An unknown or unreadable project id only drops the context
    let project = match request
        .project_id
        .as_deref()
        .and_then(|id| uuid::Uuid::parse_str(id).ok())
    {
        Some(id) => a001_project::service::get_by_id(id).await.unwrap_or_else(|e| {
            tracing::warn!("Chat without project context: {}", e);
            None
        }),
        None => None,
    };

    let message = state
        .assistant
        .reply(&request.message, project.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Assistant '{}' failed: {}", state.assistant.provider_name(), e);
            ApiError::bad_gateway(format!("Assistant unavailable: {}", e))
        })?;

    Ok(Json(ChatResponse {
        success: true,
        message,
        timestamp: Utc::now(),
    }))
}
