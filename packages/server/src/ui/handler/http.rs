//! HTTP API endpoint handlers.
//!
//! Request bodies are decoded from raw bytes regardless of `Content-Type`, so
//! that plain `curl -d` clients work. Decode failures and empty usernames are
//! rejected here before reaching the chat room.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{
    domain::Username,
    infrastructure::dto::http::{MessageDto, PingRequest, PostMessageRequest, UserDto},
    ui::{error::ApiError, state::AppState},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `GET /messages`: every message in posting order
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageDto>> {
    let messages = state.get_messages_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(messages.into_iter().map(MessageDto::from).collect())
}

/// `POST /messages`: append a message, stamped with server time
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request: PostMessageRequest = serde_json::from_slice(&body)?;
    let (author, message_body) = request.into_domain()?;

    state
        .post_message_usecase
        .execute(author, message_body)
        .await;

    Ok(StatusCode::CREATED)
}

/// `POST /ping`: refresh the sender's presence
pub async fn record_ping(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request: PingRequest = serde_json::from_slice(&body)?;
    let username = Username::try_from(request)?;

    state.record_ping_usecase.execute(username).await;

    Ok(StatusCode::CREATED)
}

/// `GET /users`: users whose last ping is within the activity window
pub async fn get_active_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserDto>> {
    let users = state.get_active_users_usecase.execute().await;

    Json(users.into_iter().map(UserDto::from).collect())
}
