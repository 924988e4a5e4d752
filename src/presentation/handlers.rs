// HTTP request handlers
use crate::application::error::ChatError;
use crate::domain::dataset::Dataset;
use crate::infrastructure::http_response::{json_response, snapshot_response};
use crate::presentation::app_state::AppState;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const CHAT_SERVER_ERROR: &str = "Server error talking to identity agent.";

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    question: Option<Value>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

async fn dataset_response(state: &AppState, dataset: Dataset) -> Response {
    let served = state.dashboard_service.snapshot(dataset).await;
    tracing::debug!("Serving {} ({:?})", served.dataset.name(), served.source);
    snapshot_response(&served)
}

pub async fn azure_data(State(state): State<Arc<AppState>>) -> Response {
    dataset_response(&state, Dataset::Azure).await
}

pub async fn google_data(State(state): State<Arc<AppState>>) -> Response {
    dataset_response(&state, Dataset::Google).await
}

pub async fn identity(State(state): State<Arc<AppState>>) -> Response {
    dataset_response(&state, Dataset::Identity).await
}

pub async fn risk(State(state): State<Arc<AppState>>) -> Response {
    dataset_response(&state, Dataset::Risk).await
}

pub async fn system_admins(State(state): State<Arc<AppState>>) -> Response {
    dataset_response(&state, Dataset::SystemAdmins).await
}

/// First decoded value of `key` in a raw query string. Repeated keys and
/// undecodable values never reject the request.
pub fn first_query_value(raw: Option<&str>, key: &str) -> Option<String> {
    raw?.split('&')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (name == key).then_some(value)
        })
        .next()
        .map(|value| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_default()
        })
}

/// Look up one portal user; a missing username yields an empty list
pub async fn users(RawQuery(query): RawQuery, State(state): State<Arc<AppState>>) -> Response {
    let username = first_query_value(query.as_deref(), "username").unwrap_or_default();
    let served = state.dashboard_service.user_details(&username).await;
    snapshot_response(&served)
}

/// Answer a question about system administrators.
///
/// A body that is not JSON, or whose `question` is not a string, is treated
/// as a missing question.
pub async fn identity_chat(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let question = serde_json::from_slice::<ChatRequest>(&body)
        .ok()
        .and_then(|request| request.question)
        .and_then(|question| question.as_str().map(str::to_string))
        .unwrap_or_default();

    match state.query_assistant.answer_question(&question).await {
        Ok(answer) => json_response(StatusCode::OK, &json!({ "answer": answer }), None),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            ChatError::Validation => json_response(
                StatusCode::BAD_REQUEST,
                &json!({ "error": ChatError::Validation.to_string() }),
                None,
            ),
            other => {
                tracing::error!(error = ?other, "Error in /api/identity-chat: {}", other);
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({ "error": CHAT_SERVER_ERROR }),
                    None,
                )
            }
        }
    }
}
