// Router - Maps the dashboard API paths to handlers
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    azure_data, google_data, health_check, identity, identity_chat, risk, system_admins, users,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/idauto/azure-data", get(azure_data))
        .route("/api/idauto/google-data", get(google_data))
        .route("/api/identity", get(identity))
        .route("/api/risk", get(risk))
        .route("/api/systemadmins", get(system_admins))
        .route("/api/users", get(users))
        .route("/api/identity-chat", post(identity_chat))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
