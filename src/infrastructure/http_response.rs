// HTTP response utilities for JSON dashboard payloads
use crate::application::dashboard_service::ServedSnapshot;
use crate::domain::cache_policy::CachePolicy;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Serialize `body` as JSON, optionally attaching a `Cache-Control` directive
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    cache_policy: Option<CachePolicy>,
) -> Response {
    let mut response = (status, Json(body)).into_response();

    if let Some(policy) = cache_policy {
        match HeaderValue::from_str(&policy.header_value()) {
            Ok(value) => {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
            Err(e) => tracing::error!("Invalid Cache-Control value: {}", e),
        }
    }

    response
}

/// Always 200: live and fallback snapshots are indistinguishable to the caller
pub fn snapshot_response(served: &ServedSnapshot) -> Response {
    json_response(StatusCode::OK, &served.snapshot, Some(served.cache_policy))
}
