// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::failure_reporter::TracingFailureReporter;
use crate::application::query_assistant::QueryAssistant;
use crate::domain::dataset::Dataset;
use crate::infrastructure::anthropic_client::AnthropicClient;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_upstream::ReqwestUpstreamClient;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;
    let timeout = config.upstream_timeout();

    // Create adapters (infrastructure layer)
    let upstream = Arc::new(ReqwestUpstreamClient::new(timeout)?);
    let completion = Arc::new(AnthropicClient::new(config.completion_settings(), timeout)?);

    let targets = config.dashboard_targets();
    tracing::info!(
        "Live upstreams configured for {} of {} dashboard data sets",
        targets.len(),
        Dataset::ALL.len()
    );

    // Create services (application layer)
    let dashboard_service =
        DashboardService::new(upstream.clone(), Arc::new(TracingFailureReporter), targets);
    let query_assistant = QueryAssistant::new(upstream, completion, config.admin_data_target());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        query_assistant,
    });

    // Start server
    let addr: SocketAddr = config.bind_addr().parse()?;
    tracing::info!("Starting identity-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
