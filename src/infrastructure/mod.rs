// Infrastructure layer - External dependencies and adapters
pub mod anthropic_client;
pub mod config;
pub mod http_response;
pub mod http_upstream;
