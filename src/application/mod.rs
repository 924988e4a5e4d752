// Application layer - Use cases and the ports they depend on
pub mod completion_service;
pub mod dashboard_service;
pub mod error;
pub mod failure_reporter;
pub mod query_assistant;
pub mod upstream_client;

#[cfg(test)]
pub mod testing;
