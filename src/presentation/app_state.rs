// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::query_assistant::QueryAssistant;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub query_assistant: QueryAssistant,
}
