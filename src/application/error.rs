// Error taxonomy for upstream calls and the query assistant
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    #[error("upstream configuration missing: {0}")]
    ConfigMissing(&'static str),

    #[error("upstream returned HTTP {status}")]
    Http { status: u16 },

    #[error("upstream request failed: {0}")]
    Network(String),

    #[error("upstream returned invalid JSON: {0}")]
    Decode(String),
}

impl UpstreamError {
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    #[error("completion service API key not configured")]
    MissingApiKey,

    #[error("completion service returned HTTP {status}")]
    Http { status: u16 },

    #[error("completion service request failed: {0}")]
    Network(String),

    #[error("completion service returned an unreadable body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Question is required")]
    Validation,

    #[error("identity data unavailable")]
    UpstreamUnavailable(#[source] UpstreamError),

    #[error("completion service failed")]
    Completion(#[from] CompletionError),
}
