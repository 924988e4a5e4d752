// Completion service port - Hosted language model treated as a text-completion box
use crate::application::error::CompletionError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user_message: String,
}

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Returns every text segment of the reply, in order
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>, CompletionError>;
}
