// Query assistant - Answers admin questions from a live system-admin snapshot
use crate::application::completion_service::{CompletionRequest, CompletionService};
use crate::application::error::{ChatError, UpstreamError};
use crate::application::upstream_client::{UpstreamClient, UpstreamTarget};
use std::sync::Arc;

/// Ceiling on the serialized admin data sent as context, in characters
pub const CONTEXT_CHAR_LIMIT: usize = 16_000;

pub const FALLBACK_ANSWER: &str = "I was unable to generate a response.";

pub const SYSTEM_PROMPT: &str = r#"You are an identity security assistant for a K-12 district.

You are given:
- A question from the user.
- JSON data containing all system administrator groups and their members.

JSON structure example:
{
  "groups": [
    {
      "name": "Tenant Administrator",
      "members": [
        {
          "username": "KSatterfield",
          "mail": "KSatterfield@idauto.net",
          "riskScore": "11",
          "risk": "High",
          "riskDetail": "User Risk Impact Score 4. ..."
        }
      ]
    }
  ]
}

Use ONLY the provided JSON for user-specific / group-specific facts.
You can use your own knowledge for general best practices and recommendations.

When answering:
- Clearly list relevant users, their groups, and risk.
- Highlight high-risk admins and why they are high risk.
- Suggest remediation steps (e.g., reduce privileged roles, enforce MFA, improve password policies).
"#;

/// One question plus the data it is asked against. Nothing survives the request.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub question: String,
    pub context: serde_json::Value,
}

impl ChatExchange {
    /// Build the single user turn: the question followed by the truncated JSON.
    ///
    /// Truncation is a hard character cutoff and may end mid-structure.
    pub fn to_request(&self) -> CompletionRequest {
        let context = self.context.to_string();
        let user_message = format!(
            "Question:\n{}\n\nSystem admin data (JSON):\n{}",
            self.question,
            truncate_chars(&context, CONTEXT_CHAR_LIMIT)
        );

        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user_message,
        }
    }
}

#[derive(Clone)]
pub struct QueryAssistant {
    client: Arc<dyn UpstreamClient>,
    completion: Arc<dyn CompletionService>,
    admin_data: Option<UpstreamTarget>,
}

impl QueryAssistant {
    pub fn new(
        client: Arc<dyn UpstreamClient>,
        completion: Arc<dyn CompletionService>,
        admin_data: Option<UpstreamTarget>,
    ) -> Self {
        Self {
            client,
            completion,
            admin_data,
        }
    }

    /// Answer a free-text question about system administrators.
    ///
    /// Unlike the dashboard endpoints there is no sample-data fallback.
    pub async fn answer_question(&self, question: &str) -> Result<String, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::Validation);
        }

        let target = self.admin_data.as_ref().ok_or_else(|| {
            ChatError::UpstreamUnavailable(UpstreamError::ConfigMissing(
                "IDENTITY_API_USERNAME/IDENTITY_API_PASSWORD",
            ))
        })?;

        let context = self
            .client
            .fetch_json(&target.get())
            .await
            .map_err(ChatError::UpstreamUnavailable)?;

        let exchange = ChatExchange {
            question: question.to_string(),
            context,
        };

        let segments = self.completion.complete(exchange.to_request()).await?;
        Ok(join_segments(&segments))
    }
}

/// Longest prefix of `text` holding at most `limit` characters
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn join_segments(segments: &[String]) -> String {
    let answer = segments.join(" ");
    let answer = answer.trim();
    if answer.is_empty() {
        FALLBACK_ANSWER.to_string()
    } else {
        answer.to_string()
    }
}
