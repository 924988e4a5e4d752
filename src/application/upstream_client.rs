// Upstream client port - Authenticated JSON fetches from identity providers
use crate::application::error::UpstreamError;
use async_trait::async_trait;
use axum::http::Method;
use secrecy::SecretString;
use serde_json::Value;

#[derive(Debug, Clone)]
pub enum Credential {
    /// Sent as `Authorization: Basic base64(principal:secret)`
    Basic {
        principal: String,
        secret: SecretString,
    },
    /// Sent as `Authorization: Bearer <token>`
    Bearer { token: SecretString },
}

impl Credential {
    pub fn basic(principal: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Credential::Basic {
            principal: principal.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        let token: String = token.into();
        Credential::Bearer {
            token: SecretString::new(token.into()),
        }
    }
}

/// A configured upstream endpoint and the credential it expects
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    pub url: String,
    pub credential: Credential,
}

impl UpstreamTarget {
    pub fn new(url: impl Into<String>, credential: Credential) -> Self {
        Self {
            url: url.into(),
            credential,
        }
    }

    pub fn get(&self) -> UpstreamRequest {
        UpstreamRequest {
            method: Method::GET,
            url: self.url.clone(),
            credential: self.credential.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    pub credential: Credential,
}

#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Perform exactly one call and return the parsed body of a 2xx response
    async fn fetch_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}
