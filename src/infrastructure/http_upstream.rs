// HTTP upstream client - reqwest adapter for the identity provider APIs
use crate::application::error::UpstreamError;
use crate::application::upstream_client::{Credential, UpstreamClient, UpstreamRequest};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestUpstreamClient {
    client: reqwest::Client,
}

impl ReqwestUpstreamClient {
    /// `timeout` bounds each call end to end; there are no retries
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn fetch_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        let builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(ACCEPT, "application/json");

        let builder = match &request.credential {
            Credential::Basic { principal, secret } => {
                builder.basic_auth(principal, Some(secret.expose_secret()))
            }
            Credential::Bearer { token } => builder.bearer_auth(token.expose_secret()),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Upstream {} returned {}: {}", request.method, status, body);
            return Err(UpstreamError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::Decode(e.without_url().to_string()))
    }
}
