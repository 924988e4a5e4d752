// Test doubles for the application ports
use crate::application::completion_service::{CompletionRequest, CompletionService};
use crate::application::error::{CompletionError, UpstreamError};
use crate::application::failure_reporter::FailureReporter;
use crate::application::upstream_client::{UpstreamClient, UpstreamRequest};
use crate::domain::dataset::Dataset;
use async_trait::async_trait;
use axum::http::Method;
use serde_json::Value;
use std::sync::Mutex;

/// Replays one canned result for every call and records each request
pub struct FakeUpstream {
    result: Result<Value, UpstreamError>,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl FakeUpstream {
    pub fn responding(result: Result<Value, UpstreamError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for FakeUpstream {
    async fn fetch_json(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

pub struct FakeCompletion {
    result: Result<Vec<String>, CompletionError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn replying(segments: &[&str]) -> Self {
        Self::with_result(Ok(segments.iter().map(|s| s.to_string()).collect()))
    }

    pub fn with_result(result: Result<Vec<String>, CompletionError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for FakeCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>, CompletionError> {
        self.requests.lock().unwrap().push(request);
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<(Dataset, String, Option<u16>)>>,
}

impl RecordingReporter {
    pub fn failures(&self) -> Vec<(Dataset, String, Option<u16>)> {
        self.failures.lock().unwrap().clone()
    }
}

impl FailureReporter for RecordingReporter {
    fn upstream_failed(&self, dataset: Dataset, method: &Method, error: &UpstreamError) {
        self.failures
            .lock()
            .unwrap()
            .push((dataset, method.to_string(), error.status()));
    }
}
