// Failure reporting - Observer for upstream calls that fell back to sample data
use crate::application::error::UpstreamError;
use crate::domain::dataset::Dataset;
use axum::http::Method;

pub trait FailureReporter: Send + Sync {
    fn upstream_failed(&self, dataset: Dataset, method: &Method, error: &UpstreamError);
}

/// Default reporter that writes to the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingFailureReporter;

impl FailureReporter for TracingFailureReporter {
    fn upstream_failed(&self, dataset: Dataset, method: &Method, error: &UpstreamError) {
        tracing::warn!(
            dataset = dataset.name(),
            method = %method,
            status = error.status(),
            "Upstream fetch failed, serving sample data: {}",
            error
        );
    }
}
