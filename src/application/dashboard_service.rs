// Dashboard service - Fetch-or-fallback policy for the dashboard data sets
use crate::application::failure_reporter::FailureReporter;
use crate::application::upstream_client::{UpstreamClient, UpstreamRequest, UpstreamTarget};
use crate::domain::cache_policy::CachePolicy;
use crate::domain::dataset::Dataset;
use crate::domain::snapshot::DashboardSnapshot;
use std::collections::HashMap;
use std::sync::Arc;

/// Where a served snapshot came from. Not exposed to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ServedSnapshot {
    pub dataset: Dataset,
    pub snapshot: DashboardSnapshot,
    pub cache_policy: CachePolicy,
    pub source: SnapshotSource,
}

impl ServedSnapshot {
    fn new(dataset: Dataset, snapshot: DashboardSnapshot, source: SnapshotSource) -> Self {
        Self {
            dataset,
            snapshot,
            cache_policy: dataset.cache_policy(),
            source,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    client: Arc<dyn UpstreamClient>,
    reporter: Arc<dyn FailureReporter>,
    targets: Arc<HashMap<Dataset, UpstreamTarget>>,
}

impl DashboardService {
    pub fn new(
        client: Arc<dyn UpstreamClient>,
        reporter: Arc<dyn FailureReporter>,
        targets: HashMap<Dataset, UpstreamTarget>,
    ) -> Self {
        Self {
            client,
            reporter,
            targets: Arc::new(targets),
        }
    }

    /// Serve a dashboard data set. Never fails: every error path yields the
    /// dataset's sample snapshot.
    pub async fn snapshot(&self, dataset: Dataset) -> ServedSnapshot {
        let request = self.targets.get(&dataset).map(UpstreamTarget::get);
        self.serve(dataset, request).await
    }

    /// Look up a portal user by username, passed through as given.
    /// An empty username never reaches upstream.
    pub async fn user_details(&self, username: &str) -> ServedSnapshot {
        let request = self
            .targets
            .get(&Dataset::Users)
            .filter(|_| !username.is_empty())
            .map(|target| {
                let mut request = target.get();
                request.url = user_filter_url(&target.url, username);
                request
            });
        self.serve(Dataset::Users, request).await
    }

    async fn serve(&self, dataset: Dataset, request: Option<UpstreamRequest>) -> ServedSnapshot {
        let Some(request) = request else {
            tracing::debug!("No upstream configured for {}, serving sample data", dataset.name());
            return ServedSnapshot::new(dataset, dataset.fallback(), SnapshotSource::Fallback);
        };

        match self.client.fetch_json(&request).await {
            Ok(body) => {
                ServedSnapshot::new(dataset, dataset.normalize(body), SnapshotSource::Live)
            }
            Err(e) => {
                self.reporter.upstream_failed(dataset, &request.method, &e);
                ServedSnapshot::new(dataset, dataset.fallback(), SnapshotSource::Fallback)
            }
        }
    }
}

/// Append the portal's username filter, `(idautoPersonUsernameMV=<username>)`
pub fn user_filter_url(base: &str, username: &str) -> String {
    let filter = format!("(idautoPersonUsernameMV={})", username);
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}filter={}", base, separator, urlencoding::encode(&filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::UpstreamError;
    use crate::application::testing::{FakeUpstream, RecordingReporter};
    use crate::application::upstream_client::Credential;
    use serde_json::json;

    fn service(
        upstream: Arc<FakeUpstream>,
        reporter: Arc<RecordingReporter>,
        datasets: &[Dataset],
    ) -> DashboardService {
        let targets = datasets
            .iter()
            .map(|d| {
                let target = UpstreamTarget::new(
                    format!("https://portal.test/{}", d.name()),
                    Credential::basic("user", "pass"),
                );
                (*d, target)
            })
            .collect();
        DashboardService::new(upstream, reporter, targets)
    }

    #[tokio::test]
    async fn test_missing_config_serves_fallback_without_calling() {
        let upstream = Arc::new(FakeUpstream::responding(Ok(json!({}))));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter.clone(), &[]);

        for dataset in Dataset::ALL {
            let served = service.snapshot(dataset).await;
            assert_eq!(served.snapshot, dataset.fallback());
            assert_eq!(served.source, SnapshotSource::Fallback);
            assert_eq!(served.cache_policy, dataset.cache_policy());
        }
        assert_eq!(upstream.calls(), 0);
        assert!(reporter.failures().is_empty());
    }

    #[tokio::test]
    async fn test_http_failure_serves_fallback_after_one_call() {
        let upstream = Arc::new(FakeUpstream::responding(Err(UpstreamError::Http { status: 503 })));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter.clone(), &[Dataset::Risk]);

        let served = service.snapshot(Dataset::Risk).await;

        assert_eq!(served.snapshot, Dataset::Risk.fallback());
        assert_eq!(served.source, SnapshotSource::Fallback);
        assert_eq!(upstream.calls(), 1);
        assert_eq!(reporter.failures(), vec![(Dataset::Risk, "GET".to_string(), Some(503))]);
    }

    #[tokio::test]
    async fn test_network_failure_is_reported_without_status() {
        let upstream = Arc::new(FakeUpstream::responding(Err(UpstreamError::Network(
            "connection refused".to_string(),
        ))));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter.clone(), &[Dataset::Azure]);

        let served = service.snapshot(Dataset::Azure).await;

        assert_eq!(served.snapshot, Dataset::Azure.fallback());
        assert_eq!(reporter.failures(), vec![(Dataset::Azure, "GET".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_live_data_is_normalized() {
        let upstream = Arc::new(FakeUpstream::responding(Ok(json!({"highRisk": 99, "junk": 1}))));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter, &[Dataset::Azure]);

        let served = service.snapshot(Dataset::Azure).await;

        assert_eq!(served.source, SnapshotSource::Live);
        assert_eq!(served.snapshot.get("highRiskUsers"), Some(&json!(99)));
        assert_eq!(served.snapshot.get("globalAdmins"), Some(&json!(4)));
        assert_eq!(served.snapshot.get("junk"), None);
        assert_eq!(upstream.requests()[0].url, "https://portal.test/azure-data");
    }

    #[tokio::test]
    async fn test_user_details_builds_filter() {
        let upstream = Arc::new(FakeUpstream::responding(Ok(json!({"users": [{"username": "kim"}]}))));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter, &[Dataset::Users]);

        let served = service.user_details("kim").await;

        assert_eq!(served.snapshot.as_value(), &json!({"users": [{"username": "kim"}]}));
        assert_eq!(served.cache_policy, CachePolicy::new(30, 60));
        assert_eq!(
            upstream.requests()[0].url,
            "https://portal.test/users?filter=%28idautoPersonUsernameMV%3Dkim%29"
        );
    }

    #[tokio::test]
    async fn test_user_details_without_username_skips_upstream() {
        let upstream = Arc::new(FakeUpstream::responding(Ok(json!({"users": [1]}))));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter, &[Dataset::Users]);

        let served = service.user_details("").await;

        assert_eq!(served.snapshot.as_value(), &json!({"users": []}));
        assert_eq!(upstream.calls(), 0);
    }

    #[tokio::test]
    async fn test_user_details_keeps_surrounding_whitespace() {
        let upstream = Arc::new(FakeUpstream::responding(Ok(json!({"users": []}))));
        let reporter = Arc::new(RecordingReporter::default());
        let service = service(upstream.clone(), reporter, &[Dataset::Users]);

        service.user_details(" kim").await;

        assert_eq!(
            upstream.requests()[0].url,
            "https://portal.test/users?filter=%28idautoPersonUsernameMV%3D%20kim%29"
        );
    }
}
