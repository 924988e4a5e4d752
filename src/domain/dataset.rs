// Dataset - The dashboard data sets served by the proxy
use super::cache_policy::CachePolicy;
use super::samples;
use super::snapshot::{DashboardSnapshot, FieldSpec, SnapshotSchema};
use serde_json::json;

const AZURE_SCHEMA: SnapshotSchema = SnapshotSchema::new(&[
    FieldSpec::with_aliases("highRiskUsers", &["highRisk"]),
    FieldSpec::new("leakedCredentials"),
    FieldSpec::new("mfaAdoptionPercent"),
    FieldSpec::new("legacyAuthUsagePercent"),
    FieldSpec::new("globalAdmins"),
    FieldSpec::new("pimActivations7d"),
    FieldSpec::new("secureScoreTrend"),
]);

const GOOGLE_SCHEMA: SnapshotSchema = SnapshotSchema::new(&[
    FieldSpec::with_aliases("highRiskAccounts", &["highRisk"]),
    FieldSpec::with_aliases("suspiciousLogins", &["suspicious"]),
    FieldSpec::with_aliases("mfaEnrollmentPercent", &["mfaEnrollment"]),
    FieldSpec::with_aliases("failedMfaAttempts", &["mfaFailures"]),
    FieldSpec::new("superAdmins"),
    FieldSpec::new("delegatedAdmins"),
    FieldSpec::new("thirdPartyAdminApps"),
    FieldSpec::new("phishingEmailsDetected"),
    FieldSpec::new("unsafeLinksBlocked"),
    FieldSpec::new("trends"),
]);

const STANDARD_CACHE: CachePolicy = CachePolicy::new(60, 120);
const USER_LOOKUP_CACHE: CachePolicy = CachePolicy::new(30, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Azure,
    Google,
    Identity,
    Risk,
    SystemAdmins,
    Users,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::Azure,
        Dataset::Google,
        Dataset::Identity,
        Dataset::Risk,
        Dataset::SystemAdmins,
        Dataset::Users,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Azure => "azure-data",
            Dataset::Google => "google-data",
            Dataset::Identity => "identity",
            Dataset::Risk => "risk",
            Dataset::SystemAdmins => "systemadmins",
            Dataset::Users => "users",
        }
    }

    /// Per-user lookups are the most volatile, so they get the shorter window
    pub fn cache_policy(&self) -> CachePolicy {
        match self {
            Dataset::Users => USER_LOOKUP_CACHE,
            _ => STANDARD_CACHE,
        }
    }

    /// Mapped datasets return `Some`; the rest pass upstream JSON through unchanged.
    pub fn schema(&self) -> Option<&'static SnapshotSchema> {
        match self {
            Dataset::Azure => Some(&AZURE_SCHEMA),
            Dataset::Google => Some(&GOOGLE_SCHEMA),
            _ => None,
        }
    }

    pub fn fallback(&self) -> DashboardSnapshot {
        let value = match self {
            Dataset::Azure => json!(samples::azure()),
            Dataset::Google => json!(samples::google()),
            Dataset::Identity => json!(samples::identity()),
            Dataset::Risk => json!(samples::risk()),
            Dataset::SystemAdmins => json!(samples::system_admins()),
            Dataset::Users => json!(samples::users()),
        };
        DashboardSnapshot::from_value(value)
    }

    /// Shape a successful upstream body for this dataset
    pub fn normalize(&self, upstream: serde_json::Value) -> DashboardSnapshot {
        match self.schema() {
            Some(schema) => schema.normalize(&upstream, self.fallback().as_value()),
            None => DashboardSnapshot::from_value(upstream),
        }
    }
}
