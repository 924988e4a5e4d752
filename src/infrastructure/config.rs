use crate::application::upstream_client::{Credential, UpstreamTarget};
use crate::domain::dataset::Dataset;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_PORTAL_BASE: &str = "https://portal.rapidisd.org";
pub const DEFAULT_COMPLETION_BASE: &str = "https://api.anthropic.com";
pub const DEFAULT_COMPLETION_MODEL: &str = "claude-sonnet-4-20250514";

const DASHBOARDS_PATH: &str = "/api/rest/restpoints/dashboards/";
const RISK_PATH: &str = "/api/rest/restpoints/dashboards/v1/users/risk";
const SYSTEM_ADMINS_PATH: &str = "/api/rest/restpoints/dashboards/v1/systemadmins";
const USERS_PATH: &str = "/api/rest/restpoints/dashboards/v1/users";

/// Process-wide settings, keyed by the lowercased environment variable names.
/// Read once at startup; handlers only ever see the resolved targets.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub microsoft_api_url: Option<String>,
    pub microsoft_api_key: Option<String>,
    pub google_api_url: Option<String>,
    pub google_api_key: Option<String>,
    pub rapid_user: Option<String>,
    pub rapid_pass: Option<String>,
    pub rapid_api_base: Option<String>,
    pub identity_api_base: Option<String>,
    pub identity_api_username: Option<String>,
    pub identity_api_password: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: Option<String>,
    pub anthropic_model: Option<String>,
    pub bind_addr: Option<String>,
    pub upstream_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

/// Load `config/identity.*` (optional) overlaid with the process environment
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    // A missing .env file is normal outside local development
    let _ = dotenvy::dotenv();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/identity").required(false))
        .add_source(config::Environment::default())
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

impl AppConfig {
    pub fn bind_addr(&self) -> &str {
        present(&self.bind_addr).unwrap_or("0.0.0.0:8080")
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs.unwrap_or(10))
    }

    fn portal_base(&self) -> &str {
        present(&self.rapid_api_base).unwrap_or(DEFAULT_PORTAL_BASE)
    }

    fn portal_credential(&self) -> Option<Credential> {
        let user = present(&self.rapid_user)?;
        let pass = present(&self.rapid_pass)?;
        Some(Credential::basic(user, pass))
    }

    fn bearer_target(url: &Option<String>, key: &Option<String>) -> Option<UpstreamTarget> {
        let url = present(url)?;
        let key = present(key)?;
        Some(UpstreamTarget::new(url, Credential::bearer(key)))
    }

    /// Targets for every dashboard data set whose configuration is complete.
    /// A data set with no entry is served from its sample snapshot.
    pub fn dashboard_targets(&self) -> HashMap<Dataset, UpstreamTarget> {
        let mut targets = HashMap::new();

        if let Some(target) = Self::bearer_target(&self.microsoft_api_url, &self.microsoft_api_key) {
            targets.insert(Dataset::Azure, target);
        }
        if let Some(target) = Self::bearer_target(&self.google_api_url, &self.google_api_key) {
            targets.insert(Dataset::Google, target);
        }

        if let Some(credential) = self.portal_credential() {
            let base = self.portal_base();
            for (dataset, path) in [
                (Dataset::Identity, DASHBOARDS_PATH),
                (Dataset::Risk, RISK_PATH),
                (Dataset::SystemAdmins, SYSTEM_ADMINS_PATH),
                (Dataset::Users, USERS_PATH),
            ] {
                targets.insert(dataset, UpstreamTarget::new(join_url(base, path), credential.clone()));
            }
        }

        targets
    }

    /// System-admin data for the query assistant, on its own credential pair
    pub fn admin_data_target(&self) -> Option<UpstreamTarget> {
        let user = present(&self.identity_api_username)?;
        let pass = present(&self.identity_api_password)?;
        let base = present(&self.identity_api_base).unwrap_or(DEFAULT_PORTAL_BASE);
        Some(UpstreamTarget::new(
            join_url(base, SYSTEM_ADMINS_PATH),
            Credential::basic(user, pass),
        ))
    }

    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            base_url: present(&self.anthropic_api_url)
                .unwrap_or(DEFAULT_COMPLETION_BASE)
                .trim_end_matches('/')
                .to_string(),
            api_key: present(&self.anthropic_api_key).map(str::to_string),
            model: present(&self.anthropic_model)
                .unwrap_or(DEFAULT_COMPLETION_MODEL)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_overrides(pairs: &[(&str, &str)]) -> AppConfig {
        let mut builder = config::Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap().try_deserialize().unwrap()
    }

    #[test]
    fn test_empty_config_has_no_targets() {
        let config = AppConfig::default();
        assert!(config.dashboard_targets().is_empty());
        assert!(config.admin_data_target().is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_portal_credentials_enable_portal_datasets() {
        let config = from_overrides(&[("rapid_user", "svc"), ("rapid_pass", "pw")]);
        let targets = config.dashboard_targets();

        assert_eq!(targets.len(), 4);
        assert_eq!(
            targets[&Dataset::Risk].url,
            "https://portal.rapidisd.org/api/rest/restpoints/dashboards/v1/users/risk"
        );
        assert_eq!(
            targets[&Dataset::Identity].url,
            "https://portal.rapidisd.org/api/rest/restpoints/dashboards/"
        );
        assert!(!targets.contains_key(&Dataset::Azure));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = from_overrides(&[
            ("rapid_user", "svc"),
            ("rapid_pass", "  "),
            ("microsoft_api_url", "https://graph.test/risk"),
            ("microsoft_api_key", ""),
        ]);
        assert!(config.dashboard_targets().is_empty());
    }

    #[test]
    fn test_bearer_targets_use_full_url() {
        let config = from_overrides(&[
            ("google_api_url", "https://workspace.test/summary"),
            ("google_api_key", "tok"),
        ]);
        let targets = config.dashboard_targets();
        assert_eq!(targets[&Dataset::Google].url, "https://workspace.test/summary");
        assert!(matches!(targets[&Dataset::Google].credential, Credential::Bearer { .. }));
    }

    #[test]
    fn test_admin_target_strips_trailing_slash() {
        let config = from_overrides(&[
            ("identity_api_base", "https://idm.test/"),
            ("identity_api_username", "svc"),
            ("identity_api_password", "pw"),
        ]);
        let target = config.admin_data_target().unwrap();
        assert_eq!(target.url, "https://idm.test/api/rest/restpoints/dashboards/v1/systemadmins");
    }

    #[test]
    fn test_timeout_parses_from_string() {
        let config = from_overrides(&[("upstream_timeout_secs", "3")]);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_completion_defaults() {
        let settings = AppConfig::default().completion_settings();
        assert_eq!(settings.base_url, DEFAULT_COMPLETION_BASE);
        assert_eq!(settings.model, DEFAULT_COMPLETION_MODEL);
        assert!(settings.api_key.is_none());
    }
}
