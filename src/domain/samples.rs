// Bundled sample data - Served whenever live identity data is unavailable
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureSnapshot {
    pub high_risk_users: u32,
    pub leaked_credentials: u32,
    pub mfa_adoption_percent: u32,
    pub legacy_auth_usage_percent: u32,
    pub global_admins: u32,
    #[serde(rename = "pimActivations7d")]
    pub pim_activations_7d: u32,
    pub secure_score_trend: Vec<MonthlyScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyScore {
    pub month: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSnapshot {
    pub high_risk_accounts: u32,
    pub suspicious_logins: u32,
    pub mfa_enrollment_percent: u32,
    pub failed_mfa_attempts: u32,
    pub super_admins: u32,
    pub delegated_admins: u32,
    pub third_party_admin_apps: u32,
    pub phishing_emails_detected: u32,
    pub unsafe_links_blocked: u32,
    pub trends: Vec<DailyValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyValue {
    pub day: String,
    pub val: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySummary {
    pub top_humans: Vec<IdentityRecord>,
    pub top_non_humans: Vec<IdentityRecord>,
    pub risk_by_type: Vec<RiskByType>,
    pub mfa_trend: Vec<MfaRecord>,
    pub privileged: PrivilegedSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityRecord {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskByType {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MfaRecord {
    pub week: String,
    pub rate: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedSummary {
    pub global_admins: u32,
    pub delegated_admins: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskUsers {
    pub users: Vec<RiskUser>,
}

/// Risk scores arrive from the portal as strings, so the sample keeps them that way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskUser {
    pub idautoid: String,
    pub username: String,
    pub risk_score: String,
    pub risk_detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminGroups {
    pub groups: Vec<AdminGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminGroup {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserList {
    pub users: Vec<serde_json::Value>,
}

fn monthly(month: &str, score: u32) -> MonthlyScore {
    MonthlyScore {
        month: month.to_string(),
        score,
    }
}

fn daily(day: &str, val: u32) -> DailyValue {
    DailyValue {
        day: day.to_string(),
        val,
    }
}

fn record(name: &str, score: u32) -> IdentityRecord {
    IdentityRecord {
        name: name.to_string(),
        score,
    }
}

pub fn azure() -> AzureSnapshot {
    AzureSnapshot {
        high_risk_users: 12,
        leaked_credentials: 8,
        mfa_adoption_percent: 92,
        legacy_auth_usage_percent: 5,
        global_admins: 4,
        pim_activations_7d: 23,
        secure_score_trend: vec![
            monthly("Jul", 68),
            monthly("Aug", 71),
            monthly("Sep", 74),
            monthly("Oct", 78),
        ],
    }
}

pub fn google() -> GoogleSnapshot {
    GoogleSnapshot {
        high_risk_accounts: 15,
        suspicious_logins: 42,
        mfa_enrollment_percent: 88,
        failed_mfa_attempts: 27,
        super_admins: 5,
        delegated_admins: 12,
        third_party_admin_apps: 3,
        phishing_emails_detected: 128,
        unsafe_links_blocked: 312,
        trends: vec![
            daily("Mon", 10),
            daily("Tue", 15),
            daily("Wed", 18),
            daily("Thu", 25),
        ],
    }
}

pub fn identity() -> IdentitySummary {
    IdentitySummary {
        top_humans: vec![
            record("alice@example.com", 92),
            record("bob@example.com", 88),
            record("carol@example.com", 84),
            record("dave@example.com", 81),
            record("eve@example.com", 79),
        ],
        top_non_humans: vec![
            record("svc-finance-sync", 95),
            record("backup-agent", 90),
            record("devops-bot", 86),
            record("graph-sync", 82),
            record("ci-runner", 80),
        ],
        risk_by_type: [
            ("Leaked Credentials", 8),
            ("Excessive Permissions", 12),
            ("Inactive Accounts", 102),
        ]
        .into_iter()
        .map(|(kind, count)| RiskByType {
            kind: kind.to_string(),
            count,
        })
        .collect(),
        mfa_trend: [("W1", 78), ("W2", 82), ("W3", 85), ("W4", 88)]
            .into_iter()
            .map(|(week, rate)| MfaRecord {
                week: week.to_string(),
                rate,
            })
            .collect(),
        privileged: PrivilegedSummary {
            global_admins: 4,
            delegated_admins: 12,
        },
    }
}

pub fn risk() -> RiskUsers {
    let user = |id: &str, username: &str, score: &str, name: &str| RiskUser {
        idautoid: id.to_string(),
        username: username.to_string(),
        risk_score: score.to_string(),
        risk_detail: format!("Sample risk detail for {}", name),
    };

    RiskUsers {
        users: vec![
            user("1", "alice@example.com", "92", "Alice"),
            user("2", "bob@example.com", "88", "Bob"),
            user("3", "carol@example.com", "84", "Carol"),
        ],
    }
}

pub fn system_admins() -> AdminGroups {
    let group = |name: &str, members: &[&str]| AdminGroup {
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    };

    AdminGroups {
        groups: vec![
            group("Global Admins", &["alice@example.com", "bob@example.com"]),
            group("Helpdesk Admins", &["svc-helpdesk"]),
            group("App Owners", &["app-owner-1", "app-owner-2", "app-owner-3"]),
        ],
    }
}

pub fn users() -> UserList {
    UserList::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_azure_sample_keys() {
        let value = json!(azure());
        assert_eq!(value["pimActivations7d"], 23);
        assert_eq!(value["secureScoreTrend"][3], json!({"month": "Oct", "score": 78}));
        assert_eq!(value.as_object().map(|o| o.len()), Some(7));
    }

    #[test]
    fn test_identity_sample_shape() {
        let value = json!(identity());
        assert_eq!(value["riskByType"][2], json!({"type": "Inactive Accounts", "count": 102}));
        assert_eq!(value["privileged"], json!({"globalAdmins": 4, "delegatedAdmins": 12}));
        assert_eq!(value["topNonHumans"].as_array().map(|a| a.len()), Some(5));
    }

    #[test]
    fn test_risk_sample_uses_string_scores() {
        let value = json!(risk());
        assert_eq!(value["users"][1]["riskScore"], "88");
        assert_eq!(value["users"][1]["riskDetail"], "Sample risk detail for Bob");
    }

    #[test]
    fn test_users_sample_is_empty_list() {
        assert_eq!(json!(users()), json!({"users": []}));
    }
}
