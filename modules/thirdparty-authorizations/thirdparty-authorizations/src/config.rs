use std::time::Duration;

use serde::{Deserialize, Serialize};
use thirdparty_authorizations_sdk::CredentialStatus;

use crate::domain::classify::ScopeEnforcement;

/// Configuration for the `thirdparty_authorizations` module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorizationsConfig {
    /// Participant id sent as `FSPIOP-Source` on outbound callbacks.
    pub participant_id: String,

    /// Base URL that callback paths are appended to.
    pub callback_base_url: String,

    /// Per-request timeout for outbound callbacks.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// How scope grants are matched against a payload.
    pub scope_enforcement: ScopeEnforcement,

    /// Consents served by the static consent store.
    pub consents: Vec<ConsentSeed>,
}

impl Default for AuthorizationsConfig {
    fn default() -> Self {
        Self {
            participant_id: "auth-service".to_owned(),
            callback_base_url: "http://127.0.0.1:3001".to_owned(),
            request_timeout: Duration::from_secs(10),
            scope_enforcement: ScopeEnforcement::default(),
            consents: Vec::new(),
        }
    }
}

/// A consent record with its scope grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsentSeed {
    pub id: String,
    pub credential_status: CredentialStatus,
    /// Base64 Ed25519 public key.
    pub credential_payload: String,
    /// `None` means the store has no scope set for this consent at all.
    #[serde(default)]
    pub scopes: Option<Vec<ScopeSeed>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeSeed {
    pub action: String,
    pub account_id: String,
}

mod humantime_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_to_empty_section() {
        let cfg: AuthorizationsConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cfg.participant_id, "auth-service");
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert_eq!(cfg.scope_enforcement, ScopeEnforcement::Account);
        assert!(cfg.consents.is_empty());
    }

    #[test]
    fn parses_humantime_timeout_and_seeds() {
        let cfg: AuthorizationsConfig = serde_json::from_value(json!({
            "request_timeout": "1m 30s",
            "scope_enforcement": "account_and_action",
            "consents": [{
                "id": "1234",
                "credential_status": "ACTIVE",
                "credential_payload": "AAAA",
                "scopes": [{ "action": "account.transfer", "account_id": "pisp-2343-f223" }]
            }]
        }))
        .unwrap();

        assert_eq!(cfg.request_timeout, Duration::from_secs(90));
        assert_eq!(cfg.scope_enforcement, ScopeEnforcement::AccountAndAction);
        assert_eq!(cfg.consents[0].credential_status, CredentialStatus::Active);
        assert_eq!(cfg.consents[0].scopes.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn rejects_unknown_fields() {
        let res = serde_json::from_value::<AuthorizationsConfig>(json!({ "participant": "x" }));
        assert!(res.is_err());
    }

    #[test]
    fn timeout_serializes_as_humantime() {
        let cfg = AuthorizationsConfig::default();
        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value["request_timeout"], json!("10s"));
    }
}
