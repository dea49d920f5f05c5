//! Pure predicates over payloads, consents and scope grants.

use std::fmt;

use serde::{Deserialize, Serialize};
use thirdparty_authorizations_sdk::{
    AuthorizationPayload, AuthorizationStatus, Consent, CredentialStatus, ScopeGrant,
};

/// Action a grant must carry to authorize a transfer.
pub const TRANSFER_ACTION: &str = "account.transfer";

/// How scope grants are matched against a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeEnforcement {
    /// Scope gate always passes.
    Disabled,
    /// A grant for the payload's source account is enough.
    #[default]
    Account,
    /// The grant must also name [`TRANSFER_ACTION`].
    AccountAndAction,
}

impl ScopeEnforcement {
    /// Configuration spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Account => "account",
            Self::AccountAndAction => "account_and_action",
        }
    }
}

impl fmt::Display for ScopeEnforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn is_pending(payload: &AuthorizationPayload) -> bool {
    payload.status == AuthorizationStatus::Pending
}

#[must_use]
pub fn has_active_credential(consent: &Consent) -> bool {
    consent.credential_status == CredentialStatus::Active
}

/// Whether any grant in `scopes` covers the payload's source account.
///
/// An empty grant set never matches unless enforcement is disabled.
#[must_use]
pub fn has_matching_scope(
    scopes: &[ScopeGrant],
    payload: &AuthorizationPayload,
    enforcement: ScopeEnforcement,
) -> bool {
    match enforcement {
        ScopeEnforcement::Disabled => true,
        ScopeEnforcement::Account => scopes
            .iter()
            .any(|s| s.account_id == payload.source_account_id),
        ScopeEnforcement::AccountAndAction => scopes
            .iter()
            .any(|s| s.account_id == payload.source_account_id && s.action == TRANSFER_ACTION),
    }
}
