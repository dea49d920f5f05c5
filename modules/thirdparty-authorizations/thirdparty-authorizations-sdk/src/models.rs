//! Domain models for the third-party authorizations module.
//!
//! Wire names follow the FSPIOP third-party API (`camelCase`, upper-case
//! status literals).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rejection::Rejection;

/// Status of an authorization request.
///
/// Unknown literals are kept as [`AuthorizationStatus::Other`] instead of
/// failing deserialization, so that the pipeline can reject them with a
/// validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthorizationStatus {
    /// Awaiting authorization. The only status the pipeline accepts.
    Pending,
    /// Signature was verified.
    Verified,
    /// Any other terminal state.
    Other(String),
}

impl AuthorizationStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for AuthorizationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PENDING" => Self::Pending,
            "VERIFIED" => Self::Verified,
            _ => Self::Other(s),
        }
    }
}

impl From<AuthorizationStatus> for String {
    fn from(status: AuthorizationStatus) -> Self {
        match status {
            AuthorizationStatus::Other(s) => s,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of the credential bound to a consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CredentialStatus {
    Active,
    Inactive,
    Revoked,
    Other(String),
}

impl CredentialStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Revoked => "REVOKED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for CredentialStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ACTIVE" => Self::Active,
            "INACTIVE" => Self::Inactive,
            "REVOKED" => Self::Revoked,
            _ => Self::Other(s),
        }
    }
}

impl From<CredentialStatus> for String {
    fn from(status: CredentialStatus) -> Self {
        match status {
            CredentialStatus::Other(s) => s,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an inbound `POST /thirdpartyRequests/transactions/{ID}/authorizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationPayload {
    /// Consent the authorization is made under.
    pub consent_id: String,
    /// Account the transaction debits.
    pub source_account_id: String,
    pub status: AuthorizationStatus,
    /// Data that was signed.
    pub challenge: String,
    /// Signature over `challenge`.
    pub value: String,
}

/// A stored authorization grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub id: String,
    pub credential_status: CredentialStatus,
    /// Public verification material for the credential.
    pub credential_payload: String,
}

/// A single `(action, account)` permission tied to a consent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeGrant {
    pub consent_id: String,
    /// Action name (e.g., `"account.transfer"`).
    pub action: String,
    pub account_id: String,
}

/// Identity of one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Transaction identifier from the request path.
    pub transaction_id: String,
    /// Originating party, taken from the `FSPIOP-Source` header.
    pub source: String,
}

impl RequestContext {
    #[must_use]
    pub fn new(transaction_id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            source: source.into(),
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// All gates passed; the approval is forwarded to the counterparty.
    Forward,
    /// A gate failed; the requester receives an error callback.
    Reject(Rejection),
}

impl Decision {
    #[must_use]
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Forward => None,
            Self::Reject(r) => Some(*r),
        }
    }
}

/// Response returned by the counterparty for a forwarded approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyResponse {
    pub status_code: u16,
}

/// Standard FSPIOP error information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInformation {
    pub error_code: String,
    pub error_description: String,
}

/// Envelope of an error callback body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInformationObject {
    pub error_information: ErrorInformation,
}

impl From<Rejection> for ErrorInformationObject {
    fn from(rejection: Rejection) -> Self {
        Self {
            error_information: ErrorInformation {
                error_code: rejection.code.as_str().to_owned(),
                error_description: rejection.reason.as_str().to_owned(),
            },
        }
    }
}
