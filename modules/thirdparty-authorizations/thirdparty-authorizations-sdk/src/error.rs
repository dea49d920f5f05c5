//! Error types for the third-party authorizations module.

use thiserror::Error;

/// Errors returned by a [`ConsentStore`](crate::api::ConsentStore).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsentStoreError {
    /// The requested entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The backing store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConsentStoreError {
    #[must_use]
    pub fn consent_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "consent",
            id: id.into(),
        }
    }

    #[must_use]
    pub fn scopes_not_found(consent_id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "scopes",
            id: consent_id.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors returned by the callback collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CallbackError {
    /// Connection, timeout or other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The counterparty answered with a non-success status.
    #[error("callback rejected with status {status}")]
    Rejected { status: u16 },

    /// The callback could not be built (bad base URL, unserializable body).
    #[error("invalid callback request: {0}")]
    InvalidRequest(String),
}
