//! Domain errors for third-party authorizations.

use thirdparty_authorizations_sdk::{ConsentStoreError, Rejection};

/// A failed pipeline gate.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("authorization is not pending (status '{status}')")]
    NotPending { status: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("consent store failure: {0}")]
    Store(String),

    #[error("credential for consent '{consent_id}' is not active")]
    InactiveCredential { consent_id: String },

    #[error("no scope grant covers account '{account_id}'")]
    ScopeNotGranted { account_id: String },

    #[error("signature verification failed for consent '{consent_id}'")]
    InvalidSignature { consent_id: String },
}

impl From<ConsentStoreError> for DomainError {
    fn from(e: ConsentStoreError) -> Self {
        match e {
            ConsentStoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            ConsentStoreError::Unavailable(msg) | ConsentStoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Consent store failure");
                Self::Store(msg)
            }
        }
    }
}

impl From<DomainError> for Rejection {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotPending { .. }
            | DomainError::InactiveCredential { .. }
            | DomainError::InvalidSignature { .. } => Self::bad_request(),
            DomainError::ScopeNotGranted { .. } => Self::forbidden(),
            DomainError::NotFound { .. } => Self::not_found(),
            DomainError::Store(_) => Self::server_error(),
        }
    }
}
