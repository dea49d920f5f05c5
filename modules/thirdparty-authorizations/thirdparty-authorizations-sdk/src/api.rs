//! Collaborator traits for the authorization pipeline.
//!
//! The pipeline is pure decision logic; every input and every side effect
//! goes through one of these traits so hosts can plug in their own storage,
//! crypto and transport.

use async_trait::async_trait;

use crate::error::{CallbackError, ConsentStoreError};
use crate::models::{AuthorizationPayload, Consent, NotifyResponse, RequestContext, ScopeGrant};
use crate::rejection::Rejection;

/// Read access to persisted consents and their scope grants.
///
/// ```ignore
/// let consent = store.retrieve_consent(&payload.consent_id).await?;
/// let scopes = store.retrieve_all_scopes(&payload.consent_id).await?;
/// ```
#[async_trait]
pub trait ConsentStore: Send + Sync {
    /// Retrieve a consent by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no consent has this id
    /// - `Unavailable` / `Internal` for storage failures
    async fn retrieve_consent(&self, consent_id: &str) -> Result<Consent, ConsentStoreError>;

    /// Retrieve every scope grant tied to a consent.
    ///
    /// An empty list is a valid answer for a consent with no grants.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the store tracks scope sets and has none for this consent
    /// - `Unavailable` / `Internal` for storage failures
    async fn retrieve_all_scopes(
        &self,
        consent_id: &str,
    ) -> Result<Vec<ScopeGrant>, ConsentStoreError>;
}

/// Verifies a signature over a challenge against a consent's credential.
pub trait SignatureVerifier: Send + Sync {
    /// Returns `true` only when `value` is a valid signature of `challenge`
    /// under `credential_payload`. Malformed input is `false`, never a panic.
    fn verify(&self, challenge: &str, value: &str, credential_payload: &str) -> bool;
}

/// Forwards a verified authorization to the counterparty.
#[async_trait]
pub trait OutboundNotifier: Send + Sync {
    /// Deliver `payload` for `transaction_id` back to `source`.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackError`] when the counterparty cannot be reached or
    /// refuses the callback.
    async fn notify(
        &self,
        payload: &AuthorizationPayload,
        transaction_id: &str,
        source: &str,
    ) -> Result<NotifyResponse, CallbackError>;
}

/// Reports a rejected authorization to the requesting party.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Send `rejection` on the error channel of the request in `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackError`] when the error callback cannot be delivered.
    async fn report_error(
        &self,
        ctx: &RequestContext,
        rejection: Rejection,
    ) -> Result<(), CallbackError>;
}
