#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Third-party Authorizations SDK
//!
//! This crate provides the public contract of the `thirdparty_authorizations` module:
//!
//! - [`AuthorizationPayload`], [`Consent`], [`ScopeGrant`] - Data model
//! - [`RequestContext`] - Transaction id and originating party of one request
//! - [`Decision`], [`Rejection`] - Outcome of one pipeline run
//! - [`ConsentStore`], [`SignatureVerifier`] - Read-side collaborators
//! - [`OutboundNotifier`], [`ErrorReporter`] - Side-effecting collaborators
//! - [`ConsentStoreError`], [`CallbackError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use thirdparty_authorizations_sdk::{ConsentStore, ConsentStoreError, Consent, ScopeGrant};
//!
//! struct PostgresConsentStore { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl ConsentStore for PostgresConsentStore {
//!     async fn retrieve_consent(&self, consent_id: &str) -> Result<Consent, ConsentStoreError> {
//!         // SELECT ... FROM consent WHERE id = $1
//!     }
//!
//!     async fn retrieve_all_scopes(
//!         &self,
//!         consent_id: &str,
//!     ) -> Result<Vec<ScopeGrant>, ConsentStoreError> {
//!         // SELECT ... FROM scope WHERE consent_id = $1
//!     }
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod rejection;

// Re-export main types at crate root
pub use api::{ConsentStore, ErrorReporter, OutboundNotifier, SignatureVerifier};
pub use error::{CallbackError, ConsentStoreError};
pub use models::{
    AuthorizationPayload, AuthorizationStatus, Consent, CredentialStatus, Decision,
    ErrorInformation, ErrorInformationObject, NotifyResponse, RequestContext, ScopeGrant,
};
pub use rejection::{ErrorCode, RejectReason, Rejection};
