//! Third-party Authorizations Module
//!
//! Validates signed transaction authorizations submitted by a third-party
//! initiator on behalf of an account holder, and either forwards the
//! approval to the counterparty or reports a coded rejection back to the
//! requester.
//!
//! ## Architecture
//!
//! ### Contract Layer (`thirdparty-authorizations-sdk`)
//! - Models: `AuthorizationPayload`, `Consent`, `ScopeGrant`, `Decision`
//! - Collaborator traits: `ConsentStore`, `SignatureVerifier`,
//!   `OutboundNotifier`, `ErrorReporter`
//!
//! ### Domain Layer (`thirdparty_authorizations::domain`)
//! - `classify` - pure predicates over payload, consent and scopes
//! - `service` - the validation pipeline (`AuthorizationService`)
//! - `error` - gate failures and their mapping to wire rejection codes
//! - **Rule:** MUST NOT import `api::*` or `infra::*`
//!
//! ### Infrastructure Layer (`thirdparty_authorizations::infra`)
//! - `crypto` - Ed25519 signature verifier
//! - `storage` - static consent store seeded from configuration
//! - `callbacks` - HTTP notifier and error reporter
//!
//! ### API Layer (`thirdparty_authorizations::api`)
//! - `rest` - inbound `POST /thirdpartyRequests/transactions/{ID}/authorizations`
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use thirdparty_authorizations_sdk::{
    AuthorizationPayload, AuthorizationStatus, ConsentStore, Decision, ErrorReporter,
    OutboundNotifier, Rejection, RequestContext, SignatureVerifier,
};

// === MODULE WIRING ===
pub mod module;
pub use module::{build_router, build_service, drain_in_flight};

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

#[cfg(test)]
mod test_support;
