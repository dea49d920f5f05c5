//! Domain layer for third-party authorizations.

pub mod classify;
pub mod error;
pub mod service;


pub use error::DomainError;
pub use service::{AuthorizationService, ServiceConfig};
