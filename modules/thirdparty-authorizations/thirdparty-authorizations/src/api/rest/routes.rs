use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};
use tokio_util::task::TaskTracker;

use super::handlers;
use crate::domain::service::AuthorizationService;

pub const AUTHORIZATIONS_PATH: &str = "/thirdpartyRequests/transactions/{id}/authorizations";

/// Register the inbound authorization routes on `router`.
///
/// Accepted authorizations are processed on `tasks`.
#[must_use]
pub fn register_routes(
    router: Router,
    service: Arc<AuthorizationService>,
    tasks: TaskTracker,
) -> Router {
    router
        .route(AUTHORIZATIONS_PATH, post(handlers::post_authorization))
        .layer(Extension(service))
        .layer(Extension(tasks))
}
