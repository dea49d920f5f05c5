use std::sync::Arc;

use axum::Extension;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path};
use axum::http::{HeaderMap, StatusCode};
use thirdparty_authorizations_sdk::{AuthorizationPayload, RequestContext};
use tokio_util::task::TaskTracker;
use tracing::{Instrument, field::Empty, info};

use super::error::ApiError;
use crate::domain::service::AuthorizationService;

const FSPIOP_SOURCE: &str = "fspiop-source";

/// Accept an authorization for asynchronous validation.
///
/// Responds `202 Accepted` once the request is well-formed; the outcome is
/// delivered later on the callback channels. The pipeline runs on `tasks`
/// so shutdown can wait for it.
#[tracing::instrument(
    skip_all,
    fields(transaction_id = Empty, source = Empty)
)]
pub(crate) async fn post_authorization(
    Extension(svc): Extension<Arc<AuthorizationService>>,
    Extension(tasks): Extension<TaskTracker>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Json<AuthorizationPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(transaction_id) = path?;
    let source = headers
        .get(FSPIOP_SOURCE)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingHeader("FSPIOP-Source"))?
        .to_owned();
    let Json(payload) = body?;

    let span = tracing::Span::current();
    span.record("transaction_id", transaction_id.as_str());
    span.record("source", source.as_str());

    info!(consent_id = %payload.consent_id, "Authorization accepted");

    let ctx = RequestContext::new(transaction_id, source);
    tasks.spawn(
        async move {
            svc.validate_and_verify(&ctx, &payload).await;
        }
        .in_current_span(),
    );

    Ok(StatusCode::ACCEPTED)
}
