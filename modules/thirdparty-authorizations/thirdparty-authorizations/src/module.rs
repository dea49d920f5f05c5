use std::sync::Arc;

use axum::Router;
use thirdparty_authorizations_sdk::{ConsentStore, ErrorReporter, OutboundNotifier};
use tokio_util::task::TaskTracker;
use tracing::{info, warn};

use crate::api::rest::routes;
use crate::config::AuthorizationsConfig;
use crate::domain::service::{AuthorizationService, ServiceConfig};
use crate::infra::callbacks::{CallbackClient, HttpErrorReporter, HttpOutboundNotifier};
use crate::infra::crypto::Ed25519SignatureVerifier;
use crate::infra::storage::StaticConsentStore;

/// Wire the authorization service from configuration.
///
/// # Errors
///
/// Returns an error if the callback client cannot be built from
/// `callback_base_url`.
pub fn build_service(cfg: &AuthorizationsConfig) -> anyhow::Result<Arc<AuthorizationService>> {
    info!("Initializing thirdparty_authorizations module");

    let client = CallbackClient::new(
        &cfg.callback_base_url,
        cfg.participant_id.clone(),
        cfg.request_timeout,
    )
    .map_err(|e| anyhow::anyhow!("failed to build callback client: {e}"))?;

    let store = StaticConsentStore::from_seeds(&cfg.consents);
    if store.is_empty() {
        warn!("No consents configured; every authorization will be rejected as not found");
    } else {
        info!(consents = store.len(), "Loaded static consent store");
    }

    let store: Arc<dyn ConsentStore> = Arc::new(store);
    let notifier: Arc<dyn OutboundNotifier> = Arc::new(HttpOutboundNotifier::new(client.clone()));
    let reporter: Arc<dyn ErrorReporter> = Arc::new(HttpErrorReporter::new(client));

    let service = AuthorizationService::new(
        store,
        Arc::new(Ed25519SignatureVerifier),
        notifier,
        reporter,
        ServiceConfig {
            scope_enforcement: cfg.scope_enforcement,
        },
    );

    info!(
        participant_id = %cfg.participant_id,
        callback_base_url = %cfg.callback_base_url,
        scope_enforcement = %cfg.scope_enforcement,
        "thirdparty_authorizations module initialized"
    );

    Ok(Arc::new(service))
}

/// Mount the module's REST routes on a fresh router.
///
/// Accepted authorizations run on `tasks`; pass the same tracker to
/// [`drain_in_flight`] on shutdown.
#[must_use]
pub fn build_router(service: Arc<AuthorizationService>, tasks: TaskTracker) -> Router {
    let router = routes::register_routes(Router::new(), service, tasks);
    info!("thirdparty_authorizations: REST routes registered successfully");
    router
}

/// Stop accepting pipeline tasks on `tasks` and wait for the ones in flight
/// to deliver their outcome.
pub async fn drain_in_flight(tasks: &TaskTracker) {
    tasks.close();
    if !tasks.is_empty() {
        info!(in_flight = tasks.len(), "Waiting for in-flight authorizations");
    }
    tasks.wait().await;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        assert!(build_service(&AuthorizationsConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn drain_waits_for_in_flight_tasks() {
        let tasks = TaskTracker::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let done = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = done.clone();
        tasks.spawn(async move {
            let _ = rx.await;
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        });
        tx.send(()).unwrap();

        drain_in_flight(&tasks).await;

        assert!(done.load(std::sync::atomic::Ordering::SeqCst));
        assert!(tasks.is_closed());
    }

    #[test]
    fn rejects_invalid_callback_base_url() {
        let cfg = AuthorizationsConfig {
            callback_base_url: "not a url".to_owned(),
            ..AuthorizationsConfig::default()
        };
        let err = build_service(&cfg).err().unwrap();
        assert!(err.to_string().contains("callback client"));
    }
}
