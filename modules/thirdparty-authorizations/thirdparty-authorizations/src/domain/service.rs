//! Authorization validation pipeline.

use std::sync::Arc;

use thirdparty_authorizations_sdk::{
    AuthorizationPayload, ConsentStore, Decision, ErrorReporter, OutboundNotifier,
    RequestContext, SignatureVerifier,
};
use tracing::{error, info, warn};

use super::classify::{self, ScopeEnforcement};
use super::error::DomainError;

// ============================================================================
// Service Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceConfig {
    pub scope_enforcement: ScopeEnforcement,
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Validates inbound authorizations and dispatches the outcome.
///
/// Each call is independent; the service holds only its collaborators and
/// configuration.
pub struct AuthorizationService {
    store: Arc<dyn ConsentStore>,
    verifier: Arc<dyn SignatureVerifier>,
    notifier: Arc<dyn OutboundNotifier>,
    reporter: Arc<dyn ErrorReporter>,
    config: ServiceConfig,
}

impl AuthorizationService {
    #[must_use]
    pub fn new(
        store: Arc<dyn ConsentStore>,
        verifier: Arc<dyn SignatureVerifier>,
        notifier: Arc<dyn OutboundNotifier>,
        reporter: Arc<dyn ErrorReporter>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            store,
            verifier,
            notifier,
            reporter,
            config,
        }
    }

    /// Run every gate against `payload` and return the outcome without
    /// dispatching it.
    #[must_use]
    pub async fn decide(&self, payload: &AuthorizationPayload) -> Decision {
        match self.check_gates(payload).await {
            Ok(()) => Decision::Forward,
            Err(e) => {
                info!(
                    consent_id = %payload.consent_id,
                    reason = %e,
                    "Authorization rejected"
                );
                Decision::Reject(e.into())
            }
        }
    }

    /// Decide and dispatch: forward the approval on success, report the
    /// rejection otherwise. Exactly one collaborator call is made.
    ///
    /// Delivery failures are logged and do not change the returned decision.
    #[tracing::instrument(
        skip_all,
        fields(transaction_id = %ctx.transaction_id, consent_id = %payload.consent_id)
    )]
    pub async fn validate_and_verify(
        &self,
        ctx: &RequestContext,
        payload: &AuthorizationPayload,
    ) -> Decision {
        let decision = self.decide(payload).await;

        match decision {
            Decision::Forward => {
                match self
                    .notifier
                    .notify(payload, &ctx.transaction_id, &ctx.source)
                    .await
                {
                    Ok(resp) => info!(
                        status_code = resp.status_code,
                        destination = %ctx.source,
                        "Authorization forwarded"
                    ),
                    Err(e) => error!(
                        error = %e,
                        destination = %ctx.source,
                        "Failed to forward verified authorization"
                    ),
                }
            }
            Decision::Reject(rejection) => {
                if let Err(e) = self.reporter.report_error(ctx, rejection).await {
                    warn!(
                        error = %e,
                        code = %rejection.code,
                        reason = %rejection.reason,
                        "Failed to deliver error callback"
                    );
                }
            }
        }

        decision
    }

    async fn check_gates(&self, payload: &AuthorizationPayload) -> Result<(), DomainError> {
        if !classify::is_pending(payload) {
            return Err(DomainError::NotPending {
                status: payload.status.to_string(),
            });
        }

        let consent_id = payload.consent_id.as_str();
        let (consent, scopes) = tokio::join!(
            self.store.retrieve_consent(consent_id),
            self.store.retrieve_all_scopes(consent_id),
        );
        if let (Err(_), Err(e)) = (&consent, &scopes)
            && !e.is_not_found()
        {
            error!(error = %e, "Consent store failure while reading scopes");
        }
        let consent = consent?;
        let scopes = scopes?;

        let credential_active = classify::has_active_credential(&consent);
        let scope_granted =
            classify::has_matching_scope(&scopes, payload, self.config.scope_enforcement);

        if !credential_active {
            return Err(DomainError::InactiveCredential {
                consent_id: consent.id,
            });
        }
        if !scope_granted {
            return Err(DomainError::ScopeNotGranted {
                account_id: payload.source_account_id.clone(),
            });
        }

        if !self
            .verifier
            .verify(&payload.challenge, &payload.value, &consent.credential_payload)
        {
            return Err(DomainError::InvalidSignature {
                consent_id: consent.id,
            });
        }

        Ok(())
    }
}
