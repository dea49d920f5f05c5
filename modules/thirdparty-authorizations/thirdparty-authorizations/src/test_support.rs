#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thirdparty_authorizations_sdk::{
    AuthorizationPayload, AuthorizationStatus, CallbackError, Consent, ConsentStore,
    ConsentStoreError, CredentialStatus, ErrorReporter, NotifyResponse, OutboundNotifier,
    Rejection, RequestContext, ScopeGrant, SignatureVerifier,
};

use crate::domain::classify::{ScopeEnforcement, TRANSFER_ACTION};
use crate::domain::service::{AuthorizationService, ServiceConfig};

#[must_use]
pub fn payload() -> AuthorizationPayload {
    AuthorizationPayload {
        consent_id: "1234".to_owned(),
        source_account_id: "pisp-2343-f223".to_owned(),
        status: AuthorizationStatus::Pending,
        challenge: "QuoteResponse Object JSON string".to_owned(),
        value: "YjYyODNkOWUwZjUxNzOThmMjllYjE2Yg==".to_owned(),
    }
}

#[must_use]
pub fn consent(status: CredentialStatus) -> Consent {
    Consent {
        id: "1234".to_owned(),
        credential_status: status,
        credential_payload: "-----BEGIN PUBLIC KEY-----".to_owned(),
    }
}

#[must_use]
pub fn scopes() -> Vec<ScopeGrant> {
    vec![
        ScopeGrant {
            consent_id: "1234".to_owned(),
            action: TRANSFER_ACTION.to_owned(),
            account_id: "pisp-2343-f223".to_owned(),
        },
        ScopeGrant {
            consent_id: "1234".to_owned(),
            action: "account.balance".to_owned(),
            account_id: "dfsp-2321-ahsh".to_owned(),
        },
    ]
}

#[must_use]
pub fn ctx() -> RequestContext {
    RequestContext::new("1234", "switch")
}

/// Consent store returning canned results and recording every lookup.
pub struct FakeConsentStore {
    consent: Result<Consent, ConsentStoreError>,
    scopes: Result<Vec<ScopeGrant>, ConsentStoreError>,
    pub consent_calls: Mutex<Vec<String>>,
    pub scope_calls: Mutex<Vec<String>>,
}

impl FakeConsentStore {
    #[must_use]
    pub fn new(
        consent: Result<Consent, ConsentStoreError>,
        scopes: Result<Vec<ScopeGrant>, ConsentStoreError>,
    ) -> Self {
        Self {
            consent,
            scopes,
            consent_calls: Mutex::new(Vec::new()),
            scope_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConsentStore for FakeConsentStore {
    async fn retrieve_consent(&self, consent_id: &str) -> Result<Consent, ConsentStoreError> {
        self.consent_calls.lock().push(consent_id.to_owned());
        self.consent.clone()
    }

    async fn retrieve_all_scopes(
        &self,
        consent_id: &str,
    ) -> Result<Vec<ScopeGrant>, ConsentStoreError> {
        self.scope_calls.lock().push(consent_id.to_owned());
        self.scopes.clone()
    }
}

/// Verifier with a fixed answer.
pub struct FakeVerifier {
    result: bool,
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeVerifier {
    #[must_use]
    pub fn new(result: bool) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl SignatureVerifier for FakeVerifier {
    fn verify(&self, challenge: &str, value: &str, credential_payload: &str) -> bool {
        self.calls.lock().push((
            challenge.to_owned(),
            value.to_owned(),
            credential_payload.to_owned(),
        ));
        self.result
    }
}

pub struct RecordingNotifier {
    response: Result<NotifyResponse, CallbackError>,
    pub calls: Mutex<Vec<(AuthorizationPayload, String, String)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new(response: Result<NotifyResponse, CallbackError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new(Ok(NotifyResponse { status_code: 200 }))
    }
}

#[async_trait]
impl OutboundNotifier for RecordingNotifier {
    async fn notify(
        &self,
        payload: &AuthorizationPayload,
        transaction_id: &str,
        source: &str,
    ) -> Result<NotifyResponse, CallbackError> {
        self.calls.lock().push((
            payload.clone(),
            transaction_id.to_owned(),
            source.to_owned(),
        ));
        self.response.clone()
    }
}

pub struct RecordingReporter {
    result: Result<(), CallbackError>,
    pub calls: Mutex<Vec<(RequestContext, Rejection)>>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new(result: Result<(), CallbackError>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl Default for RecordingReporter {
    fn default() -> Self {
        Self::new(Ok(()))
    }
}

#[async_trait]
impl ErrorReporter for RecordingReporter {
    async fn report_error(
        &self,
        ctx: &RequestContext,
        rejection: Rejection,
    ) -> Result<(), CallbackError> {
        self.calls.lock().push((ctx.clone(), rejection));
        self.result.clone()
    }
}

/// A service wired to recording fakes, keeping handles for assertions.
pub struct Harness {
    pub store: Arc<FakeConsentStore>,
    pub verifier: Arc<FakeVerifier>,
    pub notifier: Arc<RecordingNotifier>,
    pub reporter: Arc<RecordingReporter>,
    pub service: Arc<AuthorizationService>,
}

impl Harness {
    #[must_use]
    pub fn new(store: FakeConsentStore, verifier: FakeVerifier) -> Self {
        Self::with_parts(
            store,
            verifier,
            RecordingNotifier::default(),
            RecordingReporter::default(),
            ScopeEnforcement::default(),
        )
    }

    #[must_use]
    pub fn with_parts(
        store: FakeConsentStore,
        verifier: FakeVerifier,
        notifier: RecordingNotifier,
        reporter: RecordingReporter,
        scope_enforcement: ScopeEnforcement,
    ) -> Self {
        let store = Arc::new(store);
        let verifier = Arc::new(verifier);
        let notifier = Arc::new(notifier);
        let reporter = Arc::new(reporter);
        let service = Arc::new(AuthorizationService::new(
            store.clone(),
            verifier.clone(),
            notifier.clone(),
            reporter.clone(),
            ServiceConfig { scope_enforcement },
        ));

        Self {
            store,
            verifier,
            notifier,
            reporter,
            service,
        }
    }

    /// All collaborators succeed and every gate passes.
    #[must_use]
    pub fn happy() -> Self {
        Self::new(
            FakeConsentStore::new(Ok(consent(CredentialStatus::Active)), Ok(scopes())),
            FakeVerifier::new(true),
        )
    }

    #[must_use]
    pub fn notify_count(&self) -> usize {
        self.notifier.calls.lock().len()
    }

    #[must_use]
    pub fn report_count(&self) -> usize {
        self.reporter.calls.lock().len()
    }

    #[must_use]
    pub fn store_reads(&self) -> (usize, usize) {
        (
            self.store.consent_calls.lock().len(),
            self.store.scope_calls.lock().len(),
        )
    }
}
