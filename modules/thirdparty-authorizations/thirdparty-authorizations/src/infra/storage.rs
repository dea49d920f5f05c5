//! In-memory consent store seeded from configuration.

use std::collections::HashMap;

use async_trait::async_trait;
use thirdparty_authorizations_sdk::{Consent, ConsentStore, ConsentStoreError, ScopeGrant};

use crate::config::ConsentSeed;

struct Entry {
    consent: Consent,
    scopes: Option<Vec<ScopeGrant>>,
}

/// Read-only consent store over a fixed set of records.
pub struct StaticConsentStore {
    entries: HashMap<String, Entry>,
}

impl StaticConsentStore {
    /// Build the store from configured seeds. A later seed with the same id
    /// replaces an earlier one.
    #[must_use]
    pub fn from_seeds(seeds: &[ConsentSeed]) -> Self {
        let entries = seeds
            .iter()
            .map(|seed| {
                let consent = Consent {
                    id: seed.id.clone(),
                    credential_status: seed.credential_status.clone(),
                    credential_payload: seed.credential_payload.clone(),
                };
                let scopes = seed.scopes.as_ref().map(|scopes| {
                    scopes
                        .iter()
                        .map(|s| ScopeGrant {
                            consent_id: seed.id.clone(),
                            action: s.action.clone(),
                            account_id: s.account_id.clone(),
                        })
                        .collect()
                });
                (seed.id.clone(), Entry { consent, scopes })
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ConsentStore for StaticConsentStore {
    async fn retrieve_consent(&self, consent_id: &str) -> Result<Consent, ConsentStoreError> {
        self.entries
            .get(consent_id)
            .map(|e| e.consent.clone())
            .ok_or_else(|| ConsentStoreError::consent_not_found(consent_id))
    }

    /// Unknown consents have no grants; a known consent seeded without a
    /// scope list has no scope set at all.
    async fn retrieve_all_scopes(
        &self,
        consent_id: &str,
    ) -> Result<Vec<ScopeGrant>, ConsentStoreError> {
        match self.entries.get(consent_id) {
            None => Ok(Vec::new()),
            Some(Entry { scopes: Some(s), .. }) => Ok(s.clone()),
            Some(Entry { scopes: None, .. }) => {
                Err(ConsentStoreError::scopes_not_found(consent_id))
            }
        }
    }
}
