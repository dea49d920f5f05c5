//! HTTP callbacks to the switch: approval forwarding and error reporting.
//!
//! Both adapters share one [`CallbackClient`], which owns the connection
//! pool, the base URL and the FSPIOP headers common to every callback.

mod error_reporter;
mod notifier;

pub use error_reporter::HttpErrorReporter;
pub use notifier::HttpOutboundNotifier;

use std::time::{Duration, SystemTime};

use reqwest::header::{ACCEPT, CONTENT_TYPE, DATE};
use serde::Serialize;
use thirdparty_authorizations_sdk::CallbackError;
use url::Url;

const CONTENT_TYPE_VALUE: &str = "application/vnd.interoperability.thirdparty+json;version=1.0";
const FSPIOP_SOURCE: &str = "FSPIOP-Source";
const FSPIOP_DESTINATION: &str = "FSPIOP-Destination";

/// Shared HTTP client for outbound callbacks.
#[derive(Debug, Clone)]
pub struct CallbackClient {
    http: reqwest::Client,
    base_url: Url,
    participant_id: String,
}

impl CallbackClient {
    /// # Errors
    ///
    /// Returns [`CallbackError::InvalidRequest`] if `base_url` is not an
    /// absolute hierarchical URL or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        participant_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CallbackError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CallbackError::InvalidRequest(format!("invalid callback base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CallbackError::InvalidRequest(format!(
                "callback base URL cannot carry a path: {base_url}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                CallbackError::InvalidRequest(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url,
            participant_id: participant_id.into(),
        })
    }

    /// `{base}/thirdpartyRequests/transactions/{id}/authorizations[/extra...]`
    fn authorizations_url(&self, transaction_id: &str, extra: &[&str]) -> Result<Url, CallbackError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                CallbackError::InvalidRequest("callback base URL cannot carry a path".to_owned())
            })?;
            segments
                .pop_if_empty()
                .extend(["thirdpartyRequests", "transactions", transaction_id, "authorizations"])
                .extend(extra);
        }
        Ok(url)
    }

    /// PUT `body` to `url`, addressed to `destination`.
    async fn put<T: Serialize>(
        &self,
        url: Url,
        destination: &str,
        body: &T,
    ) -> Result<u16, CallbackError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| CallbackError::InvalidRequest(format!("unserializable body: {e}")))?;

        tracing::debug!(url = %url, destination, "Sending callback");

        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_VALUE)
            .header(ACCEPT, CONTENT_TYPE_VALUE)
            .header(DATE, httpdate::fmt_http_date(SystemTime::now()))
            .header(FSPIOP_SOURCE, &self.participant_id)
            .header(FSPIOP_DESTINATION, destination)
            .body(bytes)
            .send()
            .await
            .map_err(|e| CallbackError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(CallbackError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
