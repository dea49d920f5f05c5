use async_trait::async_trait;
use thirdparty_authorizations_sdk::{
    AuthorizationPayload, AuthorizationStatus, CallbackError, NotifyResponse, OutboundNotifier,
};

use super::CallbackClient;

/// Forwards verified authorizations with
/// `PUT /thirdpartyRequests/transactions/{ID}/authorizations`.
#[derive(Debug, Clone)]
pub struct HttpOutboundNotifier {
    client: CallbackClient,
}

impl HttpOutboundNotifier {
    #[must_use]
    pub fn new(client: CallbackClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OutboundNotifier for HttpOutboundNotifier {
    async fn notify(
        &self,
        payload: &AuthorizationPayload,
        transaction_id: &str,
        source: &str,
    ) -> Result<NotifyResponse, CallbackError> {
        let url = self.client.authorizations_url(transaction_id, &[])?;

        let mut body = payload.clone();
        body.status = AuthorizationStatus::Verified;

        let status_code = self.client.put(url, source, &body).await?;
        Ok(NotifyResponse { status_code })
    }
}
