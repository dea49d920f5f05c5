use async_trait::async_trait;
use thirdparty_authorizations_sdk::{
    CallbackError, ErrorInformationObject, ErrorReporter, Rejection, RequestContext,
};

use super::CallbackClient;

/// Reports rejections with
/// `PUT /thirdpartyRequests/transactions/{ID}/authorizations/error`.
#[derive(Debug, Clone)]
pub struct HttpErrorReporter {
    client: CallbackClient,
}

impl HttpErrorReporter {
    #[must_use]
    pub fn new(client: CallbackClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ErrorReporter for HttpErrorReporter {
    async fn report_error(
        &self,
        ctx: &RequestContext,
        rejection: Rejection,
    ) -> Result<(), CallbackError> {
        let url = self
            .client
            .authorizations_url(&ctx.transaction_id, &["error"])?;
        let body = ErrorInformationObject::from(rejection);

        self.client.put(url, &ctx.source, &body).await?;
        Ok(())
    }
}
