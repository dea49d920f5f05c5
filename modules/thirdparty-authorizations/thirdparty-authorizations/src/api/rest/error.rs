use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// RFC 9457 problem details.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

impl Problem {
    #[must_use]
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, axum::Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}

/// Failures of the inbound transport, before the pipeline is reached.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing or invalid header '{0}'")]
    MissingHeader(&'static str),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
}

impl From<ApiError> for Problem {
    fn from(e: ApiError) -> Self {
        match &e {
            ApiError::MissingHeader(_) => {
                Problem::new(StatusCode::BAD_REQUEST, "Missing Header", e.to_string())
            }
            ApiError::InvalidBody(rejection) => {
                Problem::new(StatusCode::BAD_REQUEST, "Invalid Request", rejection.body_text())
            }
            ApiError::InvalidPath(rejection) => {
                Problem::new(StatusCode::BAD_REQUEST, "Invalid Path", rejection.body_text())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Problem::from(self).into_response()
    }
}
