use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use calculator_sdk::CalculatorError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error body: `{error, code, trace_id?}`.
///
/// `error` is the user-facing message, `code` the stable error kind.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "division by zero")]
    pub error: String,
    #[schema(example = "DIVISION_BY_ZERO")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Errors surfaced by the REST handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    /// Body could not be read or does not carry the required fields
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    #[must_use]
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::InvalidRequest(detail.into())
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Calculator(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Calculator(e) => e.code(),
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::NotFound => "NOT_FOUND",
        }
    }

    fn to_body(&self) -> ErrorResponse {
        let trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());

        ErrorResponse {
            error: self.to_string(),
            code: self.code().to_owned(),
            trace_id,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(error = %self, code = self.code(), "request rejected");
        (status, Json(self.to_body())).into_response()
    }
}
