//! Error types for HTTP handlers.
//!
//! Bridges `CoreError` and request-body rejections to JSON error responses.
//!
//! ## Mapping
//! ```text
//! ┌──────────────────────────────┬────────┬──────────────────┐
//! │ Source                       │ Status │ code             │
//! ├──────────────────────────────┼────────┼──────────────────┤
//! │ CoreError::Validation        │  400   │ VALIDATION_ERROR │
//! │ malformed JSON body          │  400   │ VALIDATION_ERROR │
//! │ other CoreError (rule)       │  400   │ BUSINESS_RULE    │
//! │ CoreError::Store             │  500   │ INTERNAL_ERROR   │
//! └──────────────────────────────┴────────┴──────────────────┘
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use seating_core::CoreError;
use serde::Serialize;
use std::fmt;

/// Message returned for every 5xx; the detail only goes to the log.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    /// User-facing message.
    message: String,
    /// Logged, never sent.
    detail: Option<String>,
}

impl ApiError {
    /// 400 for a field that failed its bounds or a body that did not parse.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: "VALIDATION_ERROR",
            message: message.into(),
            detail: None,
        }
    }

    /// 400 for a seating rule the request would break.
    pub fn business_rule(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: "BUSINESS_RULE",
            message: message.into(),
            detail: None,
        }
    }

    /// 500 with a generic message; `detail` is logged.
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: INTERNAL_MESSAGE.to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                code = self.code,
                detail = self.detail.as_deref().unwrap_or_default(),
                "Internal server error"
            );
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Store(e) => ApiError::internal(e.to_string()),
            rule => ApiError::business_rule(rule.to_string()),
        }
    }
}

/// Every body rejection is the client's fault: bad syntax, wrong types,
/// missing content type.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use seating_core::{StoreError, ValidationError};

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::InvalidTable.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BUSINESS_RULE");
        assert_eq!(err.to_string(), "[BUSINESS_RULE] Invalid table-id");

        let err: ApiError = CoreError::from(ValidationError::MustBePositive {
            field: "capacity".to_string(),
        })
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err: ApiError = CoreError::from(StoreError::Unavailable("pool closed".into())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_internal_detail_not_exposed() {
        let response = ApiError::internal("UNIQUE constraint failed: guests.name").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }
}
