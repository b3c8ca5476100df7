//! HTTP API error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors returned to HTTP clients
///
/// The chat room itself never fails; every variant here is a boundary rejection.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded into the expected shape
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The request decoded but carried an invalid value
    #[error("Invalid request: {0}")]
    InvalidInput(#[from] ValueObjectError),
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::MalformedBody(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedBody(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        tracing::warn!(status = %status, "Rejected request: {}", self);

        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        // テスト項目: 値オブジェクトのエラーは 400 Bad Request になる
        // given (前提条件):
        let error = ApiError::from(ValueObjectError::EmptyUsername);

        // when (操作):
        let response = error.into_response();

        // then (期待する結果):
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_decode_error_maps_to_bad_request() {
        // テスト項目: JSON のデコードエラーは 400 Bad Request になる
        // given (前提条件):
        let decode_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

        // when (操作):
        let response = ApiError::from(decode_error).into_response();

        // then (期待する結果):
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_message_includes_cause() {
        // テスト項目: エラーメッセージに原因が含まれる
        let error = ApiError::from(ValueObjectError::EmptyUsername);

        assert_eq!(
            error.to_string(),
            "Invalid request: username must not be empty"
        );
    }
}
