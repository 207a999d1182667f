//! REST error mapping.
//!
//! Calculator and body errors are the caller's input and map to
//! `400 Bad Request`. A failed evaluation task maps to `500`. Both carry a
//! `{ message, code }` body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use calc_core::CalcError;

use super::dto::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    /// Input failed calc_core validation
    Calc(CalcError),
    /// Body was not JSON or did not match the request shape
    MalformedBody(JsonRejection),
    /// Evaluation task panicked or was cancelled
    Internal(String),
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        ApiError::Calc(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::MalformedBody(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Calc(e) => {
                tracing::warn!(field = e.field(), code = e.error_code(), "rejected input");
                let body = ErrorResponse {
                    message: e.reason().to_owned(),
                    code: e.error_code().to_owned(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            ApiError::MalformedBody(rejection) => {
                tracing::warn!(error = %rejection, "malformed request body");
                let body = ErrorResponse {
                    message: rejection.body_text(),
                    code: "MALFORMED_BODY".to_owned(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "calculation task failed");
                let body = ErrorResponse {
                    message: "Internal server error".to_owned(),
                    code: "INTERNAL".to_owned(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_is_500() {
        let response = ApiError::Internal("task cancelled".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_calc_error_is_400() {
        let response = ApiError::from(CalcError::division_by_zero("num2")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
