use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::connectors::ConnectorError;
use crate::extraction::service::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps each failure to the wire status and stable error code.
    /// Upstream details are logged, not echoed to clients.
    fn status_and_code(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Extraction(ExtractionError::Validation(msg)) => {
                tracing::error!("extracted payload failed validation: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    "Provider returned data that failed validation".to_string(),
                )
            }
            AppError::Extraction(ExtractionError::Connector(e)) => {
                tracing::error!("connector failure: {e}");
                match e {
                    ConnectorError::Timeout { .. } => (
                        StatusCode::GATEWAY_TIMEOUT,
                        "UPSTREAM_TIMEOUT",
                        "The AI provider did not respond in time".to_string(),
                    ),
                    _ => (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "The AI provider call failed".to_string(),
                    ),
                }
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.status_and_code();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation_maps_to_400() {
        let (status, code, _) =
            AppError::Validation("text cannot be empty".to_string()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_payload_validation_maps_to_422() {
        let error = AppError::Extraction(ExtractionError::Validation("bad enum".to_string()));
        let (status, code, message) = error.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "EXTRACTION_ERROR");
        // Provider details must not leak into the client-facing message.
        assert!(!message.contains("bad enum"));
    }

    #[test]
    fn test_connector_timeout_maps_to_504() {
        let error = AppError::Extraction(ExtractionError::Connector(ConnectorError::Timeout {
            timeout_secs: 60.0,
        }));
        let (status, code, _) = error.status_and_code();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(code, "UPSTREAM_TIMEOUT");
    }

    #[test]
    fn test_connector_auth_failure_maps_to_502() {
        let error = AppError::Extraction(ExtractionError::Connector(ConnectorError::Auth {
            status: 401,
        }));
        let (status, code, _) = error.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");
    }

    #[test]
    fn test_malformed_response_maps_to_502() {
        let error = AppError::Extraction(ExtractionError::Connector(
            ConnectorError::MalformedResponse("no tool_use block".to_string()),
        ));
        let (status, _, _) = error.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let error = AppError::Internal(anyhow::anyhow!("boom"));
        let (status, code, message) = error.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
        assert!(!message.contains("boom"));
    }
}
