//! HTTP response handling for errors

use super::types::IngestError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl IngestError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            IngestError::Decode(_) => (StatusCode::BAD_REQUEST, "INVALID_NOTIFICATION_BATCH"),
            IngestError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            IngestError::Store(_) => (StatusCode::BAD_GATEWAY, "STORE_ERROR"),
            IngestError::HttpClient(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for IngestError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Only client errors echo their message back to the caller
        let message = match self {
            IngestError::Decode(_) => self.to_string(),
            _ => "An internal error occurred".to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
