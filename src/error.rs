use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The node could not be reached or returned an unusable response.
    /// Surfaced with a generic message; the diagnostic detail goes to the log.
    #[error("Error fetching logs")]
    FetchFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::FetchFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching logs".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_display() {
        assert_eq!(AppError::FetchFailed.to_string(), "Error fetching logs");
    }

    #[test]
    fn test_fetch_failed_status_code() {
        let response = AppError::FetchFailed.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
