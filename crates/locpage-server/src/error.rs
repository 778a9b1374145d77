//! Request-level error handling

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use locpage_common::LocPageError;
use thiserror::Error;
use tracing::error;

/// Errors surfaced from request handlers
///
/// The cause is logged server-side; clients only ever see a generic 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Internal(#[from] LocPageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(err) = &self;
        error!(error = %err, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_maps_to_500() {
        let err = AppError::Internal(LocPageError::template("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
