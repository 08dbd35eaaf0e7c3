pub mod events;
pub mod health;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use thiserror::Error;

/// Largest `limit` a client may ask for.
pub const MAX_LIMIT: u32 = 20;
pub const DEFAULT_LIMIT: u32 = 5;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal server error during research")]
    Research,
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::Research => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// Applies the default and checks `1 <= limit <= MAX_LIMIT`.
///
/// # Errors
///
/// Returns a validation error for an out of range limit.
pub fn validate_limit(limit: Option<u32>) -> Result<usize, ApiError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit as usize)
    } else {
        Err(ApiError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(None).unwrap(), 5);
        assert_eq!(validate_limit(Some(1)).unwrap(), 1);
        assert_eq!(validate_limit(Some(20)).unwrap(), 20);
        assert!(matches!(validate_limit(Some(0)), Err(ApiError::Validation(_))));
        assert!(matches!(validate_limit(Some(21)), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::Research.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Validation("bad".to_string()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
