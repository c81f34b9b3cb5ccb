//! Unified error handling
//!
//! [`AppError`] is what every handler returns on failure. Each variant maps to
//! one HTTP status and one JSON body shape:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | Forbidden | 403 | `{"error": "<message>"}` |
//! | NotFound | 404 | `{"error": {"Not Found": "<message>"}}` |
//! | Conflict | 409 | `{"error": {"Conflict": "<message>"}}` |
//! | Validation | 400 | `{"error": {"Bad Request": "<message>"}}` |
//! | Database | 500 | `{"error": {"Internal Server Error": "Internal server error"}}` |
//!
//! # Example
//!
//! ```ignore
//! Err(AppError::not_found("Sorry a cafe with that id was not found in the database."))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorResponse;
use tracing::error;

use crate::db::repository::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Permission denied: {0}")]
    /// Wrong or missing API key (403)
    Forbidden(String),

    #[error("Resource not found: {0}")]
    /// Unknown id, no match, empty table (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// Unique constraint hit (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// Missing required field or unreadable body (400)
    Validation(String),

    #[error("Database error: {0}")]
    /// Database error (500)
    Database(String),
}

impl AppError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the client. Server-side details stay in the logs.
    pub fn body(&self) -> ErrorResponse {
        match self {
            AppError::Forbidden(msg) => ErrorResponse::message(msg.as_str()),
            AppError::NotFound(msg) => ErrorResponse::labeled("Not Found", msg.as_str()),
            AppError::Conflict(msg) => ErrorResponse::labeled("Conflict", msg.as_str()),
            AppError::Validation(msg) => ErrorResponse::labeled("Bad Request", msg.as_str()),
            AppError::Database(_) => {
                ErrorResponse::labeled("Internal Server Error", "Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(msg) = &self {
            error!(target: "database", error = %msg, "Database error occurred");
        }

        (self.status(), Json(self.body())).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::forbidden("x").status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::database("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_forbidden_body_is_plain_string() {
        let body = serde_json::to_value(AppError::forbidden("no").body()).unwrap();
        assert_eq!(body, json!({ "error": "no" }));
    }

    #[test]
    fn test_not_found_body_is_labeled() {
        let body = serde_json::to_value(AppError::not_found("gone").body()).unwrap();
        assert_eq!(body, json!({ "error": { "Not Found": "gone" } }));
    }

    #[test]
    fn test_database_details_are_hidden() {
        let body = serde_json::to_value(AppError::database("disk I/O error").body()).unwrap();
        assert_eq!(
            body,
            json!({ "error": { "Internal Server Error": "Internal server error" } })
        );
    }

    #[test]
    fn test_repo_error_conversion() {
        assert!(matches!(
            AppError::from(RepoError::Duplicate("name".into())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::NotFound("id".into())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Validation("field".into())),
            AppError::Validation(_)
        ));
    }
}
