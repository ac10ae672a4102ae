//! Error types for the Catalog API.
//!
//! Every failure leaves a handler as an [`ApiError`], which renders as
//! `{"code": "...", "message": "..."}` with the matching status.
//!
//! ```text
//! RepoError::DuplicateName      → 400 DUPLICATE_NAME
//! RepoError::NotFound           → 404 NOT_FOUND
//! RepoError::Storage / DbError  → 500 DATABASE_ERROR (details logged only)
//! ValidationError / rejections  → 422 VALIDATION_ERROR
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::ValidationError;
use catalog_db::{DbError, RepoError};
use serde::Serialize;
use tracing::error;

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    DuplicateName,
    ValidationError,
    DatabaseError,
    Internal,
}

/// An error on its way out as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: ErrorCode,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ValidationError,
            message,
        )
    }

    /// Same error with a different status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    fn storage(err: &DbError) -> Self {
        error!(error = %err, "Storage failure");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseError,
            "Database error",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        let message = err.to_string();
        match err {
            RepoError::DuplicateName { .. } => {
                Self::new(StatusCode::BAD_REQUEST, ErrorCode::DuplicateName, message)
            }
            RepoError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, message),
            RepoError::Storage(db) => Self::storage(&db),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        Self::storage(&err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_db::ItemKey;

    #[test]
    fn test_repo_error_mapping() {
        let err = ApiError::from(RepoError::DuplicateName {
            name: "Widget".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::DuplicateName);
        assert_eq!(err.message, "Item already exists: 'Widget'");

        let err = ApiError::from(RepoError::NotFound(ItemKey::Id(4)));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = ApiError::from(RepoError::Storage(DbError::PoolExhausted));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database error");
    }

    #[test]
    fn test_validation_mapping() {
        let err = ApiError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_code_serialization() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::DuplicateName).unwrap(),
            "\"DUPLICATE_NAME\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::DatabaseError).unwrap(),
            "\"DATABASE_ERROR\""
        );
    }

    #[test]
    fn test_with_status() {
        let err = ApiError::from(RepoError::NotFound(ItemKey::Id(1)))
            .with_status(StatusCode::BAD_REQUEST);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
