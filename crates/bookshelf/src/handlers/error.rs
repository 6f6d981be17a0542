use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use bookshelf_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error type returned by request handlers.
///
/// Rendered as a JSON body of the form `{"detail": "<message>"}` with the
/// status code carrying the error class.
pub enum AppError {
    /// Requested entity (or result set) is absent.
    NotFound(&'static str),
    /// Duplicate author name detected by the pre-insert check.
    Conflict(&'static str),
    /// Anything propagated from below; repository errors keep their
    /// status mapping, everything else is a 500.
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, detail.to_string()),
            AppError::Conflict(detail) => (StatusCode::BAD_REQUEST, detail.to_string()),
            AppError::Internal(err) => {
                let status_code =
                    if let Some(repo_error) = err.downcast_ref::<RepositoryError>() {
                        let code = repository_error_to_status_code(repo_error);
                        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                    } else {
                        StatusCode::INTERNAL_SERVER_ERROR
                    };
                (status_code, err.to_string())
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
