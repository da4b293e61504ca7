//! Error types for the snippet service.
//!
//! [`ServiceError`] captures every failure a handler can produce and maps
//! each onto an HTTP status via `IntoResponse`, so handlers can use `?`
//! throughout.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::server::store::StoreError;

/// Unified error type for the snippet service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The caller-supplied public identifier failed to decode.
    ///
    /// Client error, never retryable: the identifier will not become valid.
    #[error("invalid snippet identifier: {0}")]
    InvalidId(#[from] snipvault::Error),

    /// The identifier decoded cleanly but no blob is stored at its path.
    #[error("snippet not found")]
    NotFound,

    /// A save targeted an already-occupied path (same-millisecond creation).
    #[error("a snippet was already saved at this instant, retry the save")]
    Collision,

    /// The blob store failed; details are logged, not exposed.
    #[error("storage failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { .. } => Self::Collision,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Collision => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            // Internal detail stays in the logs.
            return (status, "storage failure").into_response();
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_classes() {
        let invalid = ServiceError::InvalidId(
            snipvault::RawSnippetId::decode("not letters!").unwrap_err(),
        );
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Collision.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn collisions_are_mapped_from_store_errors() {
        let err: ServiceError = StoreError::AlreadyExists {
            path: "2021/02/05/40572059".to_owned(),
        }
        .into();
        assert!(matches!(err, ServiceError::Collision));
    }
}
