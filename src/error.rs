use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StoreError;

/// Handler-boundary errors. Internal detail is logged server-side; callers
/// only ever see a generic plain-text body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("object storage failure: {0}")]
    Store(#[from] StoreError),

    /// Catalog failure on the upload path.
    #[error("catalog failure: {0}")]
    Persistence(#[from] CatalogError),

    /// Spool-file failure on the upload path.
    #[error("file i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog failure on the listing path.
    #[error("catalog failure: {0}")]
    Listing(CatalogError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Store(_) | ApiError::Persistence(_) | ApiError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Upload failed.".to_string())
            }
            ApiError::Listing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load projects.".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (status, body).into_response()
    }
}
