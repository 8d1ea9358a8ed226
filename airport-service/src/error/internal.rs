use axum_core::response::IntoResponse;
use displaydoc::Display;
use http::StatusCode;
use thiserror::Error;

use super::storage::StorageError;

pub(crate) const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Internal errors
#[derive(Debug, Error, Display, strum::AsRefStr)]
pub enum InternalError {
    /// Object store error: {0}
    ObjectStore(#[from] StorageError),
}

impl IntoResponse for InternalError {
    fn into_response(self) -> axum_core::response::Response {
        tracing::error!(error = %self, kind = self.as_ref(), "Internal server error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_SERVER_ERROR_MESSAGE,
        )
            .into_response()
    }
}
