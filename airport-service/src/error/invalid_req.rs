use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum_core::response::IntoResponse;
use displaydoc::Display;
use http::StatusCode;
use thiserror::Error;
use tracing::debug;

/// User errors
#[derive(Debug, Error, Display, strum::AsRefStr)]
pub enum InvalidRequestError {
    /// Invalid multipart form: {0}
    InvalidForm(#[from] MultipartRejection),
    /// Error reading multipart form: {0}
    UnreadableForm(#[from] MultipartError),
    /// Empty airport name
    EmptyAirportName,
    /// Missing airport image
    MissingImage,
    /// No airport matched: {0}
    AirportNotFound(String),
    /// Method not allowed
    MethodNotAllowed,
}

impl IntoResponse for InvalidRequestError {
    fn into_response(self) -> axum_core::response::Response {
        debug!(error = %self, kind = self.as_ref(), "Invalid request");
        let status = match self {
            Self::AirportNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // oversized bodies surface here too and are reported as 400
            Self::InvalidForm(_)
            | Self::UnreadableForm(_)
            | Self::EmptyAirportName
            | Self::MissingImage => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
