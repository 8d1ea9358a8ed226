use axum_core::response::IntoResponse;
use displaydoc::Display;
use http::StatusCode;
use thiserror::Error;

use super::{
    internal::{INTERNAL_SERVER_ERROR_MESSAGE, InternalError},
    invalid_req::InvalidRequestError,
};

/// Common API errors
#[derive(Debug, Error, Display, strum::AsRefStr)]
pub enum ApiError {
    /// Invalid request: {0}
    InvalidRequest(#[from] InvalidRequestError),
    /// Internal error: {0}
    Internal(#[from] InternalError),
    /// Panic: {0}
    Panic(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum_core::response::Response {
        match self {
            ApiError::InvalidRequest(error) => error.into_response(),
            ApiError::Internal(error) => error.into_response(),
            ApiError::Panic(details) => {
                tracing::error!(details = %details, "handler panicked");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE,
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::storage::StorageError;

    #[test]
    fn status_codes() {
        let cases = [
            (
                ApiError::from(InvalidRequestError::EmptyAirportName),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(InvalidRequestError::MissingImage),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(InvalidRequestError::AirportNotFound(
                    "Nowhere".to_string(),
                )),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(InvalidRequestError::MethodNotAllowed),
                StatusCode::METHOD_NOT_ALLOWED,
            ),
            (
                ApiError::from(InternalError::from(StorageError::Timeout)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Panic("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            let kind = error.as_ref().to_string();
            assert_eq!(error.into_response().status(), expected, "{kind}");
        }
    }

    #[test]
    fn error_bodies_are_plain_text() {
        let response =
            ApiError::from(InvalidRequestError::EmptyAirportName).into_response();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
