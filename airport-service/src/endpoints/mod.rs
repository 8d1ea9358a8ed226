pub mod airports;
pub mod upload;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{app_state::AppState, error::invalid_req::InvalidRequestError};

/// `GET /` is answered by [`HealthCheckLayer`] before routing.
///
/// [`HealthCheckLayer`]: crate::utils::health_check::HealthCheckLayer
pub fn router(app_state: AppState) -> Router {
    let max_body_size = app_state.config().upload.max_body_size;
    Router::new()
        .route(
            "/airports",
            get(airports::list_v1).fallback(method_not_allowed),
        )
        .route(
            "/airports_v2",
            get(airports::list_v2).fallback(method_not_allowed),
        )
        .route(
            "/update_airport_image",
            post(upload::update_airport_image)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(app_state)
}

/// Known path, wrong method. Replaces axum's empty 405 so every client
/// error carries a plain-text body.
async fn method_not_allowed() -> InvalidRequestError {
    InvalidRequestError::MethodNotAllowed
}
