use axum::{Json, extract::State};

use crate::{
    app_state::AppState,
    types::airport::{AirportV1, AirportV2},
};

/// GET /airports
pub async fn list_v1(State(app_state): State<AppState>) -> Json<Vec<AirportV1>> {
    Json(app_state.registry().list_v1().await)
}

/// GET /airports_v2
pub async fn list_v2(State(app_state): State<AppState>) -> Json<Vec<AirportV2>> {
    Json(app_state.registry().list_v2().await)
}
