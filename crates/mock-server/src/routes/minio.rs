use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{AppState, StoredObject};

pub(crate) async fn put_object(
    State(state): State<AppState>,
    Path((bucket, key)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if state.config.minio_latency > 0 {
        crate::routes::sleep(state.config.minio_latency).await;
    }
    if state.config.fail_uploads {
        tracing::debug!(%bucket, %key, "rejecting upload");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    tracing::debug!(%bucket, %key, size = body.len(), "stored object");
    state
        .objects
        .insert(&bucket, &key, StoredObject { content_type, body })
        .await;
    StatusCode::OK
}

pub(crate) async fn get_object(
    State(state): State<AppState>,
    Path((bucket, key)): Path<(String, String)>,
) -> Response {
    if state.config.minio_latency > 0 {
        crate::routes::sleep(state.config.minio_latency).await;
    }
    match state.objects.get(&bucket, &key).await {
        Some(object) => {
            let content_type = object
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            ([(CONTENT_TYPE, content_type)], object.body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
