pub mod routes;

use std::{collections::HashMap, sync::Arc};

use axum::{Router, extract::DefaultBodyLimit, routing::put};
use bytes::Bytes;
use serde::Deserialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Artificial latency in milliseconds added to every object request.
    pub minio_latency: u32,
    /// Answer every upload with a `500` instead of storing it.
    pub fail_uploads: bool,
    pub address: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minio_latency: 5,
            fail_uploads: false,
            address: "[::]".to_string(),
            port: 9190,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Objects keyed by `(bucket, key)`, shared between the server and whoever
/// spawned it.
#[derive(Debug, Clone, Default)]
pub struct Objects(Arc<RwLock<HashMap<(String, String), StoredObject>>>);

impl Objects {
    pub async fn insert(&self, bucket: &str, key: &str, object: StoredObject) {
        self.0
            .write()
            .await
            .insert((bucket.to_string(), key.to_string()), object);
    }

    pub async fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.0
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.0.read().await.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: Config,
    pub objects: Objects,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            objects: Objects::default(),
        }
    }
}

/// Path-style S3 object routes: `/{bucket}/{key}`.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/{bucket}/{*key}",
            put(routes::minio::put_object).get(routes::minio::get_object),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn state(fail_uploads: bool) -> AppState {
        AppState::new(Config {
            minio_latency: 0,
            fail_uploads,
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn stores_and_serves_objects() {
        let state = state(false);
        let app = router(state.clone());

        let request = Request::builder()
            .method(Method::PUT)
            .uri("/bucket/zyl.jpg?X-Amz-Signature=abc")
            .header(CONTENT_TYPE, "image/jpeg")
            .body(Body::from("jpeg bytes"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let stored = state.objects.get("bucket", "zyl.jpg").await.unwrap();
        assert_eq!(stored.content_type.as_deref(), Some("image/jpeg"));

        let request = Request::builder()
            .uri("/bucket/zyl.jpg")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"jpeg bytes"));
    }

    #[tokio::test]
    async fn failing_uploads_store_nothing() {
        let state = state(true);
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/bucket/zyl.jpg")
            .body(Body::from("jpeg bytes"))
            .unwrap();
        let response = router(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.objects.is_empty().await);
    }
}
