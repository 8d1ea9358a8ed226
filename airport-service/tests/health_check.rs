use airport_service::tests::harness::Harness;
use http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;

#[tokio::test]
#[serial_test::serial]
async fn health_check() {
    let mut harness = Harness::builder().build().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("http://airports.test/")
        .body(axum_core::body::Body::empty())
        .unwrap();

    let response = harness.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    assert!(response.headers().contains_key("x-request-id"));
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Status: OK");

    let request = Request::builder()
        .method(Method::GET)
        .uri("http://airports.test/not-health-check")
        .body(axum_core::body::Body::empty())
        .unwrap();

    let response = harness.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial_test::serial]
async fn client_request_id_is_echoed() {
    let mut harness = Harness::builder().build().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("http://airports.test/")
        .header("x-request-id", "trace-me-123")
        .body(axum_core::body::Body::empty())
        .unwrap();

    let response = harness.call(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}
