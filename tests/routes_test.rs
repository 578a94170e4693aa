//! Route dispatch tests driven through `tower::ServiceExt::oneshot`, no
//! socket needed.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use sample_service::config::ServiceConfig;
use sample_service::models::UserDirectory;
use sample_service::startup::build_router;
use sample_service::AppState;
use tower::util::ServiceExt;

fn test_router() -> axum::Router {
    let state = AppState::new(ServiceConfig::default(), UserDirectory::seeded());
    build_router(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is JSON")
}

#[tokio::test]
async fn unknown_path_returns_route_not_found() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/unknown-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn method_mismatch_on_known_path_returns_route_not_found() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn get_on_echo_returns_route_not_found() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/echo")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn known_routes_answer_200() {
    for uri in ["/", "/health", "/api/users", "/api/users/2"] {
        let app = test_router();

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{} should answer", uri);
    }
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-correlation-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-correlation-id")
    );
}
