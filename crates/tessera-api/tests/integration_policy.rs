use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use tessera_api::router::init_router;
use tessera_api::state::init_app_state;

fn test_app() -> Router {
    init_router(init_app_state())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// A request as it arrives from the gateway: identity asserted in headers.
fn get_as(uri: &str, user: &str, roles: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-authenticated-user", user)
        .header("x-authenticated-roles", roles)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_protected_route_without_headers_is_unauthorized() {
    let response = test_app().oneshot(get("/api/v1/regions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_headers_establish_identity_for_protected_route() {
    let response = test_app()
        .oneshot(get_as("/api/v1/regions", "alice", "ROLE_USER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body.as_array().is_some_and(|regions| !regions.is_empty()));
}

#[tokio::test]
async fn test_region_lookup_and_unknown_id() {
    let response = test_app()
        .oneshot(get_as("/api/v1/regions/1", "alice", "ROLE_USER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], "AND");

    let response = test_app()
        .oneshot(get_as("/api/v1/regions/999", "alice", "ROLE_USER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_route_without_headers_is_unauthorized() {
    let response = test_app().oneshot(get("/api/v1/users/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_with_user_role_is_forbidden() {
    let response = test_app()
        .oneshot(get_as("/api/v1/users/me", "alice", "ROLE_USER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("ROLE_ADMIN"));
}

#[tokio::test]
async fn test_admin_route_with_admin_role_reflects_identity() {
    let response = test_app()
        .oneshot(get_as("/api/v1/users/me", "root", "ROLE_USER,ROLE_ADMIN"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "root");
    assert_eq!(body["authorities"], json!(["ROLE_USER", "ROLE_ADMIN"]));
}

#[tokio::test]
async fn test_unknown_route_still_requires_identity() {
    // default rule: authenticated-only
    let response = test_app().oneshot(get("/api/v1/tickets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = test_app()
        .oneshot(get_as("/api/v1/tickets", "alice", "ROLE_USER"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_headers_are_anonymous() {
    // one header without the other must not establish an identity
    let request = Request::builder()
        .uri("/api/v1/regions")
        .header("x-authenticated-user", "alice")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
