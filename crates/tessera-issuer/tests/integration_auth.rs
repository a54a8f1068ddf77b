use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use tessera_auth::{VerificationKey, jwt};
use tessera_config::JwtConfig;
use tessera_core::hash_password;
use tessera_issuer::router::init_router;
use tessera_issuer::state::AppState;
use tessera_issuer::store::{InMemoryUserStore, UserRecord, UserStore};

const TEST_PRIVATE_PEM: &str = include_str!("fixtures/jwt-private.pem");
const TEST_PUBLIC_PEM: &str = include_str!("fixtures/jwt-public.pem");

fn test_app() -> axum::Router {
    let store = InMemoryUserStore::new();
    store.insert(UserRecord {
        username: "alice".to_string(),
        password_hash: hash_password("correct-password").unwrap(),
        roles: vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()],
    });

    let state = AppState {
        users: Arc::new(store),
        signing_key: tessera_auth::SigningKey::from_rsa_pem(TEST_PRIVATE_PEM.as_bytes()).unwrap(),
        jwt_config: JwtConfig {
            private_key_path: "unused-in-tests".to_string(),
            public_key_path: "unused-in-tests".to_string(),
            token_expiry: 3600,
        },
    };
    init_router(state)
}

fn authenticate_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/auth/authenticate")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_authenticate_success_returns_verifiable_token() {
    let app = test_app();

    let response = app
        .oneshot(authenticate_request("alice", "correct-password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Authentication successful");
    let token = body["token"].as_str().expect("token must be present");

    // the token must verify against the public half of the key pair
    let key = VerificationKey::from_rsa_pem(TEST_PUBLIC_PEM.as_bytes()).unwrap();
    let claims = jwt::verify_token(token, &key).unwrap();
    assert_eq!(claims.sub, "alice");

    let roles: HashSet<_> = claims.roles.into_iter().collect();
    let expected: HashSet<_> = ["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()]
        .into_iter()
        .collect();
    assert_eq!(roles, expected);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_fail_identically() {
    // anti-enumeration: both failures must be indistinguishable
    let wrong_password = test_app()
        .oneshot(authenticate_request("alice", "wrong-password"))
        .await
        .unwrap();
    let unknown_user = test_app()
        .oneshot(authenticate_request("mallory", "whatever"))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let first = body_json(wrong_password).await;
    let second = body_json(unknown_user).await;
    assert_eq!(first, second);
    assert!(first["token"].is_null());
}

#[tokio::test]
async fn test_authenticate_missing_field_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/authenticate")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"username": "alice"})).unwrap(),
        ))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_then_authenticate() {
    let app = test_app();

    let register = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "bob",
                "password": "bobs-long-password"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(register).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["username"], "bob");
    assert_eq!(body["roles"], json!(["ROLE_USER"]));

    let response = app
        .oneshot(authenticate_request("bob", "bobs-long-password"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_duplicate_username_is_rejected() {
    let app = test_app();

    let request = || {
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({
                    "username": "carol",
                    "password": "carols-long-password"
                }))
                .unwrap(),
            ))
            .unwrap()
    };

    let response = app.clone().oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_short_password_is_unprocessable() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": "dave",
                "password": "short"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
