use crate::app_state::AppState;
use crate::routes::build_router;

use em_auth::{AuthService, JwtValidator, PasswordHasher, TokenIssuer};
use em_store::MemoryCredentialStore;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use http::{HeaderName, HeaderValue};
use serde_json::{Value, json};

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";
const TEST_TOKEN_TTL_SECS: i64 = 3600;

fn test_server() -> TestServer {
    let service = AuthService::new(
        Arc::new(MemoryCredentialStore::new()),
        PasswordHasher::new(),
        TokenIssuer::with_hs256(TEST_JWT_SECRET, TEST_TOKEN_TTL_SECS),
        JwtValidator::with_hs256(TEST_JWT_SECRET),
    );
    let state = AppState {
        service: Arc::new(service),
        token_ttl_secs: TEST_TOKEN_TTL_SECS,
    };

    TestServer::new(build_router(state)).unwrap()
}

fn register_payload() -> Value {
    json!({
        "email": "a@x.com",
        "firstName": "Jane",
        "lastName": "Doe",
        "password": "password123",
        "authProvider": "local",
    })
}

fn set_cookie_header(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("set-cookie")
        .expect("set-cookie header")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_register_returns_created_user_token_and_cookie() {
    let server = test_server();

    let response = server.post("/auth/register").json(&register_payload()).await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["firstName"], "Jane");
    assert_eq!(body["user"]["isEmailVerified"], false);
    assert_eq!(body["user"]["totalPoints"], 0);
    assert!(body["token"].is_string());

    // No credential material in the response
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    let cookie = set_cookie_header(&response);
    assert!(cookie.starts_with("authToken="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains(&format!("Max-Age={TEST_TOKEN_TTL_SECS}")));
}

#[tokio::test]
async fn test_register_duplicate_identifier_returns_conflict() {
    let server = test_server();

    server.post("/auth/register").json(&register_payload()).await;
    let response = server.post("/auth/register").json(&register_payload()).await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFLICT");

    // The first registration still wins
    let login = server
        .post("/auth/login")
        .json(&json!({ "emailOrPhone": "a@x.com", "password": "password123" }))
        .await;
    login.assert_status(StatusCode::OK);
    let login_body: Value = login.json();
    assert_eq!(login_body["user"]["id"], 1);
    assert_eq!(login_body["user"]["firstName"], "Jane");
}

#[tokio::test]
async fn test_register_validation_failures_return_400() {
    let server = test_server();

    let mut bad_email = register_payload();
    bad_email["email"] = json!("not-an-email");
    let response = server.post("/auth/register").json(&bad_email).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "email");

    let mut short_password = register_payload();
    short_password["password"] = json!("short");
    let response = server.post("/auth/register").json(&short_password).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["field"], "password");

    let mut no_identifier = register_payload();
    no_identifier["email"] = Value::Null;
    let response = server.post("/auth/register").json(&no_identifier).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let mut bad_provider = register_payload();
    bad_provider["authProvider"] = json!("facebook");
    let response = server.post("/auth/register").json(&bad_provider).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["field"], "authProvider");
}

#[tokio::test]
async fn test_login_with_wrong_password_and_unknown_user_are_indistinguishable() {
    let server = test_server();
    server.post("/auth/register").json(&register_payload()).await;

    let wrong_password = server
        .post("/auth/login")
        .json(&json!({ "emailOrPhone": "a@x.com", "password": "wrong" }))
        .await;
    let unknown_user = server
        .post("/auth/login")
        .json(&json!({ "emailOrPhone": "b@x.com", "password": "password123" }))
        .await;

    wrong_password.assert_status(StatusCode::UNAUTHORIZED);
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);

    // Same status, same body: no identifier enumeration signal
    let wrong_body: Value = wrong_password.json();
    let unknown_body: Value = unknown_user.json();
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_current_user_with_bearer_token() {
    let server = test_server();
    let register: Value = server
        .post("/auth/register")
        .json(&register_payload())
        .await
        .json();
    let token = register["token"].as_str().unwrap().to_string();

    let response = server
        .get("/auth/user")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "a@x.com");
}

#[tokio::test]
async fn test_current_user_with_cookie_token() {
    let server = test_server();
    let register: Value = server
        .post("/auth/register")
        .json(&register_payload())
        .await
        .json();
    let token = register["token"].as_str().unwrap();

    let response = server
        .get("/auth/user")
        .add_header(
            HeaderName::from_static("cookie"),
            HeaderValue::from_str(&format!("authToken={token}")).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_current_user_without_token_returns_401() {
    let server = test_server();

    let response = server.get("/auth/user").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_with_tampered_token_returns_401() {
    let server = test_server();
    let register: Value = server
        .post("/auth/register")
        .json(&register_payload())
        .await
        .json();
    let mut token = register["token"].as_str().unwrap().to_string();
    let flipped = if token.ends_with('A') { 'B' } else { 'A' };
    token.pop();
    token.push(flipped);

    let response = server
        .get("/auth/user")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = test_server();

    let response = server.post("/auth/logout").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Logged out successfully");
    assert!(body.get("user").is_none());
    assert!(body.get("token").is_none());

    let cookie = set_cookie_header(&response);
    assert!(cookie.starts_with("authToken=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = test_server();

    let health = server.get("/health").await;
    health.assert_status(StatusCode::OK);
    let body: Value = health.json();
    assert_eq!(body["status"], "healthy");

    server.get("/live").await.assert_status(StatusCode::OK);
    server.get("/ready").await.assert_status(StatusCode::OK);
}
