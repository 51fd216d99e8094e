use crate::api::error::ApiError;

use em_auth::AuthError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid email format".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_conflict_error_returns_409() {
    let error = ApiError::Conflict {
        message: "User already exists: a@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("a@x.com"));
}

#[tokio::test]
async fn test_unauthorized_error_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Invalid credentials".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Authentication operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_already_exists_converts_to_conflict() {
    let error = AuthError::AlreadyExists {
        identifier: "a@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(ApiError::from(error), ApiError::Conflict { .. }));
}

#[test]
fn test_invalid_credentials_converts_to_unauthorized() {
    let error = AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(
        ApiError::from(error),
        ApiError::Unauthorized { .. }
    ));
}

#[test]
fn test_token_errors_convert_to_unauthorized() {
    let expired = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let unauthenticated = AuthError::Unauthenticated {
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(
        ApiError::from(expired),
        ApiError::Unauthorized { .. }
    ));
    assert!(matches!(
        ApiError::from(unauthenticated),
        ApiError::Unauthorized { .. }
    ));
}

#[test]
fn test_hash_error_converts_to_internal() {
    let error = AuthError::Hash {
        message: "salt generation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(ApiError::from(error), ApiError::Internal { .. }));
}

#[test]
fn test_validation_error_keeps_field() {
    let error = AuthError::Validation {
        message: "Password must be at least 8 characters".into(),
        field: Some("password".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(
        ApiError::from(error),
        ApiError::Validation { field: Some(ref f), .. } if f == "password"
    ));
}
