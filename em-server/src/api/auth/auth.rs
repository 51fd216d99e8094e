//! Authentication REST API handlers

use crate::api::auth::auth_response::AuthResponse;
use crate::api::auth::identity_dto::IdentityDto;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_token::{AUTH_COOKIE, AuthToken};
use crate::app_state::AppState;

use em_core::{AuthProvider, NewIdentity};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/register
///
/// Create an identity, issue a token, and set the auth cookie
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, HeaderMap, Json<AuthResponse>)> {
    let provider = parse_auth_provider(&request.auth_provider)?;

    let new_identity = NewIdentity {
        email: request.email,
        phone_number: request.phone_number,
        first_name: request.first_name,
        last_name: request.last_name,
        auth_provider: provider,
    };

    let identity = state
        .service
        .register(new_identity, &request.password)
        .await?;
    let token = state.service.issue_token(&identity)?;

    let headers = auth_cookie_headers(&token, state.token_ttl_secs)?;

    Ok((
        StatusCode::CREATED,
        headers,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: Some(IdentityDto::from(identity)),
            token: Some(token),
        }),
    ))
}

/// POST /auth/login
///
/// Verify credentials, issue a token, and set the auth cookie
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(HeaderMap, Json<AuthResponse>)> {
    let identity = state
        .service
        .login(&request.email_or_phone, &request.password)
        .await?;
    let token = state.service.issue_token(&identity)?;

    let headers = auth_cookie_headers(&token, state.token_ttl_secs)?;

    Ok((
        headers,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: Some(IdentityDto::from(identity)),
            token: Some(token),
        }),
    ))
}

/// POST /auth/logout
///
/// Clear the auth cookie. Tokens are stateless bearer credentials, so there
/// is no server-side session to invalidate.
pub async fn logout() -> ApiResult<(HeaderMap, Json<AuthResponse>)> {
    let headers = auth_cookie_headers("", 0)?;

    Ok((
        headers,
        Json(AuthResponse {
            message: "Logged out successfully".to_string(),
            user: None,
            token: None,
        }),
    ))
}

/// GET /auth/user
///
/// Resolve the identity the presented token belongs to
pub async fn current_user(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Json<IdentityDto>> {
    let identity = state.service.resolve_current_user(&token).await?;

    Ok(Json(IdentityDto::from(identity)))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_auth_provider(value: &str) -> ApiResult<AuthProvider> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Auth provider is required".to_string(),
            field: Some("authProvider".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    AuthProvider::from_str(value).map_err(|_| ApiError::Validation {
        message: format!("Unknown auth provider: {value}"),
        field: Some("authProvider".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Build the `Set-Cookie` header for the auth token. `max_age_secs` of 0
/// clears the cookie. The Secure attribute is left to the TLS-terminating
/// proxy in front of this service.
#[track_caller]
fn auth_cookie_headers(token: &str, max_age_secs: i64) -> ApiResult<HeaderMap> {
    let cookie =
        format!("{AUTH_COOKIE}={token}; HttpOnly; Path=/; Max-Age={max_age_secs}; SameSite=Lax");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        cookie.parse().map_err(|_| ApiError::Internal {
            message: "Failed to build auth cookie".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    );

    Ok(headers)
}
