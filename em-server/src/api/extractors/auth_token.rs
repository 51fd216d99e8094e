//! Axum extractors for REST API authentication

use crate::api::error::ApiError;
use crate::app_state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use error_location::ErrorLocation;

/// Name of the cookie the login/register handlers set
pub const AUTH_COOKIE: &str = "authToken";

/// Extracts the session token from the request
///
/// Checks the `Authorization: Bearer` header first. If not present, falls
/// back to the `authToken` cookie.
pub struct AuthToken(pub String);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            // Try Authorization header first
            #[allow(clippy::collapsible_if)]
            if let Some(value) = headers.get(header::AUTHORIZATION) {
                if let Ok(value) = value.to_str() {
                    if let Some(token) = value.strip_prefix("Bearer ") {
                        let token = token.trim();
                        if !token.is_empty() {
                            return Ok(AuthToken(token.to_string()));
                        }
                    }
                    log::warn!("Authorization header without a Bearer token");
                }
            }

            // Fall back to the auth cookie
            if let Some(value) = headers.get(header::COOKIE) {
                if let Ok(cookies) = value.to_str() {
                    if let Some(token) = cookie_value(cookies, AUTH_COOKIE) {
                        return Ok(AuthToken(token.to_string()));
                    }
                }
            }

            Err(ApiError::Unauthorized {
                message: "Missing authentication token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Find a value in a `Cookie` header (`name=value; other=value2`).
pub(crate) fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}
