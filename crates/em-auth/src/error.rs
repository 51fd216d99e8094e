use em_core::CoreError;
use em_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User already exists: {identifier} {location}")]
    AlreadyExists {
        identifier: String,
        location: ErrorLocation,
    },

    /// Unknown identifier and wrong password both map here; callers must not
    /// be able to tell the two apart.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Unauthenticated {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => AuthError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidAuthProvider { value, .. } => AuthError::Validation {
                message: format!("Unknown auth provider: {value}"),
                field: Some("authProvider".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateIdentifier { identifier, .. } => AuthError::AlreadyExists {
                identifier,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
