use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid auth provider: {value} {location}")]
    InvalidAuthProvider {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error, optionally tied to a single input field.
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
