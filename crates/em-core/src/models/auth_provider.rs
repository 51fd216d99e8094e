use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How an identity authenticates. Only local (password) credentials are
/// verified by this service; the tag is stored for the others.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "local" => Ok(Self::Local),
            "google" => Ok(Self::Google),
            _ => Err(CoreError::InvalidAuthProvider {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
