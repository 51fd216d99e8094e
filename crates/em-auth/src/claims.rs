use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Claims carried by a session token. The subject is the identity's numeric
/// id, typed as such end-to-end; a token whose subject is missing or
/// non-numeric fails claim decoding, never an ad-hoc parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub <= 0 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub must be a positive identity id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
