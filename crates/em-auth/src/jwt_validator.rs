use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Validates session tokens against the server-held secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and return its claims. Fails on signature mismatch,
    /// elapsed expiry, or malformed structure.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
