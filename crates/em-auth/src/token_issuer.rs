use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Issues signed session tokens (HS256, symmetric secret).
///
/// Issuance is stateless: nothing is persisted, and any validly signed,
/// unexpired token is accepted by the validator. There is no revocation
/// list; logout is the client discarding its token.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a token for the given identity id.
    #[track_caller]
    pub fn issue(&self, subject: i64) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject,
            exp: now + self.ttl_secs,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
