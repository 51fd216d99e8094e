use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{Argon2, PasswordHasher as _, PasswordVerifier};
use error_location::ErrorLocation;
use password_hash::{PasswordHash, SaltString};

/// Salted adaptive one-way password hashing (Argon2id, PHC string output).
///
/// Every `hash` call draws a fresh random salt, so hashing the same
/// plaintext twice yields different strings that both verify. Cost
/// parameters are the argon2 defaults. Hashing takes tens of milliseconds
/// on purpose; callers run it on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password into a PHC string.
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let mut salt_bytes = [0u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let argon2 = Argon2::default();
        let phc = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        Ok(phc)
    }

    /// Verify a plaintext against a stored PHC string. Comparison is
    /// constant-time inside argon2; an unparseable hash verifies false.
    pub fn verify(&self, password: &str, phc: &str) -> bool {
        if let Ok(parsed) = PasswordHash::new(phc) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        } else {
            false
        }
    }
}
