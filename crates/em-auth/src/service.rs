use crate::{
    AuthError, JwtValidator, PasswordHasher, Result as AuthErrorResult, TokenIssuer,
};

use em_core::{Identity, MIN_PASSWORD_LENGTH, NewIdentity};
use em_store::CredentialStore;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};

/// Orchestrates registration, login, token issuance, and identity
/// resolution over an injected credential store.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    validator: JwtValidator,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        issuer: TokenIssuer,
        validator: JwtValidator,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            validator,
        }
    }

    /// Register a new identity.
    ///
    /// The early `exists` check keeps the slow hashing work off the obvious
    /// duplicate path; the store's atomic check-and-insert is what actually
    /// guarantees uniqueness under concurrency.
    pub async fn register(
        &self,
        new_identity: NewIdentity,
        password: &str,
    ) -> AuthErrorResult<Identity> {
        new_identity.validate()?;
        validate_password(password)?;

        let identifier = new_identity.identifier().unwrap_or_default().to_string();
        if self.store.exists(&identifier).await? {
            return Err(AuthError::AlreadyExists {
                identifier,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_hash = self.hash_password(password).await?;
        let identity = self.store.insert(new_identity, password_hash).await?;

        info!(
            "registered identity {} via {}",
            identity.id,
            identity.auth_provider.as_str()
        );
        Ok(identity)
    }

    /// Verify credentials and return the matching identity.
    ///
    /// Unknown identifier and wrong password both fail with
    /// `InvalidCredentials`; nothing in the result distinguishes them.
    pub async fn login(&self, identifier: &str, password: &str) -> AuthErrorResult<Identity> {
        let Some(record) = self.store.find_by_identifier(identifier).await? else {
            warn!("login failed: unknown identifier");
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !self.verify_password(password, &record.password_hash).await? {
            warn!("login failed: wrong password for identity {}", record.identity.id);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("identity {} logged in", record.identity.id);
        Ok(record.identity)
    }

    /// Issue a session token bound to the identity's numeric id.
    pub fn issue_token(&self, identity: &Identity) -> AuthErrorResult<String> {
        self.issuer.issue(identity.id)
    }

    /// Resolve the identity a presented token belongs to.
    ///
    /// Any token failure, or a subject that no longer resolves, maps to
    /// `Unauthenticated`.
    pub async fn resolve_current_user(&self, token: &str) -> AuthErrorResult<Identity> {
        let claims = self.validator.validate(token).map_err(|e| {
            debug!("token rejected: {e}");
            AuthError::Unauthenticated {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        self.store
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AuthError::Unauthenticated {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Run the deliberately slow hash on the blocking pool.
    async fn hash_password(&self, password: &str) -> AuthErrorResult<String> {
        let hasher = self.hasher;
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hash {
                message: format!("hashing task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    async fn verify_password(&self, password: &str, phc: &str) -> AuthErrorResult<bool> {
        let hasher = self.hasher;
        let password = password.to_string();
        let phc = phc.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &phc))
            .await
            .map_err(|e| AuthError::Hash {
                message: format!("verification task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[track_caller]
fn validate_password(password: &str) -> AuthErrorResult<()> {
    if password.is_empty() {
        return Err(AuthError::Validation {
            message: "Password is required".to_string(),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::Validation {
            message: format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
