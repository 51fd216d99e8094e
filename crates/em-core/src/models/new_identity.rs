use crate::models::auth_provider::AuthProvider;
use crate::models::identity::Identity;
use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Profile fields of a registration before the store has assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIdentity {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub auth_provider: AuthProvider,
}

impl NewIdentity {
    /// Login identifier the record will be stored under: email when present,
    /// else phone number.
    pub fn identifier(&self) -> Option<&str> {
        self.email
            .as_deref()
            .or(self.phone_number.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Validate profile fields before any credential work happens.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.identifier().is_none() {
            return Err(CoreError::validation(
                "Email or phone number is required",
                None,
            ));
        }

        if let Some(email) = self.email.as_deref()
            && !email.is_empty()
            && !is_email_shaped(email)
        {
            return Err(CoreError::validation("Invalid email format", Some("email")));
        }

        if self.first_name.trim().is_empty() {
            return Err(CoreError::validation(
                "First name is required",
                Some("firstName"),
            ));
        }

        if self.last_name.trim().is_empty() {
            return Err(CoreError::validation(
                "Last name is required",
                Some("lastName"),
            ));
        }

        Ok(())
    }

    /// Promote to a full `Identity` once the store has assigned an id.
    /// Verification flags start false and the marketplace counters at zero.
    /// Empty identifier strings normalize to absent.
    pub fn into_identity(self, id: i64) -> Identity {
        Identity {
            id,
            email: self.email.filter(|s| !s.is_empty()),
            phone_number: self.phone_number.filter(|s| !s.is_empty()),
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image_url: None,
            auth_provider: self.auth_provider,
            is_email_verified: false,
            is_phone_verified: false,
            total_points: 0,
            total_co2_saved: 0.0,
            company_id: None,
        }
    }
}

/// `local@domain` with a dotted, non-empty domain. Deliberately loose; real
/// deliverability is the mail provider's problem.
fn is_email_shaped(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
