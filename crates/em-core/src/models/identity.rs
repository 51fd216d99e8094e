use crate::models::auth_provider::AuthProvider;

use serde::{Deserialize, Serialize};

/// A registered user profile. The password hash is deliberately NOT part of
/// this type; it never leaves the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: i64,

    // Login identifier: email when present, else phone number
    pub email: Option<String>,
    pub phone_number: Option<String>,

    // Profile
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub auth_provider: AuthProvider,

    // Verification
    pub is_email_verified: bool,
    pub is_phone_verified: bool,

    // Marketplace counters, zeroed at registration
    pub total_points: i32,
    pub total_co2_saved: f64,

    pub company_id: Option<i64>,
}

impl Identity {
    /// The login identifier this identity is keyed by.
    pub fn identifier(&self) -> &str {
        self.email
            .as_deref()
            .or(self.phone_number.as_deref())
            .unwrap_or_default()
    }
}
