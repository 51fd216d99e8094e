use em_core::Identity;

use serde::Serialize;

/// User DTO for JSON serialization (camelCase, matching the original web
/// client). Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub id: i64,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub auth_provider: String,
    pub is_email_verified: bool,
    pub is_phone_verified: bool,
    pub total_points: i32,
    pub total_co2_saved: f64,
    pub company_id: Option<i64>,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            phone_number: identity.phone_number,
            first_name: identity.first_name,
            last_name: identity.last_name,
            profile_image_url: identity.profile_image_url,
            auth_provider: identity.auth_provider.as_str().to_string(),
            is_email_verified: identity.is_email_verified,
            is_phone_verified: identity.is_phone_verified,
            total_points: identity.total_points,
            total_co2_saved: identity.total_co2_saved,
            company_id: identity.company_id,
        }
    }
}
