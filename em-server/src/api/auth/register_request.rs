use serde::Deserialize;

/// Registration payload (camelCase, matching the original web client).
/// Fields default to empty so missing values fail domain validation with a
/// 400 rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub auth_provider: String,
}
