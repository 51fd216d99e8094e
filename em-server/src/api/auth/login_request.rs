use serde::Deserialize;

/// Login payload (camelCase, matching the original web client)
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_phone: String,
    pub password: String,
}
