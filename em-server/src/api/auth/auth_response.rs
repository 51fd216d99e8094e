use crate::api::auth::identity_dto::IdentityDto;

use serde::Serialize;

/// Response body for register/login/logout
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<IdentityDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
