use em_auth::AuthService;

use std::sync::Arc;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AuthService>,
    /// Auth cookie lifetime mirrors the token TTL
    pub token_ttl_secs: i64,
}
