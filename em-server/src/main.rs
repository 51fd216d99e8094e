mod api;
mod app_state;
mod error;
mod health;
mod logger;
mod routes;

#[cfg(test)]
mod tests;

use crate::app_state::AppState;
use crate::routes::build_router;

use em_auth::{AuthService, JwtValidator, PasswordHasher, TokenIssuer};
use em_store::MemoryCredentialStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = em_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = em_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting em-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let Some(ref secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };

    // In-memory store; a durable CredentialStore implementation slots in here
    let store = Arc::new(MemoryCredentialStore::new());
    warn!("Using in-memory credential store; identities do not survive restarts");

    let service = AuthService::new(
        store,
        PasswordHasher::new(),
        TokenIssuer::with_hs256(secret.as_bytes(), config.auth.token_ttl_secs),
        JwtValidator::with_hs256(secret.as_bytes()),
    );

    let app_state = AppState {
        service: Arc::new(service),
        token_ttl_secs: config.auth.token_ttl_secs,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
