pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::auth_provider::AuthProvider;
pub use models::identity::Identity;
pub use models::new_identity::{MIN_PASSWORD_LENGTH, NewIdentity};

#[cfg(test)]
mod tests;
