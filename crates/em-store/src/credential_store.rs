use crate::{IdentityRecord, Result as StoreErrorResult};

use em_core::{Identity, NewIdentity};

use async_trait::async_trait;

/// Storage contract for identities and their credentials.
///
/// The store is the sole authority on identifier uniqueness: callers must
/// not rely on a separate exists-then-insert sequence for correctness.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new identity with its password hash, assigning the numeric
    /// id. The duplicate check and the insert are one atomic step; fails
    /// with `DuplicateIdentifier` when the login identifier is taken.
    async fn insert(
        &self,
        new_identity: NewIdentity,
        password_hash: String,
    ) -> StoreErrorResult<Identity>;

    /// Look up the full credential record by login identifier.
    async fn find_by_identifier(&self, identifier: &str)
    -> StoreErrorResult<Option<IdentityRecord>>;

    /// Look up an identity by its numeric id.
    async fn find_by_id(&self, id: i64) -> StoreErrorResult<Option<Identity>>;

    /// Whether an identity is registered under the given identifier.
    async fn exists(&self, identifier: &str) -> StoreErrorResult<bool>;
}
