use crate::{CredentialStore, IdentityRecord, Result as StoreErrorResult, StoreError};

use em_core::{Identity, NewIdentity};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use tokio::sync::RwLock;

/// In-memory credential store, the stand-in for a durable backend.
///
/// Records live in a map keyed by login identifier. The id counter sits in
/// the same lock-protected state, so check-and-insert is a single write
/// critical section: two concurrent registrations with the same identifier
/// cannot both succeed.
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<StoreInner>>,
}

struct StoreInner {
    records: HashMap<String, IdentityRecord>,
    next_id: i64,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                records: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryCredentialStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn insert(
        &self,
        new_identity: NewIdentity,
        password_hash: String,
    ) -> StoreErrorResult<Identity> {
        let identifier = new_identity.identifier().unwrap_or_default().to_string();

        let mut inner = self.inner.write().await;

        if inner.records.contains_key(&identifier) {
            return Err(StoreError::DuplicateIdentifier {
                identifier,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let identity = new_identity.into_identity(id);
        inner.records.insert(
            identifier,
            IdentityRecord {
                identity: identity.clone(),
                password_hash,
            },
        );

        debug!("stored identity {id} ({} total)", inner.records.len());
        Ok(identity)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> StoreErrorResult<Option<IdentityRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(identifier).cloned())
    }

    async fn find_by_id(&self, id: i64) -> StoreErrorResult<Option<Identity>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .values()
            .find(|record| record.identity.id == id)
            .map(|record| record.identity.clone()))
    }

    async fn exists(&self, identifier: &str) -> StoreErrorResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.records.contains_key(identifier))
    }
}
