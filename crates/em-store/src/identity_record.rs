use em_core::Identity;

/// One credential record: an identity paired with the password hash it
/// authenticates with. The hash stays inside the store/hasher boundary;
/// this type intentionally does not serialize.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub identity: Identity,
    pub password_hash: String,
}
