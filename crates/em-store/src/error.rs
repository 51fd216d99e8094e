use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Identifier already registered: {identifier} {location}")]
    DuplicateIdentifier {
        identifier: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
