use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::model::tag::TagTimestamp;
use crate::provider::http_client;
use crate::provider::nfc::NfcError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),
    #[error("NFC error `{0}`")]
    Nfc(#[from] NfcError),
    #[error("HTTP client error `{0}`")]
    HttpClient(#[from] http_client::Error),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    EntityAlreadyExists(#[from] EntityAlreadyExistsError),
    #[error(transparent)]
    Repository(DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Tag `{0}` not found")]
    Tag(TagTimestamp),
}

#[derive(Debug, Error)]
pub enum EntityAlreadyExistsError {
    #[error("Tag `{0}` already exists")]
    Tag(TagTimestamp),
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        ServiceError::Repository(value)
    }
}
