use thiserror::Error;
use vigik_core::config::ConfigParsingError;
use vigik_core::provider::{biometric, bluetooth, location, nfc};
use vigik_core::repository::error::DataLayerError;
use vigik_core::service::error::ServiceError;

#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum BindingError {
    #[error("Already exists: `{0}`")]
    AlreadyExists(String),
    #[error("Database error: `{0}`")]
    DbErr(String),
    #[error("Not found: `{0}`")]
    NotFound(String),
    #[error("Validation error: `{0}`")]
    ValidationError(String),
    #[error("Config validation error: `{0}`")]
    ConfigValidationError(String),
    #[error("Platform error: `{0}`")]
    PlatformError(String),
    #[error("Core uninitialized")]
    Uninitialized,
    #[error("IO error: `{0}`")]
    IOError(String),
    #[error("Unknown error: `{0}`")]
    Unknown(String),
}

impl From<ServiceError> for BindingError {
    fn from(error: ServiceError) -> Self {
        match &error {
            ServiceError::EntityNotFound(_) => Self::NotFound(error.to_string()),
            ServiceError::EntityAlreadyExists(_) => Self::AlreadyExists(error.to_string()),
            ServiceError::Repository(DataLayerError::Db(_)) => Self::DbErr(error.to_string()),
            ServiceError::ConfigValidationError(_) => {
                Self::ConfigValidationError(error.to_string())
            }
            ServiceError::Nfc(_) => Self::PlatformError(error.to_string()),
            ServiceError::HttpClient(_) | ServiceError::Repository(_) => {
                Self::Unknown(error.to_string())
            }
        }
    }
}

impl From<ConfigParsingError> for BindingError {
    fn from(error: ConfigParsingError) -> Self {
        Self::ConfigValidationError(error.to_string())
    }
}

impl From<std::io::Error> for BindingError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error.to_string())
    }
}

#[derive(Debug, Error, uniffi::Error)]
pub enum NfcError {
    #[error("NFC adapter not enabled")]
    NotEnabled,
    #[error("NFC not supported")]
    NotSupported,
    #[error("NFC session closed")]
    SessionClosed,
    #[error("NFC operation cancelled")]
    Cancelled,
    #[error("Unknown NFC error: {reason}")]
    Unknown { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for NfcError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Unknown {
            reason: e.to_string(),
        }
    }
}

impl From<NfcError> for nfc::NfcError {
    fn from(error: NfcError) -> Self {
        match error {
            NfcError::NotEnabled => Self::NotEnabled,
            NfcError::NotSupported => Self::NotSupported,
            NfcError::SessionClosed => Self::SessionClosed,
            NfcError::Cancelled => Self::Cancelled,
            NfcError::Unknown { reason } => Self::Unknown { reason },
        }
    }
}

#[derive(Debug, Error, uniffi::Error)]
pub enum BluetoothError {
    #[error("The device does not support Bluetooth")]
    NotSupported,
    #[error("Application not authorized to use Bluetooth")]
    NotAuthorized,
    #[error("Unknown Bluetooth error: {reason}")]
    Unknown { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for BluetoothError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Unknown {
            reason: e.to_string(),
        }
    }
}

impl From<BluetoothError> for bluetooth::BluetoothError {
    fn from(error: BluetoothError) -> Self {
        match error {
            BluetoothError::NotSupported => Self::NotSupported,
            BluetoothError::NotAuthorized => Self::NotAuthorized,
            BluetoothError::Unknown { reason } => Self::Unknown { reason },
        }
    }
}

#[derive(Debug, Error, uniffi::Error)]
pub enum LocationError {
    #[error("Application not authorized to use location")]
    NotAuthorized,
    #[error("Unknown location error: {reason}")]
    Unknown { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for LocationError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Unknown {
            reason: e.to_string(),
        }
    }
}

impl From<LocationError> for location::LocationError {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::NotAuthorized => Self::NotAuthorized,
            LocationError::Unknown { reason } => Self::Unknown { reason },
        }
    }
}

#[derive(Debug, Error, uniffi::Error)]
pub enum BiometricError {
    #[error("Authentication cancelled by user")]
    Cancelled,
    #[error("Too many attempts, biometric authentication locked")]
    Lockout,
    #[error("Keystore key invalidated")]
    KeyInvalidated,
    #[error("Unknown biometric error: {reason}")]
    Unknown { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for BiometricError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Unknown {
            reason: e.to_string(),
        }
    }
}

impl From<BiometricError> for biometric::BiometricError {
    fn from(error: BiometricError) -> Self {
        match error {
            BiometricError::Cancelled => Self::Cancelled,
            BiometricError::Lockout => Self::Lockout,
            BiometricError::KeyInvalidated => Self::KeyInvalidated,
            BiometricError::Unknown { reason } => Self::Unknown { reason },
        }
    }
}
