use thiserror::Error;

pub mod apdu;
pub mod bridge;
pub mod hce;


#[derive(Debug, Error)]
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
