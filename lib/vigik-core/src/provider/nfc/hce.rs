use super::NfcError;

/// Provider of NFC host-card emulation (HCE)
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait NfcHce: Send + Sync {
    async fn is_supported(&self) -> Result<bool, NfcError>;
    async fn is_enabled(&self) -> Result<bool, NfcError>;
}

/// Channel back to the emulation service, which forwards the bytes to the reader
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ApduTransport: Send + Sync {
    fn send_response_apdu(&self, response: Vec<u8>) -> Result<(), NfcError>;
}

/// Receives the events of the platform emulation service
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait NfcHceHandler: Send + Sync {
    /// `None` when the platform delivered no command bytes
    fn handle_command(&self, apdu: Option<Vec<u8>>);
    fn on_deactivated(&self, reason: DeactivationReason);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeactivationReason {
    LinkLoss,
    Deselected,
    Other(i32),
}

impl From<i32> for DeactivationReason {
    fn from(value: i32) -> Self {
        // HostApduService.DEACTIVATION_* constants
        match value {
            0 => Self::LinkLoss,
            1 => Self::Deselected,
            other => Self::Other(other),
        }
    }
}
