use thiserror::Error;

#[derive(Debug, Error)]
pub enum BluetoothError {
    #[error("The device does not support Bluetooth")]
    NotSupported,
    #[error("Application not authorized to use Bluetooth")]
    NotAuthorized,
    #[error("Unknown Bluetooth error: {reason}")]
    Unknown { reason: String },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AdapterState {
    #[default]
    Off,
    TurningOn,
    On,
    TurningOff,
}

impl AdapterState {
    /// Maps `BluetoothAdapter.STATE_*` values
    pub fn from_platform(value: i32) -> Option<Self> {
        match value {
            10 => Some(Self::Off),
            11 => Some(Self::TurningOn),
            12 => Some(Self::On),
            13 => Some(Self::TurningOff),
            _ => None,
        }
    }
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait BluetoothAdapter: Send + Sync {
    async fn is_supported(&self) -> Result<bool, BluetoothError>;
    async fn state(&self) -> Result<AdapterState, BluetoothError>;
}
