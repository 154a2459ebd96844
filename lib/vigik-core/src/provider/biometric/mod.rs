use thiserror::Error;

#[derive(Debug, Error)]
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

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BiometricAvailability {
    Available,
    NoHardware,
    HardwareUnavailable,
    NoneEnrolled,
    SecurityUpdateRequired,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BiometricPrompt {
    pub title: String,
    pub subtitle: Option<String>,
    pub negative_button: String,
}

/// Biometric authentication backed by a keystore key
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait BiometricKeystore: Send + Sync {
    async fn can_authenticate(&self) -> BiometricAvailability;

    /// Shows the system prompt, `Ok(false)` when the biometric was not recognised
    async fn authenticate(&self, prompt: BiometricPrompt) -> Result<bool, BiometricError>;
}
