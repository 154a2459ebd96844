use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Application not authorized to use location")]
    NotAuthorized,
    #[error("Unknown location error: {reason}")]
    Unknown { reason: String },
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    /// Whether any location provider is switched on
    async fn is_enabled(&self) -> Result<bool, LocationError>;
}
