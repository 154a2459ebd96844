pub mod biometric;
pub mod bluetooth;
pub mod http_client;
pub mod location;
pub mod nfc;
pub mod remote_api;
