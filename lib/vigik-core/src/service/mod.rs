pub mod device_state;
pub mod error;
pub mod gallery;
pub mod login;
pub mod nfc;
pub mod tag;
pub mod tracker;
