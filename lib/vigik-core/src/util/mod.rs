pub mod clock;
pub mod ndef;
