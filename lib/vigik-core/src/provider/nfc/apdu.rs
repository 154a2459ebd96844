//! ISO 7816-4 command classification for host-card emulation
//!
//! Only the SELECT FILE header is recognised; every command gets a single status word
//! and nothing is remembered between commands.

/// `CLA INS P1 P2` of SELECT FILE by name
pub const SELECT_FILE_HEADER: [u8; 4] = [0x00, 0xA4, 0x04, 0x00];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusWord {
    /// `90 00`
    CommandCorrect,
    /// `6D 00`
    InstructionNotSupported,
    /// `00 00`, returned when the platform delivers no command at all
    UnknownCommand,
}

impl StatusWord {
    pub const fn bytes(self) -> [u8; 2] {
        match self {
            Self::CommandCorrect => [0x90, 0x00],
            Self::InstructionNotSupported => [0x6D, 0x00],
            Self::UnknownCommand => [0x00, 0x00],
        }
    }
}

impl From<StatusWord> for Vec<u8> {
    fn from(value: StatusWord) -> Self {
        value.bytes().to_vec()
    }
}

pub fn process_command_apdu(command: Option<&[u8]>) -> StatusWord {
    match command {
        None => StatusWord::UnknownCommand,
        Some(command) if command.starts_with(&SELECT_FILE_HEADER) => StatusWord::CommandCorrect,
        Some(_) => StatusWord::InstructionNotSupported,
    }
}

/// Decides the response APDU for a received command
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ApduResponder: Send + Sync {
    fn respond(&self, command: Option<Vec<u8>>) -> Vec<u8>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SelectFileResponder;

impl ApduResponder for SelectFileResponder {
    fn respond(&self, command: Option<Vec<u8>>) -> Vec<u8> {
        process_command_apdu(command.as_deref()).into()
    }
}
