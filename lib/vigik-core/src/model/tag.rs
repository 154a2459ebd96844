use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Creation instant in milliseconds since the Unix epoch, used as the natural key
pub type TagTimestamp = i64;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag {
    pub timestamp: TagTimestamp,
    pub uid: Vec<u8>,
    pub tech_list: String,
    pub data: String,
    pub id: Vec<u8>,
}

/// What happens when a tag is inserted with a timestamp that is already stored
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TagConflictPolicy {
    #[default]
    Replace,
    Reject,
}

/// Raw NFC read event, as delivered by the platform adapter
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScannedTag {
    pub uid: Vec<u8>,
    /// fully qualified technology class names, e.g. `android.nfc.tech.NfcA`
    pub tech_list: Vec<String>,
    pub ndef_records: Vec<NdefRecord>,
    pub id: Vec<u8>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NdefRecord {
    pub tnf: u8,
    pub r#type: Vec<u8>,
    pub payload: Vec<u8>,
}
