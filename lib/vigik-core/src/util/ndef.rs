//! Rendering of NFC read events into the textual form stored with a tag

use itertools::Itertools;

use crate::model::tag::NdefRecord;

pub const TNF_WELL_KNOWN: u8 = 0x01;
pub const TNF_ABSOLUTE_URI: u8 = 0x03;

pub const RTD_TEXT: &[u8] = b"T";
pub const RTD_URI: &[u8] = b"U";

/// NFC Forum URI record identifier codes
const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

const TEXT_UTF16_FLAG: u8 = 0x80;
const TEXT_LANGUAGE_LENGTH_MASK: u8 = 0x3F;

/// `android.nfc.tech.NfcA`, `android.nfc.tech.Ndef` -> `NfcA, Ndef`
pub fn tech_list_summary(tech_list: &[String]) -> String {
    tech_list
        .iter()
        .map(|tech| tech.rsplit('.').next().unwrap_or(tech))
        .join(", ")
}

pub fn records_to_text(records: &[NdefRecord]) -> String {
    records.iter().map(record_to_text).join("\n")
}

pub fn record_to_text(record: &NdefRecord) -> String {
    let decoded = match (record.tnf, record.r#type.as_slice()) {
        (TNF_WELL_KNOWN, RTD_TEXT) => decode_text(&record.payload),
        (TNF_WELL_KNOWN, RTD_URI) => decode_uri(&record.payload),
        (TNF_ABSOLUTE_URI, _) => String::from_utf8(record.r#type.clone()).ok(),
        _ => None,
    };

    decoded.unwrap_or_else(|| hex::encode(&record.payload))
}

fn decode_text(payload: &[u8]) -> Option<String> {
    let (status, rest) = payload.split_first()?;
    let language_length = (status & TEXT_LANGUAGE_LENGTH_MASK) as usize;
    let text = rest.get(language_length..)?;

    if status & TEXT_UTF16_FLAG == 0 {
        return String::from_utf8(text.to_vec()).ok();
    }

    let (little_endian, text) = match text {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, text),
    };
    if text.len() % 2 != 0 {
        return None;
    }

    let units = text
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if little_endian {
                u16::from_le_bytes(pair)
            } else {
                u16::from_be_bytes(pair)
            }
        })
        .collect::<Vec<_>>();

    String::from_utf16(&units).ok()
}

fn decode_uri(payload: &[u8]) -> Option<String> {
    let (code, rest) = payload.split_first()?;
    let prefix = URI_PREFIXES.get(*code as usize)?;
    let rest = std::str::from_utf8(rest).ok()?;

    Some(format!("{prefix}{rest}"))
}
