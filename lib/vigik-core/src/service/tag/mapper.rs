use crate::model::tag::{ScannedTag, Tag, TagTimestamp};
use crate::util::ndef::{records_to_text, tech_list_summary};

pub(super) fn scanned_tag_to_tag(scanned: ScannedTag, timestamp: TagTimestamp) -> Tag {
    Tag {
        timestamp,
        tech_list: tech_list_summary(&scanned.tech_list),
        data: records_to_text(&scanned.ndef_records),
        uid: scanned.uid,
        id: scanned.id,
    }
}
