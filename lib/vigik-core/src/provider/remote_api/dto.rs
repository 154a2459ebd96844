use serde::Deserialize;

use crate::model::gallery::GalleryImage;
use crate::model::tracker::EventTimers;

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GalleryImageDTO {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

impl From<GalleryImageDTO> for GalleryImage {
    fn from(value: GalleryImageDTO) -> Self {
        Self {
            id: value.id,
            author: value.author,
            width: value.width,
            height: value.height,
            url: value.url,
            download_url: value.download_url,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct RecentEventsDTO {
    pub boss: Option<BossEventDTO>,
    pub helltide: Option<TimedEventDTO>,
    pub legion: Option<TimedEventDTO>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct BossEventDTO {
    pub name: Option<String>,
    pub expected: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct TimedEventDTO {
    pub timestamp: Option<i64>,
}

impl From<RecentEventsDTO> for EventTimers {
    fn from(value: RecentEventsDTO) -> Self {
        let (boss_name, boss_time) = value
            .boss
            .map(|boss| (boss.name, boss.expected))
            .unwrap_or_default();

        Self {
            boss_name,
            boss_time,
            helltide_time: value.helltide.and_then(|event| event.timestamp),
            legion_time: value.legion.and_then(|event| event.timestamp),
        }
    }
}
