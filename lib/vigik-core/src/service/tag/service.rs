use tokio::sync::watch;

use super::TagService;
use super::mapper::scanned_tag_to_tag;
use crate::model::tag::{ScannedTag, Tag, TagTimestamp};
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityAlreadyExistsError, EntityNotFoundError, ServiceError};
use crate::util::clock::now_millis;

impl TagService {
    /// Stores a tag using the configured conflict policy
    ///
    /// # Arguments
    ///
    /// * `tag` - tag to store, keyed by its timestamp
    pub async fn insert(&self, tag: Tag) -> Result<TagTimestamp, ServiceError> {
        let timestamp = tag.timestamp;
        let result = self
            .tag_repository
            .create(tag, self.conflict_policy)
            .await;

        let timestamp = match result {
            Ok(timestamp) => timestamp,
            Err(DataLayerError::AlreadyExists) => {
                return Err(EntityAlreadyExistsError::Tag(timestamp).into());
            }
            Err(error) => return Err(error.into()),
        };

        tracing::info!("Stored tag {timestamp}");
        self.publish().await;
        Ok(timestamp)
    }

    /// Overwrites the stored tag with the same timestamp, returns the number of updated rows
    pub async fn update(&self, tag: Tag) -> Result<u64, ServiceError> {
        let timestamp = tag.timestamp;
        let updated = self.tag_repository.update(tag).await?;

        tracing::info!("Updated tag {timestamp}, {updated} row(s) affected");
        self.publish().await;
        Ok(updated)
    }

    /// Removes a stored tag, returns the number of deleted rows
    pub async fn delete(&self, timestamp: TagTimestamp) -> Result<u64, ServiceError> {
        let deleted = self.tag_repository.delete(timestamp).await?;
        if deleted == 0 {
            return Err(EntityNotFoundError::Tag(timestamp).into());
        }

        tracing::info!("Deleted tag {timestamp}");
        self.publish().await;
        Ok(deleted)
    }

    pub async fn get_tag(&self, timestamp: TagTimestamp) -> Result<Tag, ServiceError> {
        let Some(tag) = self.tag_repository.get(timestamp).await? else {
            return Err(EntityNotFoundError::Tag(timestamp).into());
        };

        Ok(tag)
    }

    /// All stored tags, oldest first
    pub async fn get_all_tags(&self) -> Result<Vec<Tag>, ServiceError> {
        Ok(self.tag_repository.get_all().await?)
    }

    /// Decodes an NFC read event and stores it, timestamped now
    pub async fn save_scanned_tag(&self, scanned: ScannedTag) -> Result<Tag, ServiceError> {
        let tag = scanned_tag_to_tag(scanned, now_millis());
        self.insert(tag.clone()).await?;
        Ok(tag)
    }

    /// Receiver of the full table, updated after every successful mutation
    ///
    /// The current table is loaded before the receiver is handed out.
    pub async fn subscribe(&self) -> Result<watch::Receiver<Vec<Tag>>, ServiceError> {
        let _guard = self.publish_lock.lock().await;
        let tags = self.tag_repository.get_all().await?;
        self.send(tags);

        Ok(self.tags.subscribe())
    }

    async fn publish(&self) {
        let _guard = self.publish_lock.lock().await;
        match self.tag_repository.get_all().await {
            Ok(tags) => self.send(tags),
            Err(error) => tracing::warn!("Failed to publish stored tags: {error}"),
        }
    }

    fn send(&self, tags: Vec<Tag>) {
        self.tags.send_if_modified(|current| {
            if *current == tags {
                return false;
            }
            *current = tags;
            true
        });
    }
}
