use super::error::DataLayerError;
use crate::model::tag::{Tag, TagConflictPolicy, TagTimestamp};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TagRepository: Send + Sync {
    /// Stores a new tag
    ///
    /// An existing row with the same timestamp is overwritten with [`TagConflictPolicy::Replace`],
    /// or reported as [`DataLayerError::AlreadyExists`] with [`TagConflictPolicy::Reject`]
    async fn create(
        &self,
        request: Tag,
        policy: TagConflictPolicy,
    ) -> Result<TagTimestamp, DataLayerError>;

    /// Overwrites the row with the same timestamp, returns the number of affected rows
    async fn update(&self, request: Tag) -> Result<u64, DataLayerError>;

    /// Returns the number of deleted rows
    async fn delete(&self, timestamp: TagTimestamp) -> Result<u64, DataLayerError>;

    async fn get(&self, timestamp: TagTimestamp) -> Result<Option<Tag>, DataLayerError>;

    /// All stored tags, oldest first
    async fn get_all(&self) -> Result<Vec<Tag>, DataLayerError>;
}
