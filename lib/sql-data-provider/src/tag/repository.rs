use one_dto_mapper::convert_inner;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use vigik_core::model::tag::{Tag, TagConflictPolicy, TagTimestamp};
use vigik_core::repository::error::DataLayerError;
use vigik_core::repository::tag_repository::TagRepository;

use super::TagProvider;
use crate::entity::tag;
use crate::mapper::to_data_layer_error;

#[async_trait::async_trait]
impl TagRepository for TagProvider {
    async fn create(
        &self,
        request: Tag,
        policy: TagConflictPolicy,
    ) -> Result<TagTimestamp, DataLayerError> {
        let timestamp = request.timestamp;
        let insert = tag::Entity::insert(tag::ActiveModel::from(request));

        let insert = match policy {
            TagConflictPolicy::Replace => insert.on_conflict(
                OnConflict::column(tag::Column::Timestamp)
                    .update_columns([
                        tag::Column::Uid,
                        tag::Column::TechList,
                        tag::Column::Data,
                        tag::Column::Id,
                    ])
                    .to_owned(),
            ),
            TagConflictPolicy::Reject => insert,
        };

        insert
            .exec_without_returning(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(timestamp)
    }

    async fn update(&self, request: Tag) -> Result<u64, DataLayerError> {
        let timestamp = request.timestamp;
        let result = tag::Entity::update_many()
            .set(tag::ActiveModel::from(request))
            .filter(tag::Column::Timestamp.eq(timestamp))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, timestamp: TagTimestamp) -> Result<u64, DataLayerError> {
        let result = tag::Entity::delete_by_id(timestamp)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.rows_affected)
    }

    async fn get(&self, timestamp: TagTimestamp) -> Result<Option<Tag>, DataLayerError> {
        let tag = tag::Entity::find_by_id(timestamp)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(tag))
    }

    async fn get_all(&self) -> Result<Vec<Tag>, DataLayerError> {
        let tags: Vec<tag::Model> = tag::Entity::find()
            .order_by_asc(tag::Column::Timestamp)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(tags))
    }
}
