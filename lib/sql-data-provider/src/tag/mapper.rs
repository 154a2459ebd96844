use sea_orm::Set;
use vigik_core::model::tag::Tag;

use crate::entity::tag;

impl From<Tag> for tag::ActiveModel {
    fn from(value: Tag) -> Self {
        Self {
            timestamp: Set(value.timestamp),
            uid: Set(value.uid),
            tech_list: Set(value.tech_list),
            data: Set(value.data),
            id: Set(value.id),
        }
    }
}
