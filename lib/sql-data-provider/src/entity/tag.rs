use one_dto_mapper::Into;
use sea_orm::entity::prelude::*;
use vigik_core::model::tag::Tag;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Tag)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub timestamp: i64,
    pub uid: Vec<u8>,
    pub tech_list: String,
    pub data: String,
    pub id: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
