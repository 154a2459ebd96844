use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tag::Timestamp)
                            .epoch_millis()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tag::Uid).large_blob(manager).not_null())
                    .col(ColumnDef::new(Tag::TechList).text().not_null())
                    .col(ColumnDef::new(Tag::Data).text().not_null())
                    .col(ColumnDef::new(Tag::Id).large_blob(manager).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Tag {
    Table,
    Timestamp,
    Uid,
    TechList,
    Data,
    Id,
}
