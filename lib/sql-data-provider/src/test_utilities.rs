use sea_orm::{ActiveModelTrait, ConnectOptions, DatabaseConnection, DbErr};
use vigik_core::model::tag::Tag;

use crate::entity::tag;
use crate::{DataLayer, db_conn};

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let mut options = ConnectOptions::new(database_url);
    // every pooled connection to `sqlite::memory:` opens its own empty database
    options.max_connections(1);

    DataLayer::build(db_conn(options).await.unwrap())
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}

pub fn dummy_tag(timestamp: i64) -> Tag {
    Tag {
        timestamp,
        uid: vec![0x13, 0x37],
        tech_list: "NfcA, MifareUltralight, Ndef".to_string(),
        data: "https://vigik.test".to_string(),
        id: vec![0x04, 0x8E, 0x11],
    }
}

pub async fn insert_tag_to_database(db: &DatabaseConnection, tag: Tag) -> Result<i64, DbErr> {
    let model = tag::ActiveModel::from(tag).insert(db).await?;
    Ok(model.timestamp)
}
