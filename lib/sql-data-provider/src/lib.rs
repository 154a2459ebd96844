#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use tag::TagProvider;
use vigik_core::repository::DataRepository;
use vigik_core::repository::tag_repository::TagRepository;

mod entity;
mod mapper;
pub mod tag;

#[cfg(test)]
mod test_utilities;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    tag_repository: Arc<dyn TagRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            tag_repository: Arc::new(TagProvider { db: db.clone() }),
            db,
        }
    }
}

/// Opens the database and brings its schema up to date
pub async fn db_conn(
    database_url: impl Into<ConnectOptions>,
) -> Result<DatabaseConnection, DbErr> {
    let db = sea_orm::Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    tracing::debug!("Database migrated");

    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_tag_repository(&self) -> Arc<dyn TagRepository> {
        self.tag_repository.clone()
    }
}
