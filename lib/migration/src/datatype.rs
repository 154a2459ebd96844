use sea_orm_migration::prelude::*;

pub trait ColumnDefExt {
    fn large_blob<T: HasDatabaseBackend>(&mut self, manager: &T) -> &mut ColumnDef;
    fn epoch_millis(&mut self) -> &mut ColumnDef;
}

impl ColumnDefExt for ColumnDef {
    fn large_blob<T: HasDatabaseBackend>(&mut self, manager: &T) -> &mut ColumnDef {
        self.blob();

        if matches!(manager.backend(), sea_orm::DatabaseBackend::MySql) {
            self.custom(Alias::new("longblob"));
        }

        self
    }

    // tag keys are stored as plain milliseconds, not as a datetime column
    fn epoch_millis(&mut self) -> &mut ColumnDef {
        self.big_integer()
    }
}

pub(super) trait HasDatabaseBackend {
    fn backend(&self) -> sea_orm::DatabaseBackend;
}

impl HasDatabaseBackend for SchemaManager<'_> {
    fn backend(&self) -> sea_orm::DatabaseBackend {
        self.get_database_backend()
    }
}
