use schema::{SchemaManager, WarehouseTable};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{dialect::Dialect, error::Error};

pub struct SchemaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchemaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Drop and recreate all seven tables.
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists and is empty
    /// - `Err(Error::UnsupportedBackend)` - The backend has no SQL dialect
    /// - `Err(Error::Statement)` - A statement failed; earlier statements stay committed
    pub async fn recreate_tables(&self) -> Result<(), Error> {
        self.drop_tables().await?;
        self.create_tables().await
    }

    /// Drop every table that exists, staging tables first.
    pub async fn drop_tables(&self) -> Result<(), Error> {
        Dialect::of(self.db)?;

        for table in WarehouseTable::ALL {
            tracing::debug!(table = table.name(), "Dropping table");

            let txn = self.db.begin().await?;
            SchemaManager::new(&txn)
                .drop_table(table.drop())
                .await
                .map_err(|e| Error::statement(format!("drop table {}", table.name()), e))?;
            txn.commit().await?;
        }

        Ok(())
    }

    /// Create every table, staging tables first.
    ///
    /// `staging_songs` has no existence guard, so this fails if it was not dropped first.
    pub async fn create_tables(&self) -> Result<(), Error> {
        Dialect::of(self.db)?;
        let backend = self.db.get_database_backend();

        for table in WarehouseTable::ALL {
            tracing::debug!(table = table.name(), "Creating table");

            let txn = self.db.begin().await?;
            SchemaManager::new(&txn)
                .create_table(table.create(backend))
                .await
                .map_err(|e| Error::statement(format!("create table {}", table.name()), e))?;
            txn.commit().await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
