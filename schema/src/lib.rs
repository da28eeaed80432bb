//! Table definitions for the Sparkify warehouse.
//!
//! Seven tables make up the warehouse: two staging tables landing raw JSON records,
//! the `songplays` fact table and four dimensions. Statements are built with sea-query
//! and rendered for the backend they run against, so the same definitions provision an
//! Amazon Redshift cluster and a local SQLite database.

pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::DbBackend;

pub mod artists;
pub mod column;
pub mod songplays;
pub mod songs;
pub mod staging_events;
pub mod staging_songs;
pub mod time;
pub mod users;

pub use column::{ColumnKind, StagingColumn};

#[cfg(test)]
mod tests;

/// One of the seven warehouse tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarehouseTable {
    StagingEvents,
    StagingSongs,
    Songplays,
    Users,
    Songs,
    Artists,
    Time,
}

impl WarehouseTable {
    /// All tables in the order they are dropped and created.
    pub const ALL: [WarehouseTable; 7] = [
        WarehouseTable::StagingEvents,
        WarehouseTable::StagingSongs,
        WarehouseTable::Songplays,
        WarehouseTable::Users,
        WarehouseTable::Songs,
        WarehouseTable::Artists,
        WarehouseTable::Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StagingEvents => staging_events::TABLE,
            Self::StagingSongs => staging_songs::TABLE,
            Self::Songplays => "songplays",
            Self::Users => "users",
            Self::Songs => "songs",
            Self::Artists => "artists",
            Self::Time => "time",
        }
    }

    /// Build the `CREATE TABLE` statement for this table on `backend`.
    pub fn create(&self, backend: DbBackend) -> TableCreateStatement {
        match self {
            Self::StagingEvents => staging_events::create(backend),
            Self::StagingSongs => staging_songs::create(backend),
            Self::Songplays => songplays::create(backend),
            Self::Users => users::create(backend),
            Self::Songs => songs::create(backend),
            Self::Artists => artists::create(backend),
            Self::Time => time::create(backend),
        }
    }

    /// Build the `DROP TABLE IF EXISTS` statement for this table.
    pub fn drop(&self) -> TableDropStatement {
        Table::drop()
            .table(Alias::new(self.name()))
            .if_exists()
            .to_owned()
    }
}

/// Declare `column` as the primary key where keys are informational only.
///
/// Redshift accepts primary keys but never enforces them, which the append-only dimension
/// loads rely on. SQLite would enforce them, so the key is left out there.
pub(crate) fn informational_key<C>(table: &mut TableCreateStatement, backend: DbBackend, column: C)
where
    C: IntoIndexColumn,
{
    if backend == DbBackend::Postgres {
        table.primary_key(Index::create().col(column));
    }
}
