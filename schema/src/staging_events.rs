//! Raw event log records, one row per user action.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

use crate::column::{staging_table, ColumnKind, StagingColumn};

pub const TABLE: &str = "staging_events";

/// Columns in JSONPaths order.
pub const COLUMNS: &[StagingColumn] = &[
    StagingColumn::new("artist", ColumnKind::Varchar),
    StagingColumn::new("auth", ColumnKind::Varchar),
    StagingColumn::new("firstname", ColumnKind::Varchar),
    StagingColumn::new("gender", ColumnKind::Varchar),
    StagingColumn::new("iteminsession", ColumnKind::Integer),
    StagingColumn::new("lastname", ColumnKind::Varchar),
    StagingColumn::new("length", ColumnKind::Float),
    StagingColumn::new("level", ColumnKind::Varchar),
    StagingColumn::new("location", ColumnKind::Varchar),
    StagingColumn::new("method", ColumnKind::Varchar),
    StagingColumn::new("page", ColumnKind::Varchar),
    StagingColumn::new("registration", ColumnKind::Varchar),
    StagingColumn::new("sessionid", ColumnKind::Integer),
    StagingColumn::new("song", ColumnKind::Varchar),
    StagingColumn::new("status", ColumnKind::Integer),
    StagingColumn::new("ts", ColumnKind::BigInteger),
    StagingColumn::new("useragent", ColumnKind::Varchar),
    StagingColumn::new("userid", ColumnKind::Integer),
];

pub fn create(backend: DbBackend) -> TableCreateStatement {
    staging_table(TABLE, COLUMNS, backend)
        .if_not_exists()
        .to_owned()
}
