//! Raw song metadata, one row per song record.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

use crate::column::{staging_table, ColumnKind, StagingColumn};

pub const TABLE: &str = "staging_songs";

pub const COLUMNS: &[StagingColumn] = &[
    StagingColumn::new("num_songs", ColumnKind::Integer),
    StagingColumn::new("artist_id", ColumnKind::Text),
    StagingColumn::new("artist_name", ColumnKind::VarcharMax),
    StagingColumn::new("artist_latitude", ColumnKind::Numeric),
    StagingColumn::new("artist_longitude", ColumnKind::Numeric),
    StagingColumn::new("artist_location", ColumnKind::Text),
    StagingColumn::new("song_id", ColumnKind::Text),
    StagingColumn::new("title", ColumnKind::Text),
    StagingColumn::new("duration", ColumnKind::Numeric),
    StagingColumn::new("year", ColumnKind::Integer),
];

/// Unlike every other table this one is created without `IF NOT EXISTS`, so a second
/// create without a drop in between fails.
pub fn create(backend: DbBackend) -> TableCreateStatement {
    staging_table(TABLE, COLUMNS, backend)
}
