use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::DbBackend;

use crate::informational_key;

pub fn create(backend: DbBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table
        .table(Songs::Table)
        .if_not_exists()
        .col(string(Songs::SongId))
        .col(text_null(Songs::Title))
        .col(text_null(Songs::ArtistId))
        .col(integer_null(Songs::Year))
        .col(decimal_null(Songs::Duration));
    informational_key(&mut table, backend, Songs::SongId);

    table
}

#[derive(DeriveIden)]
pub enum Songs {
    Table,
    SongId,
    Title,
    ArtistId,
    Year,
    Duration,
}
