use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::DbBackend;

use crate::informational_key;

pub fn create(backend: DbBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table
        .table(Artists::Table)
        .if_not_exists()
        .col(string(Artists::ArtistId))
        .col(string_null(Artists::Name))
        .col(string_null(Artists::Location))
        .col(decimal_null(Artists::Latitude))
        .col(decimal_null(Artists::Longitude));
    informational_key(&mut table, backend, Artists::ArtistId);

    table
}

#[derive(DeriveIden)]
pub enum Artists {
    Table,
    ArtistId,
    Name,
    Location,
    Latitude,
    Longitude,
}
