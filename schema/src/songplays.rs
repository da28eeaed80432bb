//! Fact table, one row per song play matched against the song metadata.

use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::DbBackend;

pub fn create(backend: DbBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table.table(Songplays::Table).if_not_exists();

    match backend {
        DbBackend::Postgres => {
            table
                .col(
                    ColumnDef::new(Songplays::SongplayId)
                        .integer()
                        .extra("IDENTITY(0,1)"),
                )
                .primary_key(Index::create().col(Songplays::SongplayId));
        }
        _ => {
            table.col(pk_auto(Songplays::SongplayId));
        }
    }

    table
        .col(timestamp_with_time_zone(Songplays::StartTime))
        .col(integer(Songplays::UserId))
        .col(string_null(Songplays::Level))
        .col(string_null(Songplays::SongId))
        .col(string_null(Songplays::ArtistId))
        .col(integer_null(Songplays::SessionId))
        .col(string_null(Songplays::Location))
        .col(string_null(Songplays::UserAgent))
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Songplays {
    Table,
    SongplayId,
    StartTime,
    UserId,
    Level,
    SongId,
    ArtistId,
    SessionId,
    Location,
    UserAgent,
}
