//! Timestamp decomposition of every event. Date parts are stored as text.

use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::DbBackend;

use crate::informational_key;

pub fn create(backend: DbBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table
        .table(Time::Table)
        .if_not_exists()
        .col(timestamp_with_time_zone(Time::StartTime))
        .col(string_null(Time::Hour))
        .col(string_null(Time::Day))
        .col(string_null(Time::Week))
        .col(string_null(Time::Month))
        .col(string_null(Time::Year))
        .col(string_null(Time::Weekday));
    informational_key(&mut table, backend, Time::StartTime);

    table
}

#[derive(DeriveIden)]
pub enum Time {
    Table,
    StartTime,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Weekday,
}
