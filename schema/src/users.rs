use sea_orm_migration::{prelude::*, schema::*};
use sea_orm_migration::sea_orm::DbBackend;

use crate::informational_key;

pub fn create(backend: DbBackend) -> TableCreateStatement {
    let mut table = Table::create();
    table
        .table(Users::Table)
        .if_not_exists()
        .col(integer(Users::UserId))
        .col(string_null(Users::FirstName))
        .col(string_null(Users::LastName))
        .col(string_null(Users::Gender))
        .col(string_null(Users::Level));
    informational_key(&mut table, backend, Users::UserId);

    table
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    UserId,
    FirstName,
    LastName,
    Gender,
    Level,
}
