//! Column descriptions for the staging tables.
//!
//! Staging tables are described as ordered column lists rather than iden enums because the
//! loader needs the order and type of every column: JSONPaths files map onto columns by
//! position and each source value is coerced to the column type.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

/// Storage type of a staging column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// `varchar`
    Varchar,
    /// `varchar(max)` on Redshift, `text` elsewhere
    VarcharMax,
    /// `text`
    Text,
    /// 32-bit `int`
    Integer,
    /// `bigint`
    BigInteger,
    /// `float` (double precision)
    Float,
    /// `numeric`
    Numeric,
}

impl ColumnKind {
    /// Whether values of this kind are stored as strings.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Varchar | Self::VarcharMax | Self::Text)
    }
}

/// A named, typed column of a staging table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagingColumn {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl StagingColumn {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }

    /// Column definition rendered for `backend`. Staging columns are always nullable.
    pub fn def(&self, backend: DbBackend) -> ColumnDef {
        let mut def = ColumnDef::new(Alias::new(self.name));
        match self.kind {
            ColumnKind::Varchar => def.string(),
            ColumnKind::VarcharMax => match backend {
                DbBackend::Postgres => def.custom(Alias::new("varchar(max)")),
                _ => def.text(),
            },
            ColumnKind::Text => def.text(),
            ColumnKind::Integer => def.integer(),
            ColumnKind::BigInteger => def.big_integer(),
            ColumnKind::Float => def.double(),
            ColumnKind::Numeric => def.decimal(),
        };
        def
    }
}

/// Build a `CREATE TABLE` statement from an ordered column list.
pub(crate) fn staging_table(
    name: &'static str,
    columns: &[StagingColumn],
    backend: DbBackend,
) -> TableCreateStatement {
    let mut table = Table::create();
    table.table(Alias::new(name));
    for column in columns {
        table.col(column.def(backend));
    }
    table
}
