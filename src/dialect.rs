//! SQL renditions for the supported backends.
//!
//! The warehouse is Amazon Redshift, reached over the postgres protocol. SQLite gets an
//! equivalent rendition so the whole pipeline runs locally. Only the pieces with no common
//! syntax live here: epoch conversion and date part extraction.

use sea_orm::{ConnectionTrait, DbBackend};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Redshift,
    Sqlite,
}

/// Field extracted from a timestamp for the `time` dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePart {
    Hour,
    DayOfYear,
    /// ISO 8601 week number
    Week,
    Month,
    Year,
    /// 0 = Sunday
    Weekday,
}

impl Dialect {
    pub fn for_backend(backend: DbBackend) -> Result<Self, Error> {
        match backend {
            DbBackend::Postgres => Ok(Self::Redshift),
            DbBackend::Sqlite => Ok(Self::Sqlite),
            other => Err(Error::UnsupportedBackend(other)),
        }
    }

    /// Dialect of the backend `db` is connected to.
    pub fn of<C: ConnectionTrait>(db: &C) -> Result<Self, Error> {
        Self::for_backend(db.get_database_backend())
    }

    /// Expression for the UTC timestamp `column / 1000` seconds after the Unix epoch.
    ///
    /// `column` holds epoch milliseconds; the division truncates to whole seconds.
    pub fn epoch_millis_to_timestamp(&self, column: &str) -> String {
        match self {
            Self::Redshift => format!("timestamp 'epoch' + {column} / 1000 * interval '1 second'"),
            Self::Sqlite => format!("datetime({column} / 1000, 'unixepoch')"),
        }
    }

    /// Expression extracting `part` from the timestamp expression `expr` as a number.
    pub fn date_part(&self, part: DatePart, expr: &str) -> String {
        match self {
            Self::Redshift => {
                let field = match part {
                    DatePart::Hour => "hrs",
                    DatePart::DayOfYear => "dayofyear",
                    DatePart::Week => "w",
                    DatePart::Month => "mons",
                    DatePart::Year => "yrs",
                    DatePart::Weekday => "dow",
                };
                format!("DATE_PART({field}, {expr})")
            }
            Self::Sqlite => {
                let format = match part {
                    DatePart::Hour => "%H",
                    DatePart::DayOfYear => "%j",
                    DatePart::Week => "%V",
                    DatePart::Month => "%m",
                    DatePart::Year => "%Y",
                    DatePart::Weekday => "%w",
                };
                format!("CAST(strftime('{format}', {expr}) AS INTEGER)")
            }
        }
    }
}
