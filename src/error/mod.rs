//! Error types for the Sparkify warehouse loader.
//!
//! Every error is fatal: the pipeline stops at the first failure and the message is
//! surfaced to the operator unchanged. Domain errors live in their own modules and are
//! aggregated by [`Error`] through `thiserror`'s `#[from]` conversions.

pub mod config;
pub mod load;

use sea_orm::DbBackend;
use thiserror::Error;

use crate::error::{config::ConfigError, load::LoadError};

/// Main error type for the loader.
///
/// # Error Categories
/// - Configuration errors (missing or invalid environment variables)
/// - Connection errors (the database could not be reached)
/// - Statement errors (a DDL, `COPY` or `INSERT` statement was rejected)
/// - Local bulk copy errors (unreadable or malformed source files)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Local bulk copy error (source files, JSONPaths mapping, record coercion).
    #[error(transparent)]
    LoadError(#[from] LoadError),
    /// A statement was rejected by the database.
    ///
    /// `context` names the statement, e.g. `create table songplays`.
    #[error("Failed to {context}: {source}")]
    Statement {
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },
    /// The connected backend has no SQL dialect.
    #[error("Unsupported database backend {0:?}, expected Redshift (postgres protocol) or SQLite")]
    UnsupportedBackend(DbBackend),
    /// Database error outside of a statement (connecting, beginning or closing).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Wrap a database error with the statement it came from.
    pub fn statement(context: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Statement {
            context: context.into(),
            source,
        }
    }
}
