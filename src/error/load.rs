use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bulk copying staging tables from local storage.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Source location {0} does not exist")]
    SourceNotFound(PathBuf),
    #[error("Failed to read source file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error("Malformed record {record} in {path}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        record: usize,
        reason: String,
    },
    #[error("Invalid JSONPaths file {path}: {reason}")]
    InvalidJsonPaths { path: PathBuf, reason: String },
    #[error("JSONPaths file {path} lists {found} paths but table {table} has {expected} columns")]
    JsonPathsMismatch {
        path: PathBuf,
        table: &'static str,
        found: usize,
        expected: usize,
    },
    #[error("Bulk copy of {table} from object storage path {path} requires a Redshift connection")]
    ObjectStoreUnavailable { table: &'static str, path: String },
    #[error("JSONPaths file {path} must be a local file when {table} is loaded from local storage")]
    RemoteJsonPaths { table: &'static str, path: String },
    #[error("Failed to build insert for {table}: {reason}")]
    Insert { table: &'static str, reason: String },
}
