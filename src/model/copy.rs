use std::{fmt, path::PathBuf};

use schema::{staging_events, staging_songs, StagingColumn};

use crate::config::LoadConfig;

/// A configured source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// `s3://` object storage path, read by the warehouse itself
    ObjectStore(String),
    /// Filesystem path, read by the loader. A `file://` prefix is stripped.
    Local(PathBuf),
}

impl Location {
    pub fn parse(value: &str) -> Self {
        if value.starts_with("s3://") {
            Self::ObjectStore(value.to_string())
        } else {
            let path = value.strip_prefix("file://").unwrap_or(value);
            Self::Local(PathBuf::from(path))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectStore(path) => f.write_str(path),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How source records map onto table columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyFormat {
    /// Keys match column names, case-insensitively
    Auto,
    /// A JSONPaths file lists one path per column, in column order
    JsonPaths(Location),
}

/// One bulk copy into a staging table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyJob {
    pub table: &'static str,
    pub columns: &'static [StagingColumn],
    pub source: Location,
    pub format: CopyFormat,
}

impl CopyJob {
    /// The two staging copies in execution order: the event log, then song metadata.
    pub fn staging_jobs(config: &LoadConfig) -> [CopyJob; 2] {
        [
            CopyJob {
                table: staging_events::TABLE,
                columns: staging_events::COLUMNS,
                source: Location::parse(&config.log_data),
                format: CopyFormat::JsonPaths(Location::parse(&config.log_jsonpath)),
            },
            CopyJob {
                table: staging_songs::TABLE,
                columns: staging_songs::COLUMNS,
                source: Location::parse(&config.song_data),
                format: CopyFormat::Auto,
            },
        ]
    }
}
