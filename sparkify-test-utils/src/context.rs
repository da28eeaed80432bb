//! Test context structure and utilities.
//!
//! The context returned by `TestBuilder` owns an in-memory SQLite database and a temporary
//! directory holding the staging source files, laid out the way the Sparkify object storage
//! bucket is: an event log prefix, a song metadata prefix and a JSONPaths file.

use std::path::{Path, PathBuf};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_tables()
///     .with_event(factory::next_song("26", 1541121934796, "Artist", "Title"))
///     .build()
///     .await?;
///
/// // Source locations for a local bulk copy
/// let events = test.log_data();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Root of the staging source files, removed on drop
    pub(crate) data_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with an empty database and an empty data directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Failed to open the in-memory database
    /// - `Err(TestError::Io)` - Failed to create the data directory
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let data_dir = tempfile::tempdir()?;

        tokio::fs::create_dir_all(data_dir.path().join("log_data")).await?;
        tokio::fs::create_dir_all(data_dir.path().join("song_data")).await?;

        Ok(Self { db, data_dir })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Write `contents` to `relative` below the data directory, creating parent directories.
    pub async fn write_file(
        &self,
        relative: impl AsRef<Path>,
        contents: &str,
    ) -> Result<PathBuf, TestError> {
        let path = self.data_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, contents).await?;

        Ok(path)
    }

    /// Location of the event log prefix.
    pub fn log_data(&self) -> String {
        self.location("log_data")
    }

    /// Location of the JSONPaths mapping file for the event log.
    pub fn log_jsonpath(&self) -> String {
        self.location("log_json_path.json")
    }

    /// Location of the song metadata prefix.
    pub fn song_data(&self) -> String {
        self.location("song_data")
    }

    fn location(&self, relative: &str) -> String {
        self.data_dir.path().join(relative).display().to_string()
    }
}
