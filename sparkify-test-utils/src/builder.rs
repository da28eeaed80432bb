//! Declarative test builder.
//!
//! `TestBuilder` queues the warehouse tables and staging source files a test needs; all of
//! them are created by the final `build()` call.

use std::path::PathBuf;

use schema::{DbBackend, WarehouseTable};
use serde_json::Value;

use crate::{constant::LOG_JSONPATHS, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_tables: bool,

    // Staging source files to write, relative to the data directory
    event_files: Vec<(PathBuf, Vec<Value>)>,
    songs: Vec<Value>,
    raw_files: Vec<(PathBuf, String)>,
    jsonpaths: String,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables and no source records.
    pub fn new() -> Self {
        Self {
            include_tables: false,
            event_files: Vec::new(),
            songs: Vec::new(),
            raw_files: Vec::new(),
            jsonpaths: LOG_JSONPATHS.to_string(),
        }
    }

    /// Create all seven warehouse tables, rendered for SQLite.
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Append an event to the default event log file,
    /// `log_data/2018/11/2018-11-02-events.json`.
    pub fn with_event(self, event: Value) -> Self {
        self.with_events_in("2018/11/2018-11-02-events.json", vec![event])
    }

    /// Append events to a newline-delimited file below `log_data/`.
    ///
    /// # Arguments
    /// - `relative` - File path relative to the event log prefix
    /// - `events` - Records written one per line
    pub fn with_events_in(mut self, relative: &str, events: Vec<Value>) -> Self {
        let path = PathBuf::from("log_data").join(relative);
        match self.event_files.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => existing.extend(events),
            None => self.event_files.push((path, events)),
        }
        self
    }

    /// Add a song record, written to its own file below `song_data/` like the source bucket.
    pub fn with_song(mut self, song: Value) -> Self {
        self.songs.push(song);
        self
    }

    /// Write an arbitrary file below the data directory, e.g. a malformed record.
    pub fn with_raw_file(mut self, relative: &str, contents: impl Into<String>) -> Self {
        self.raw_files.push((PathBuf::from(relative), contents.into()));
        self
    }

    /// Replace the JSONPaths mapping file written for the event log.
    pub fn with_jsonpaths(mut self, contents: impl Into<String>) -> Self {
        self.jsonpaths = contents.into();
        self
    }

    /// Build the test context by creating the configured tables and source files.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates the warehouse tables if requested
    /// 2. Writes the JSONPaths file, event log files, song files and raw files
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation failed
    /// - `Err(TestError::Io)` - A source file could not be written
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.include_tables {
            let stmts = WarehouseTable::ALL
                .iter()
                .map(|table| table.create(DbBackend::Sqlite))
                .collect();
            context.with_tables(stmts).await?;
        }

        context
            .write_file("log_json_path.json", &self.jsonpaths)
            .await?;

        for (path, events) in &self.event_files {
            let mut contents = String::new();
            for event in events {
                contents.push_str(&serde_json::to_string(event)?);
                contents.push('\n');
            }
            context.write_file(path, &contents).await?;
        }

        for (index, song) in self.songs.iter().enumerate() {
            let song_id = song
                .get("song_id")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("song-{index}"));
            let path = PathBuf::from("song_data")
                .join("A")
                .join(format!("{song_id}.json"));
            context
                .write_file(path, &serde_json::to_string(song)?)
                .await?;
        }

        for (path, contents) in &self.raw_files {
            context.write_file(path, contents).await?;
        }

        Ok(context)
    }
}
