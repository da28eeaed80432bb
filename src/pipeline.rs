//! The INIT -> LOAD -> TRANSFORM sequence.
//!
//! Phases run in the order given, with no retry or resumption. The first failure stops the
//! run; whatever earlier statements committed stays in the database.

use std::fmt;

use sea_orm::DatabaseConnection;

use crate::{
    config::{DatabaseConfig, LoadConfig},
    error::Error,
    model::TableReport,
    service::{load::LoadService, tables::SchemaService, transform::TransformService},
    startup,
};

/// One phase of a pipeline run.
#[derive(Clone, Copy, Debug)]
pub enum Phase<'a> {
    /// Drop and recreate the seven tables
    Init,
    /// Bulk copy the staging tables from the configured locations
    Load(&'a LoadConfig),
    /// Derive the fact and dimension tables from the staging tables
    Transform,
}

impl fmt::Display for Phase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Init => "INIT",
            Self::Load(_) => "LOAD",
            Self::Transform => "TRANSFORM",
        })
    }
}

pub struct Pipeline<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> Pipeline<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn init(&self) -> Result<(), Error> {
        SchemaService::new(self.db).recreate_tables().await
    }

    pub async fn load(&self, config: &LoadConfig) -> Result<Vec<TableReport>, Error> {
        LoadService::new(self.db, config).load_staging_tables().await
    }

    pub async fn transform(&self) -> Result<Vec<TableReport>, Error> {
        TransformService::new(self.db).insert_tables().await
    }

    /// Run `phases` in order, stopping at the first error.
    pub async fn run(&self, phases: &[Phase<'_>]) -> Result<(), Error> {
        for phase in phases {
            tracing::debug!(%phase, "Starting phase");

            let rows: u64 = match phase {
                Phase::Init => {
                    self.init().await?;
                    0
                }
                Phase::Load(config) => total_rows(&self.load(config).await?),
                Phase::Transform => total_rows(&self.transform().await?),
            };

            tracing::info!(%phase, rows, "Completed phase");
        }

        Ok(())
    }
}

fn total_rows(reports: &[TableReport]) -> u64 {
    reports.iter().map(|report| report.rows).sum()
}

/// Connect, run `phases` and close the connection whether or not the run succeeded.
///
/// # Returns
/// - `Ok(())` - Every phase completed and the connection closed cleanly
/// - `Err(Error)` - The connection failed, a phase failed, or closing failed; a phase
///   error takes precedence over a close error
pub async fn connect_and_run(config: &DatabaseConfig, phases: &[Phase<'_>]) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    let result = Pipeline::new(&db).run(phases).await;
    let closed = db.close().await;

    result?;
    closed?;

    Ok(())
}
