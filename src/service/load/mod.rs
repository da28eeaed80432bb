//! Bulk copy of the staging tables.
//!
//! Object storage sources are copied by the warehouse with `COPY`. Local sources are read
//! by [`local`] and inserted with the same all-or-nothing contract, which makes the whole
//! pipeline runnable against SQLite.

pub mod local;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    config::LoadConfig,
    dialect::Dialect,
    error::{load::LoadError, Error},
    model::{CopyFormat, CopyJob, Location, TableReport},
    query::copy_statement,
};

pub struct LoadService<'a> {
    db: &'a DatabaseConnection,
    config: &'a LoadConfig,
}

impl<'a> LoadService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a LoadConfig) -> Self {
        Self { db, config }
    }

    /// Copy `staging_events`, then `staging_songs`.
    ///
    /// Every job is checked against the backend before the first copy runs, so a copy the
    /// backend cannot perform fails without touching either table.
    ///
    /// # Returns
    /// - `Ok(Vec<TableReport>)` - Rows copied per staging table
    /// - `Err(Error::LoadError)` - A local source is missing or malformed, or an object
    ///   storage source was configured against SQLite
    /// - `Err(Error::Statement)` - The warehouse rejected a `COPY`
    pub async fn load_staging_tables(&self) -> Result<Vec<TableReport>, Error> {
        let dialect = Dialect::of(self.db)?;
        let jobs = CopyJob::staging_jobs(self.config);

        for job in &jobs {
            check_job(job, dialect)?;
        }

        let mut reports = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let report = self.copy_table(job).await?;
            tracing::info!(table = report.table, rows = report.rows, "Copied staging table");
            reports.push(report);
        }

        Ok(reports)
    }

    /// Run a single copy job, committing once the table is fully loaded.
    pub async fn copy_table(&self, job: &CopyJob) -> Result<TableReport, Error> {
        match &job.source {
            Location::ObjectStore(_) => self.copy_from_object_store(job).await,
            Location::Local(path) => local::copy_from_local(self.db, job, path).await,
        }
    }

    async fn copy_from_object_store(&self, job: &CopyJob) -> Result<TableReport, Error> {
        let sql = copy_statement(job, &self.config.iam_role_arn);
        tracing::debug!(table = job.table, source = %job.source, "Copying from object storage");

        let txn = self.db.begin().await?;
        let result = txn
            .execute_unprepared(&sql)
            .await
            .map_err(|e| Error::statement(format!("copy {}", job.table), e))?;
        txn.commit().await?;

        Ok(TableReport {
            table: job.table,
            rows: result.rows_affected(),
        })
    }
}

fn check_job(job: &CopyJob, dialect: Dialect) -> Result<(), LoadError> {
    match (&job.source, &job.format) {
        (Location::ObjectStore(path), _) if dialect != Dialect::Redshift => {
            Err(LoadError::ObjectStoreUnavailable {
                table: job.table,
                path: path.clone(),
            })
        }
        (Location::Local(_), CopyFormat::JsonPaths(Location::ObjectStore(path))) => {
            Err(LoadError::RemoteJsonPaths {
                table: job.table,
                path: path.clone(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
