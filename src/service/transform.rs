use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{dialect::Dialect, error::Error, model::TableReport, query::Transformation};

pub struct TransformService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransformService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run the five transformations in order, committing after each.
    ///
    /// Running this twice without recreating the tables duplicates the rows of every table
    /// but `users`.
    ///
    /// # Returns
    /// - `Ok(Vec<TableReport>)` - Rows inserted per target table, in execution order
    /// - `Err(Error::Statement)` - A statement failed; earlier inserts stay committed
    pub async fn insert_tables(&self) -> Result<Vec<TableReport>, Error> {
        let dialect = Dialect::of(self.db)?;

        let mut reports = Vec::with_capacity(Transformation::ALL.len());
        for transformation in Transformation::ALL {
            reports.push(self.insert(transformation, dialect).await?);
        }

        Ok(reports)
    }

    /// Run a single transformation in its own transaction.
    pub async fn insert(
        &self,
        transformation: Transformation,
        dialect: Dialect,
    ) -> Result<TableReport, Error> {
        let table = transformation.target();
        let sql = transformation.sql(dialect);
        tracing::debug!(table, %sql, "Inserting rows");

        let txn = self.db.begin().await?;
        let result = txn
            .execute_unprepared(&sql)
            .await
            .map_err(|e| Error::statement(format!("insert into {table}"), e))?;
        txn.commit().await?;

        let report = TableReport {
            table,
            rows: result.rows_affected(),
        };
        tracing::info!(table, rows = report.rows, "Inserted rows");

        Ok(report)
    }
}

#[cfg(test)]
mod tests;
