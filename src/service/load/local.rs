//! Bulk copy from local JSON files.
//!
//! Mirrors the warehouse `COPY ... JSON` semantics closely enough to run the pipeline
//! without object storage:
//!
//! - A source is a file or a directory walked recursively for `*.json` files, read in
//!   sorted path order
//! - Each file is a stream of JSON objects, newline-delimited or a single object
//! - `'auto'` matches keys to column names case-insensitively; a JSONPaths file maps one
//!   path per column, in column order
//! - Values are coerced to the column type; an empty string in a numeric column is NULL
//!
//! All rows of a table are inserted in one transaction. Any malformed record aborts the
//! copy and leaves the table as it was.

use std::path::{Path, PathBuf};

use schema::{ColumnKind, StagingColumn};
use sea_orm::{
    sea_query::{Alias, Query},
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait, Value,
};
use serde::Deserialize;
use serde_json::{Map, Value as Json};
use walkdir::WalkDir;

use crate::{
    error::{load::LoadError, Error},
    model::{CopyFormat, CopyJob, Location, TableReport},
};

/// Rows per `INSERT` statement.
pub const INSERT_BATCH_SIZE: usize = 500;

/// Copy every record below `path` into `job.table`.
///
/// # Returns
/// - `Ok(TableReport)` - Number of records copied
/// - `Err(Error::LoadError)` - Missing source, unreadable file or malformed record
/// - `Err(Error::Statement)` - An insert was rejected
pub async fn copy_from_local(
    db: &DatabaseConnection,
    job: &CopyJob,
    path: &Path,
) -> Result<TableReport, Error> {
    let mapping = ColumnMapping::for_job(job).await?;
    let files = source_files(path)?;
    tracing::debug!(table = job.table, files = files.len(), "Copying from local storage");

    let txn = db.begin().await?;
    let mut rows = 0;
    let mut batch = Vec::with_capacity(INSERT_BATCH_SIZE);

    for file in files {
        let contents = read_file(&file).await?;
        let records = serde_json::Deserializer::from_str(&contents).into_iter::<Json>();

        for (index, record) in records.enumerate() {
            let malformed = |reason: String| LoadError::MalformedRecord {
                path: file.clone(),
                record: index + 1,
                reason,
            };
            let record = record.map_err(|e| malformed(e.to_string()))?;
            batch.push(mapping.row(&record).map_err(malformed)?);

            if batch.len() == INSERT_BATCH_SIZE {
                rows += insert_batch(&txn, job, &mut batch).await?;
            }
        }
    }

    if !batch.is_empty() {
        rows += insert_batch(&txn, job, &mut batch).await?;
    }
    txn.commit().await?;

    Ok(TableReport {
        table: job.table,
        rows,
    })
}

async fn insert_batch(
    txn: &DatabaseTransaction,
    job: &CopyJob,
    batch: &mut Vec<Vec<Value>>,
) -> Result<u64, Error> {
    let rows = batch.len() as u64;

    let mut insert = Query::insert();
    insert
        .into_table(Alias::new(job.table))
        .columns(job.columns.iter().map(|column| Alias::new(column.name)));
    for row in batch.drain(..) {
        insert
            .values(row.into_iter().map(Into::into))
            .map_err(|e| LoadError::Insert {
                table: job.table,
                reason: e.to_string(),
            })?;
    }

    txn.execute(&insert)
        .await
        .map_err(|e| Error::statement(format!("copy {}", job.table), e))?;

    Ok(rows)
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Files making up a source location, in sorted path order.
pub fn source_files(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceNotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Where each column takes its value from in a source record.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Selector {
    /// Exact key, from a JSONPaths expression
    Key(String),
    /// Key equal to the column name ignoring ASCII case
    ColumnName,
}

#[derive(Debug)]
pub struct ColumnMapping {
    columns: Vec<(StagingColumn, Selector)>,
}

#[derive(Deserialize)]
struct JsonPathsFile {
    jsonpaths: Vec<String>,
}

impl ColumnMapping {
    /// Mapping for `job`, reading its JSONPaths file if it has one.
    pub async fn for_job(job: &CopyJob) -> Result<Self, LoadError> {
        match &job.format {
            CopyFormat::Auto => Ok(Self::auto(job.columns)),
            CopyFormat::JsonPaths(Location::Local(path)) => {
                let contents = read_file(path).await?;
                Self::from_jsonpaths(job.table, job.columns, path, &contents)
            }
            CopyFormat::JsonPaths(Location::ObjectStore(path)) => Err(LoadError::RemoteJsonPaths {
                table: job.table,
                path: path.clone(),
            }),
        }
    }

    pub fn auto(columns: &[StagingColumn]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|column| (*column, Selector::ColumnName))
                .collect(),
        }
    }

    /// Parse a JSONPaths document and pair its paths with `columns` by position.
    pub fn from_jsonpaths(
        table: &'static str,
        columns: &[StagingColumn],
        path: &Path,
        contents: &str,
    ) -> Result<Self, LoadError> {
        let invalid = |reason: String| LoadError::InvalidJsonPaths {
            path: path.to_path_buf(),
            reason,
        };

        let file: JsonPathsFile = serde_json::from_str(contents).map_err(|e| invalid(e.to_string()))?;
        if file.jsonpaths.len() != columns.len() {
            return Err(LoadError::JsonPathsMismatch {
                path: path.to_path_buf(),
                table,
                found: file.jsonpaths.len(),
                expected: columns.len(),
            });
        }

        let mut mapped = Vec::with_capacity(columns.len());
        for (column, expression) in columns.iter().zip(&file.jsonpaths) {
            let key = parse_json_path(expression)
                .ok_or_else(|| invalid(format!("unsupported path expression {expression}")))?;
            mapped.push((*column, Selector::Key(key)));
        }

        Ok(Self { columns: mapped })
    }

    /// Convert one source record into column values, in column order.
    pub fn row(&self, record: &Json) -> Result<Vec<Value>, String> {
        let object = record
            .as_object()
            .ok_or_else(|| "record is not a JSON object".to_string())?;

        self.columns
            .iter()
            .map(|(column, selector)| {
                coerce(select(object, column, selector), column)
                    .map_err(|reason| format!("column {}: {reason}", column.name))
            })
            .collect()
    }
}

fn select<'r>(object: &'r Map<String, Json>, column: &StagingColumn, selector: &Selector) -> Option<&'r Json> {
    match selector {
        Selector::Key(key) => object.get(key),
        Selector::ColumnName => object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(column.name))
            .map(|(_, value)| value),
    }
}

/// Key named by a top-level JSONPath expression: `$['key']`, `$["key"]` or `$.key`.
pub fn parse_json_path(expression: &str) -> Option<String> {
    let expression = expression.trim();

    if let Some(inner) = expression
        .strip_prefix("$[")
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let key = inner
            .strip_prefix('\'')
            .and_then(|k| k.strip_suffix('\''))
            .or_else(|| inner.strip_prefix('"').and_then(|k| k.strip_suffix('"')))?;
        return (!key.is_empty()).then(|| key.to_string());
    }

    let key = expression.strip_prefix("$.")?;
    let simple = !key.is_empty() && !key.contains(['.', '[', ']']);
    simple.then(|| key.to_string())
}

/// Convert a source value to the storage type of `column`. Missing keys and JSON nulls
/// become SQL NULL.
pub fn coerce(value: Option<&Json>, column: &StagingColumn) -> Result<Value, String> {
    let value = value.filter(|v| !v.is_null());

    match column.kind {
        kind if kind.is_textual() => Ok(Value::from(value.map(text))),
        ColumnKind::Integer => {
            let number = integer(value)?
                .map(i32::try_from)
                .transpose()
                .map_err(|_| "value out of range for int".to_string())?;
            Ok(Value::from(number))
        }
        ColumnKind::BigInteger => Ok(Value::from(integer(value)?)),
        _ => Ok(Value::from(float(value)?)),
    }
}

fn text(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn integer(value: Option<&Json>) -> Result<Option<i64>, String> {
    match value {
        None => Ok(None),
        Some(Json::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.fract() != 0.0 => Err(format!("{n} is not an integer")),
                // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
                Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(Some(f as i64)),
                _ => Err("value out of range for bigint".to_string()),
            }
        }
        Some(Json::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Json::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("{s:?} is not an integer")),
        Some(other) => Err(format!("{other} is not an integer")),
    }
}

fn float(value: Option<&Json>) -> Result<Option<f64>, String> {
    match value {
        None => Ok(None),
        Some(Json::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("{n} is not a number")),
        Some(Json::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Json::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("{s:?} is not a number")),
        Some(other) => Err(format!("{other} is not a number")),
    }
}

#[cfg(test)]
mod tests;
