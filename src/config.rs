//! Runtime configuration.
//!
//! Configuration comes from the process environment (a `.env` file is loaded first by the
//! binaries). It is parsed once and handed to each phase explicitly; the `from_vars`
//! constructors take any key lookup so tests never touch the real environment.

use crate::error::config::ConfigError;

/// Full configuration of the `etl` binary.
#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub load: LoadConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_var)
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_vars(&var)?,
            load: LoadConfig::from_vars(&var)?,
        })
    }
}

/// Connection parameters of the warehouse.
///
/// `DATABASE_URL` takes precedence; otherwise the URL is assembled from the cluster keys
/// `DWH_HOST`, `DWH_DB`, `DWH_DB_USER`, `DWH_DB_PASSWORD` and `DWH_PORT`.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_var)
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database_url) = optional(&var, "DATABASE_URL") {
            return Ok(Self { database_url });
        }

        let host = required(&var, "DWH_HOST")?;
        let db_name = required(&var, "DWH_DB")?;
        let user = required(&var, "DWH_DB_USER")?;
        let password = required(&var, "DWH_DB_PASSWORD")?;
        let port = required(&var, "DWH_PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "DWH_PORT".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: format!(
                "postgres://{}:{}@{}:{}/{}",
                urlencoding::encode(&user),
                urlencoding::encode(&password),
                host,
                port,
                urlencoding::encode(&db_name),
            ),
        })
    }

    /// Backend scheme of the URL, safe to log.
    pub fn scheme(&self) -> &str {
        self.database_url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or_default()
    }
}

/// Source locations and authorization for the staging bulk copies.
#[derive(Clone, Debug)]
pub struct LoadConfig {
    /// Role the warehouse assumes to read object storage
    pub iam_role_arn: String,
    /// Event log prefix or directory
    pub log_data: String,
    /// JSONPaths file mapping event records onto `staging_events`
    pub log_jsonpath: String,
    /// Song metadata prefix or directory
    pub song_data: String,
}

impl LoadConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_var)
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            iam_role_arn: required(&var, "DWH_IAM_ROLE_ARN")?,
            log_data: required(&var, "LOG_DATA")?,
            log_jsonpath: required(&var, "LOG_JSONPATH")?,
            song_data: required(&var, "SONG_DATA")?,
        })
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn optional<F>(var: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    var(key).map(|value| unquote(&value)).filter(|value| !value.is_empty())
}

fn required<F>(var: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(var, key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Values copied from a `dwh.cfg` file are often wrapped in single quotes.
fn unquote(value: &str) -> String {
    let value = value.trim();
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value)
        .to_string()
}
