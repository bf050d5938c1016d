use log::error;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, Error, MySql, Pool};
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;

impl DatabaseConnector {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsn: &str) -> Result<Pool<MySql>, Error>
    {
        MySqlPoolOptions::new().connect_with(
            MySqlConnectOptions::from_str(dsn)?
                .log_statements(log::LevelFilter::Debug)
                .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1))
        ).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(config: Arc<Configuration>) -> DatabaseConnector
    {
        let dsn = config.build_dsn();
        match DatabaseConnector::create(dsn.as_str()).await {
            Ok(pool) => DatabaseConnector { pool },
            Err(e) => {
                error!("[MySQL] Unable to connect to MySQL on DSN {dsn}");
                error!("[MySQL] Message: {e}");
                exit(1);
            }
        }
    }

    /// Runs one statement and returns the affected row count.
    #[tracing::instrument(level = "debug")]
    pub async fn execute_raw(&self, query: &str) -> Result<u64, Error>
    {
        sqlx::query(query).execute(&self.pool).await.map(|result| result.rows_affected())
    }
}

/// MySQL 1213 (deadlock) and 1205 (lock wait timeout) are the retryable
/// classes; everything else is handed back to the caller.
pub fn is_deadlock(error: &Error) -> bool {
    matches!(
        error
            .as_database_error()
            .and_then(|db| db.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>())
            .map(|db| db.number()),
        Some(1213) | Some(1205)
    )
}
