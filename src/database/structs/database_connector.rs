use sqlx::{MySql, Pool};

/// The shared MySQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub pool: Pool<MySql>,
}
