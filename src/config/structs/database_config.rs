use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    /// Full DSN; when non-empty it wins over the individual fields below.
    pub dsn: String,
    pub username: String,
    pub password: String,
    /// Connection protocol: "tcp" or "unix".
    pub proto: String,
    /// Host:port for tcp, socket path for unix.
    pub addr: String,
    pub database: String,
    /// Base pause in seconds between deadlock retries; multiplied by the
    /// attempt number for linear backoff.
    pub deadlock_pause: u64,
    pub deadlock_retries: u64,
}
