use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpTimeoutConfig {
    pub read: u64,
    pub write: u64,
    pub idle: u64,
}
