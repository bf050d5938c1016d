use serde::{Deserialize, Serialize};
use crate::config::structs::http_timeout_config::HttpTimeoutConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HttpConfig {
    /// Listen address, e.g. "0.0.0.0:34000".
    pub addr: String,
    /// Reverse-proxy header consulted for the client address, e.g. "X-Real-IP".
    pub proxy_header: String,
    pub timeout: HttpTimeoutConfig,
}
