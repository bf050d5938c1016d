use serde::{Deserialize, Serialize};
use crate::config::structs::announce_config::AnnounceConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::channels_config::ChannelsConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_config::HttpConfig;
use crate::config::structs::intervals_config::IntervalsConfig;

/// Top-level tracker configuration, loaded from `config.json`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    /// Log every flush batch at info level instead of debug.
    pub log_flushes: bool,
    /// Append a JSON record of every announce to the event log.
    pub record_announces: bool,
    pub enable_scrape: bool,
    pub enable_metrics: bool,
    /// Bearer token unlocking the admin-gated metrics set.
    pub admin_token: String,
    pub database: DatabaseConfig,
    pub channels: ChannelsConfig,
    pub intervals: IntervalsConfig,
    pub http: HttpConfig,
    pub announce: AnnounceConfig,
    pub cache: CacheConfig,
}
