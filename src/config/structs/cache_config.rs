use serde::{Deserialize, Serialize};

/// File names of the binary swarm snapshot files.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    pub torrents: String,
    pub users: String,
}
