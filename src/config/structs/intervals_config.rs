use serde::{Deserialize, Serialize};

/// All timer intervals, in seconds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IntervalsConfig {
    /// Base interval handed to announcing clients.
    pub announce: u64,
    /// Minimum re-announce interval handed to clients.
    pub min_announce: u64,
    /// Upper bound of the random spread added to the announce interval.
    pub announce_drift: u64,
    /// Seconds of silence after which a peer is considered gone.
    pub peer_inactivity: u64,
    /// Scrape interval hint.
    pub scrape: u64,
    /// How often the reloader refreshes caches from the database.
    pub database_reload: u64,
    /// How often swarm state is snapshotted to the binary cache files.
    pub database_serialize: u64,
    /// How often stale peers are evicted.
    pub purge_inactive_peers: u64,
    /// Idle sleep of a flush worker after a small batch.
    pub flush: u64,
}
