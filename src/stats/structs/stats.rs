use serde::{Deserialize, Serialize};

/// A point-in-time copy of [`StatsAtomics`](super::stats_atomics::StatsAtomics).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Stats {
    pub started: i64,
    pub torrents: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub users: i64,
    pub announces_handled: i64,
    pub scrapes_handled: i64,
    pub failures: i64,
    pub not_found: i64,
    pub deadlines_exceeded: i64,
    pub panics_recovered: i64,
    pub deadlocks_observed: i64,
    pub sql_errors: i64,
    pub torrents_unpruned: i64,
    pub peers_purged: i64,
    pub flushed_torrent_rows: i64,
    pub flushed_user_rows: i64,
    pub flushed_transfer_history_rows: i64,
    pub flushed_transfer_ip_rows: i64,
    pub flushed_snatch_rows: i64,
    pub events_recorded: i64,
    pub events_dropped: i64,
}
