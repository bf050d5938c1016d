use std::sync::atomic::AtomicI64;

/// Lock-free statistics counters shared across all tasks.
#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub torrents: AtomicI64,
    pub seeders: AtomicI64,
    pub leechers: AtomicI64,
    pub users: AtomicI64,
    pub announces_handled: AtomicI64,
    pub scrapes_handled: AtomicI64,
    pub failures: AtomicI64,
    pub not_found: AtomicI64,
    pub deadlines_exceeded: AtomicI64,
    pub panics_recovered: AtomicI64,
    pub deadlocks_observed: AtomicI64,
    pub sql_errors: AtomicI64,
    pub torrents_unpruned: AtomicI64,
    pub peers_purged: AtomicI64,
    pub flushed_torrent_rows: AtomicI64,
    pub flushed_user_rows: AtomicI64,
    pub flushed_transfer_history_rows: AtomicI64,
    pub flushed_transfer_ip_rows: AtomicI64,
    pub flushed_snatch_rows: AtomicI64,
    pub events_recorded: AtomicI64,
    pub events_dropped: AtomicI64,
}
