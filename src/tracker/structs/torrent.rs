use parking_lot::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU8, AtomicU16, AtomicU32, AtomicU64};
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

/// A tracked torrent.
///
/// The scalar fields are atomics so the reloader can refresh an existing
/// torrent in place while announces read it; the swarm maps are guarded by
/// `swarm`. The two count mirrors are stored after every map mutation while
/// the swarm lock is held so that summaries (metrics, scrape, response
/// counters) never need the lock.
#[derive(Debug)]
pub struct Torrent {
    /// Database primary key.
    pub id: u32,
    /// 0 = live, 1 = pruned.
    pub status: AtomicU8,
    /// Completed-download accumulator.
    pub snatched: AtomicU16,
    /// Unix seconds of the most recent seeder announce.
    pub last_action: AtomicI64,
    /// f64 bit patterns; consumed through their absolute value.
    pub up_multiplier: AtomicU64,
    pub down_multiplier: AtomicU64,
    /// Group-level freeleech lookup key halves.
    pub group_id: AtomicU32,
    /// Fixed-width 8-byte torrent type tag, stored as its u64 bit pattern.
    pub group_type: AtomicU64,
    pub swarm: Mutex<TorrentSwarm>,
    pub seeders_count: AtomicU32,
    pub leechers_count: AtomicU32,
}
