//! Main tracker instance definition.

use arc_swap::ArcSwap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::queues::structs::flush_queues::FlushQueues;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::types::{ApprovedClientsMap, GroupFreeleechMap, HitAndRunSet, TorrentsMap, UsersMap};

/// The tracker instance: swarm store, caches, write queues and statistics.
///
/// # Snapshot publication
///
/// The five read-hot containers are `ArcSwap` pointers to immutable maps.
/// The reloader and the cache loader build a full replacement map and publish
/// it with a single swap; readers load the pointer once and treat the map as
/// immutable for the duration of the request. Existing `Torrent` and `User`
/// objects are carried over between generations and refreshed through their
/// atomic fields, so peer state survives a reload and in-flight requests
/// holding a previous snapshot stay valid.
///
/// # Thread safety
///
/// Per-torrent peer maps are guarded by each torrent's own mutex; everything
/// else is atomics, snapshot pointers, or bounded channels.
#[derive(Debug)]
pub struct TorrentTracker {
    /// Shared configuration.
    pub config: Arc<Configuration>,

    /// MySQL connector; absent when running purely in memory (tests).
    pub sqlx: Option<DatabaseConnector>,

    /// Torrent catalog by info hash.
    pub torrents: ArcSwap<TorrentsMap>,

    /// Members by passkey.
    pub users: ArcSwap<UsersMap>,

    /// Hit-and-run records unlocking redownloads for disabled members.
    pub hit_and_runs: ArcSwap<HitAndRunSet>,

    /// Approved client peer-id prefixes, ordered by client id.
    pub approved_clients: ArcSwap<ApprovedClientsMap>,

    /// Group-level freeleech multiplier overrides.
    pub group_freeleech: ArcSwap<GroupFreeleechMap>,

    /// Sitewide freeleech: download deltas are zeroed while set.
    pub global_freeleech: AtomicBool,

    /// The bounded write-pipeline queues and their buffer pool.
    pub queues: Arc<FlushQueues>,

    /// Atomic statistics counters.
    pub stats: Arc<StatsAtomics>,
}
