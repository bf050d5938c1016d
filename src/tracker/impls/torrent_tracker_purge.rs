use log::info;
use std::sync::atomic::Ordering;
use crate::common::common::current_time;
use crate::queues::structs::torrent_row::TorrentRow;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::AHashMap;

impl TorrentTracker {
    /// Evicts every peer whose last announce predates the inactivity cutoff.
    ///
    /// For each torrent with evictions a corrective torrent row is enqueued
    /// so the database seeder/leecher counts follow. Returns the number of
    /// peers removed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn purge_inactive_peers(&self) -> u64
    {
        let cutoff = current_time() - self.config.intervals.peer_inactivity as i64;
        let torrents = self.torrents.load_full();
        let mut purged = 0u64;
        for torrent in torrents.values() {
            let mut swarm = torrent.swarm.lock();
            let seeders_before = swarm.seeders.len();
            let leechers_before = swarm.leechers.len();
            swarm.seeders.retain(|_, peer| peer.last_announce >= cutoff);
            swarm.leechers.retain(|_, peer| peer.last_announce >= cutoff);
            if swarm.leechers.is_empty() && leechers_before > 0 {
                // A map does not shrink after a mass eviction; a fresh
                // allocation releases the memory.
                swarm.leechers = AHashMap::default();
            }
            let removed_seeders = seeders_before - swarm.seeders.len();
            let removed_leechers = leechers_before - swarm.leechers.len();
            torrent.store_counts(&swarm);
            drop(swarm);
            if removed_seeders > 0 || removed_leechers > 0 {
                purged += (removed_seeders + removed_leechers) as u64;
                self.update_stats(StatsEvent::Seeders, -(removed_seeders as i64));
                self.update_stats(StatsEvent::Leechers, -(removed_leechers as i64));
                self.queue_torrent_row(TorrentRow {
                    id: torrent.id,
                    seeders: torrent.seeders_count.load(Ordering::Relaxed),
                    leechers: torrent.leechers_count.load(Ordering::Relaxed),
                    snatched_delta: 0,
                    last_action: torrent.last_action.load(Ordering::Relaxed),
                });
            }
        }
        if purged > 0 {
            self.update_stats(StatsEvent::PeersPurged, purged as i64);
        }
        purged
    }

    /// One full purge cycle: evict in memory, then mark the corresponding
    /// transfer_history rows inactive. The sweep shares the history flush
    /// lock so it cannot overtake an in-flight batch that still carries a
    /// newer last_announce for an evicted peer.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn purge_cycle(&self)
    {
        let cutoff = current_time() - self.config.intervals.peer_inactivity as i64;
        let purged = self.purge_inactive_peers();
        let _guard = self.queues.history_flush_lock.lock().await;
        let query = format!(
            "UPDATE transfer_history SET active = '0' WHERE last_announce < FROM_UNIXTIME({cutoff}) AND active = '1'"
        );
        match self.execute_with_deadlock_retry(&query).await {
            Ok(rows) => info!("[PURGE] Removed {purged} peers, marked {rows} history rows inactive"),
            Err(_) => info!("[PURGE] Removed {purged} peers, history sweep failed"),
        }
    }
}
