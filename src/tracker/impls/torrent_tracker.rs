use arc_swap::ArcSwap;
use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::queues::structs::flush_queues::FlushQueues;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::group_freeleech::GroupFreeleech;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_group::TorrentGroup;
use crate::tracker::structs::torrent_hash::TorrentHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user::User;
use crate::tracker::structs::user_torrent_pair::UserTorrentPair;
use crate::tracker::types::{ApprovedClientsMap, GroupFreeleechMap, HitAndRunSet, TorrentsMap, UsersMap};

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub async fn new(config: Arc<Configuration>, connect_database: bool) -> TorrentTracker
    {
        let sqlx = if connect_database {
            info!("[BOOT] Connecting to MySQL...");
            Some(DatabaseConnector::database_connector(config.clone()).await)
        } else {
            None
        };
        let tracker = TorrentTracker {
            queues: Arc::new(FlushQueues::from_config(&config.channels)),
            config,
            sqlx,
            torrents: ArcSwap::from_pointee(TorrentsMap::default()),
            users: ArcSwap::from_pointee(UsersMap::default()),
            hit_and_runs: ArcSwap::from_pointee(HitAndRunSet::default()),
            approved_clients: ArcSwap::from_pointee(BTreeMap::new()),
            group_freeleech: ArcSwap::from_pointee(GroupFreeleechMap::default()),
            global_freeleech: AtomicBool::new(false),
            stats: Arc::new(StatsAtomics::default()),
        };
        tracker.stats.started.store(current_time(), Ordering::Relaxed);
        tracker
    }

    #[inline]
    pub fn get_torrent(&self, info_hash: TorrentHash) -> Option<Arc<Torrent>>
    {
        self.torrents.load().get(&info_hash).cloned()
    }

    #[inline]
    pub fn get_user(&self, passkey: Passkey) -> Option<Arc<User>>
    {
        self.users.load().get(&passkey).cloned()
    }

    #[inline]
    pub fn has_hit_and_run(&self, user_id: u32, torrent_id: u32) -> bool
    {
        self.hit_and_runs.load().contains(&UserTorrentPair { user_id, torrent_id })
    }

    /// Matches the reported peer id against the approved-client prefixes,
    /// returning the first matching client id in id order.
    pub fn match_approved_client(&self, peer_id: &PeerId) -> Option<u16>
    {
        let clients = self.approved_clients.load();
        for (client_id, prefix) in clients.iter() {
            if peer_id.0.starts_with(prefix) {
                return Some(*client_id);
            }
        }
        None
    }

    #[inline]
    pub fn get_group_freeleech(&self, group: TorrentGroup) -> Option<GroupFreeleech>
    {
        self.group_freeleech.load().get(&group).copied()
    }

    #[inline]
    pub fn is_global_freeleech(&self) -> bool
    {
        self.global_freeleech.load(Ordering::Relaxed)
    }

    pub fn set_global_freeleech(&self, enabled: bool)
    {
        self.global_freeleech.store(enabled, Ordering::Relaxed);
    }

    /// Publishes a replacement torrent map and refreshes the swarm gauges.
    pub fn publish_torrents(&self, torrents: TorrentsMap)
    {
        let mut seeders = 0i64;
        let mut leechers = 0i64;
        for torrent in torrents.values() {
            seeders += torrent.seeders_count.load(Ordering::Relaxed) as i64;
            leechers += torrent.leechers_count.load(Ordering::Relaxed) as i64;
        }
        self.set_stats(StatsEvent::Torrents, torrents.len() as i64);
        self.set_stats(StatsEvent::Seeders, seeders);
        self.set_stats(StatsEvent::Leechers, leechers);
        self.torrents.store(Arc::new(torrents));
    }

    pub fn publish_users(&self, users: UsersMap)
    {
        self.set_stats(StatsEvent::Users, users.len() as i64);
        self.users.store(Arc::new(users));
    }

    pub fn publish_hit_and_runs(&self, records: HitAndRunSet)
    {
        self.hit_and_runs.store(Arc::new(records));
    }

    pub fn publish_approved_clients(&self, clients: ApprovedClientsMap)
    {
        self.approved_clients.store(Arc::new(clients));
    }

    pub fn publish_group_freeleech(&self, overrides: GroupFreeleechMap)
    {
        self.group_freeleech.store(Arc::new(overrides));
    }
}
