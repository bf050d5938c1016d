//! Periodic cache reloading.
//!
//! Every `database_reload` seconds the authoritative tables are re-read and
//! the snapshot maps republished. Objects that already exist keep their
//! allocation: their atomic fields are refreshed in place and the `Arc` is
//! carried into the new map, so peers attached to a torrent survive the swap
//! and requests holding the previous snapshot stay consistent.

use futures_util::TryStreamExt;
use log::{info, warn};
use sqlx::{Error, Row};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::tracker::structs::group_freeleech::GroupFreeleech;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_group::TorrentGroup;
use crate::tracker::structs::torrent_hash::TorrentHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user::User;
use crate::tracker::structs::user_torrent_pair::UserTorrentPair;
use crate::tracker::types::{TorrentsMap, UsersMap};

impl DatabaseConnector {
    #[tracing::instrument(level = "debug", skip(self, tracker))]
    pub async fn load_users(&self, tracker: &TorrentTracker) -> Result<u64, Error>
    {
        let previous = tracker.users.load_full();
        let mut users = UsersMap::default();
        let mut rows = sqlx::query(
            "SELECT ID, torrent_pass, UpMultiplier, DownMultiplier, DisableDownload, TrackerHide FROM users_main WHERE Enabled = '1'"
        ).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            let id: u32 = row.get("ID");
            let torrent_pass: String = row.get("torrent_pass");
            let up_multiplier: f64 = row.get("UpMultiplier");
            let down_multiplier: f64 = row.get("DownMultiplier");
            let disable_download: i8 = row.get("DisableDownload");
            let tracker_hide: i8 = row.get("TrackerHide");
            let Ok(passkey) = torrent_pass.parse::<Passkey>() else {
                warn!("[RELOAD] Skipping user {id} with malformed passkey");
                continue;
            };
            match previous.get(&passkey) {
                Some(existing) if existing.id == id => {
                    existing.set_up_multiplier(up_multiplier);
                    existing.set_down_multiplier(down_multiplier);
                    existing.disable_download.store(disable_download != 0, Ordering::Relaxed);
                    existing.tracker_hide.store(tracker_hide != 0, Ordering::Relaxed);
                    users.insert(passkey, existing.clone());
                }
                _ => {
                    users.insert(passkey, Arc::new(User::new(
                        id,
                        disable_download != 0,
                        tracker_hide != 0,
                        up_multiplier,
                        down_multiplier,
                    )));
                }
            }
        }
        let count = users.len() as u64;
        tracker.publish_users(users);
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip(self, tracker))]
    pub async fn load_torrents(&self, tracker: &TorrentTracker) -> Result<u64, Error>
    {
        let previous = tracker.torrents.load_full();
        let mut torrents = TorrentsMap::default();
        let mut rows = sqlx::query(
            "SELECT ID, info_hash, Status, Snatched, UpMultiplier, DownMultiplier, GroupID, TorrentType, UNIX_TIMESTAMP(last_action) AS last_action FROM torrents"
        ).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            let id: u32 = row.get("ID");
            let info_hash: Vec<u8> = row.get("info_hash");
            let status: i8 = row.get("Status");
            let snatched: u16 = row.get("Snatched");
            let up_multiplier: f64 = row.get("UpMultiplier");
            let down_multiplier: f64 = row.get("DownMultiplier");
            let group_id: u32 = row.get("GroupID");
            let torrent_type: String = row.get("TorrentType");
            let last_action: Option<i64> = row.get("last_action");
            let Some(hash) = info_hash.get(..20).and_then(|slice| <[u8; 20]>::try_from(slice).ok()) else {
                warn!("[RELOAD] Skipping torrent {id} with malformed info hash");
                continue;
            };
            let hash = TorrentHash(hash);
            let group = TorrentGroup { torrent_type: Torrent::tag_from_str(&torrent_type), id: group_id };
            match previous.get(&hash) {
                Some(existing) if existing.id == id => {
                    existing.status.store(status as u8, Ordering::Relaxed);
                    existing.snatched.store(snatched, Ordering::Relaxed);
                    existing.set_up_multiplier(up_multiplier);
                    existing.set_down_multiplier(down_multiplier);
                    existing.set_group(group);
                    existing.last_action.store(last_action.unwrap_or(0), Ordering::Relaxed);
                    torrents.insert(hash, existing.clone());
                }
                _ => {
                    torrents.insert(hash, Arc::new(Torrent::new(
                        id,
                        status as u8,
                        snatched,
                        last_action.unwrap_or(0),
                        up_multiplier,
                        down_multiplier,
                        group,
                    )));
                }
            }
        }
        let count = torrents.len() as u64;
        tracker.publish_torrents(torrents);
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip(self, tracker))]
    pub async fn load_hit_and_runs(&self, tracker: &TorrentTracker) -> Result<u64, Error>
    {
        let mut records = HashSet::new();
        let mut rows = sqlx::query("SELECT uid, fid FROM transfer_history WHERE hnr = '1'").fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            records.insert(UserTorrentPair { user_id: row.get("uid"), torrent_id: row.get("fid") });
        }
        let count = records.len() as u64;
        tracker.publish_hit_and_runs(records);
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip(self, tracker))]
    pub async fn load_approved_clients(&self, tracker: &TorrentTracker) -> Result<u64, Error>
    {
        let mut clients = BTreeMap::new();
        let mut rows = sqlx::query("SELECT id, peer_id FROM approved_clients WHERE archived = 0").fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            let id: u16 = row.get("id");
            let peer_id: Vec<u8> = row.get("peer_id");
            clients.insert(id, peer_id);
        }
        let count = clients.len() as u64;
        tracker.publish_approved_clients(clients);
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip(self, tracker))]
    pub async fn load_group_freeleech(&self, tracker: &TorrentTracker) -> Result<u64, Error>
    {
        let mut overrides = HashMap::new();
        let mut rows = sqlx::query(
            "SELECT GroupID, Type, UpMultiplier, DownMultiplier FROM torrent_group_freeleech"
        ).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            let torrent_type: String = row.get("Type");
            overrides.insert(
                TorrentGroup { torrent_type: Torrent::tag_from_str(&torrent_type), id: row.get("GroupID") },
                GroupFreeleech { up_multiplier: row.get("UpMultiplier"), down_multiplier: row.get("DownMultiplier") },
            );
        }
        let count = overrides.len() as u64;
        tracker.publish_group_freeleech(overrides);
        Ok(count)
    }

    #[tracing::instrument(level = "debug", skip(self, tracker))]
    pub async fn load_global_freeleech(&self, tracker: &TorrentTracker) -> Result<bool, Error>
    {
        let row = sqlx::query("SELECT mod_setting FROM mod_core WHERE mod_option = 'global_freeleech'")
            .fetch_optional(&self.pool)
            .await?;
        let enabled = row.map(|row| row.get::<i32, _>("mod_setting") != 0).unwrap_or(false);
        tracker.set_global_freeleech(enabled);
        Ok(enabled)
    }
}

impl TorrentTracker {
    /// One full reload pass over all six caches. SQL errors are logged and
    /// swallowed; a failed cache keeps its previous snapshot.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn reload_from_database(&self)
    {
        let Some(connector) = &self.sqlx else {
            return;
        };
        let started = Instant::now();
        let users = log_reload("users", connector.load_users(self).await);
        let torrents = log_reload("torrents", connector.load_torrents(self).await);
        let hit_and_runs = log_reload("hit-and-runs", connector.load_hit_and_runs(self).await);
        let clients = log_reload("approved clients", connector.load_approved_clients(self).await);
        let freeleech = log_reload("group freeleech", connector.load_group_freeleech(self).await);
        let global = log_reload("global freeleech", connector.load_global_freeleech(self).await);
        info!(
            "[RELOAD] {users:?} users, {torrents:?} torrents, {hit_and_runs:?} hnr, {clients:?} clients, {freeleech:?} group-fl, global-fl {global:?} in {:?}",
            started.elapsed()
        );
    }
}

fn log_reload<T: std::fmt::Debug + Default>(what: &str, result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("[RELOAD] Refreshing {what} failed: {e}");
            T::default()
        }
    }
}
