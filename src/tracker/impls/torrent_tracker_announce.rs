//! The announce protocol engine.
//!
//! Validation order, IP resolution, the client gate, peer placement, delta
//! accounting, queue emission and peer selection. Everything here is
//! synchronous; the only database interaction is the fire-and-forget unprune
//! update, and all accounting leaves through the bounded queues.

use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use log::debug;
use rand::RngExt;
use std::collections::{HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use crate::common::common::{current_time, QueryValues};
use crate::queues::structs::announce_event_record::AnnounceEventRecord;
use crate::queues::structs::snatch_row::SnatchRow;
use crate::queues::structs::torrent_row::TorrentRow;
use crate::queues::structs::transfer_history_row::TransferHistoryRow;
use crate::queues::structs::transfer_ip_row::TransferIpRow;
use crate::queues::structs::user_row::UserRow;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_hash::TorrentHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracker_failure::TrackerFailure;
use crate::tracker::structs::user::User;

/// Retry hints, in seconds, by failure class.
const INTERVAL_VALIDATION: u64 = 3600;
const INTERVAL_UNKNOWN_TORRENT: u64 = 300;
const INTERVAL_PRUNED_TORRENT: u64 = 900;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(
        &self,
        remote_addr: IpAddr,
        proxy_header: Option<&str>,
        query: HashMap<String, QueryValues>,
    ) -> Result<AnnounceQueryRequest, TrackerFailure>
    {
        // Occurrences that are not exactly 20 bytes are dropped silently;
        // what remains must be exactly one hash.
        let info_hash = match query.get("info_hash") {
            None => return Err(TrackerFailure::new("Malformed request - missing info_hash", INTERVAL_VALIDATION)),
            Some(values) => {
                let mut hashes = values.iter().filter(|value| value.len() == 20);
                match (hashes.next(), hashes.next()) {
                    (Some(hash), None) => TorrentHash::from(hash.as_slice()),
                    (None, _) => return Err(TrackerFailure::new("Malformed request - missing info_hash", INTERVAL_VALIDATION)),
                    (Some(_), Some(_)) => return Err(TrackerFailure::new("Malformed request - can only announce one info_hash", INTERVAL_VALIDATION)),
                }
            }
        };
        let peer_id = match query.get("peer_id").and_then(|values| values.first()) {
            Some(value) if value.len() == 20 => PeerId::from(value.as_slice()),
            _ => return Err(TrackerFailure::new("Malformed request - missing peer_id", INTERVAL_VALIDATION)),
        };
        let port = required_number::<u16>(&query, "port")?;
        if self.config.announce.strict_port && port < 1024 {
            return Err(TrackerFailure::new("Malformed request - illegal port", INTERVAL_VALIDATION));
        }
        let uploaded = required_number::<u64>(&query, "uploaded")?;
        let downloaded = required_number::<u64>(&query, "downloaded")?;
        let left = required_number::<u64>(&query, "left")?;
        let event = query.get("event")
            .and_then(|values| values.first())
            .map(|value| AnnounceEvent::from_wire(&String::from_utf8_lossy(value).to_lowercase()))
            .unwrap_or(AnnounceEvent::None);
        let numwant = optional_number::<u16>(&query, "numwant")?;
        let compact = optional_number::<u8>(&query, "compact")?.map(|value| value != 0).unwrap_or(true);
        let no_peer_id = optional_number::<u8>(&query, "no_peer_id")?.map(|value| value != 0).unwrap_or(false);
        let query_ip = query.get("ip")
            .and_then(|values| values.first())
            .and_then(|value| String::from_utf8_lossy(value).parse::<IpAddr>().ok());
        let client_ip = resolve_client_ip(query_ip, proxy_header, remote_addr)?;
        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            event,
            numwant,
            compact,
            no_peer_id,
            client_ip,
        })
    }

    /// Applies one validated announce to the swarm and produces the bencoded
    /// response body.
    #[tracing::instrument(level = "debug", skip(self, data, user))]
    pub fn handle_announce(
        &self,
        data: Arc<TorrentTracker>,
        announce: AnnounceQueryRequest,
        user: Arc<User>,
    ) -> Result<Vec<u8>, TrackerFailure>
    {
        let now = current_time();
        let client_id = self.match_approved_client(&announce.peer_id)
            .ok_or_else(|| TrackerFailure::new("Your client is not approved", INTERVAL_VALIDATION))?;
        let torrent = self.get_torrent(announce.info_hash)
            .ok_or_else(|| TrackerFailure::new("This torrent does not exist", INTERVAL_UNKNOWN_TORRENT))?;

        // A pruned torrent is revived by a seeder; leechers are turned away.
        if torrent.status.load(Ordering::Relaxed) != Torrent::STATUS_LIVE {
            if announce.left == 0 {
                if torrent.status.compare_exchange(
                    Torrent::STATUS_PRUNED,
                    Torrent::STATUS_LIVE,
                    Ordering::AcqRel,
                    Ordering::Relaxed,
                ).is_ok() {
                    debug!("[ANNOUNCE] Torrent {} revived by seeder of user {}", torrent.id, user.id);
                    self.update_stats(StatsEvent::TorrentsUnpruned, 1);
                    let tracker = data.clone();
                    let torrent_id = torrent.id;
                    tokio::spawn(async move {
                        let query = format!("UPDATE torrents SET Status = 0 WHERE ID = {torrent_id}");
                        let _ = tracker.execute_with_deadlock_retry(&query).await;
                    });
                }
            } else {
                return Err(TrackerFailure::new("This torrent does not exist", INTERVAL_PRUNED_TORRENT));
            }
        }

        let key = PeerKey { user_id: user.id, peer_id: announce.peer_id };
        let active = announce.event != AnnounceEvent::Stopped;
        let now_seeding = active && announce.left == 0;
        let snatch = announce.event == AnnounceEvent::Completed;

        let mut swarm = torrent.swarm.lock();
        let previous = swarm.seeders.get(&key).or_else(|| swarm.leechers.get(&key)).copied();

        if active {
            let peer = Peer {
                peer_id: announce.peer_id,
                addr: PeerAddress::new(announce.client_ip, announce.port),
                client_id,
                uploaded: announce.uploaded,
                downloaded: announce.downloaded,
                left: announce.left,
                start_time: previous.map(|p| p.start_time).unwrap_or(now),
                last_announce: now,
                torrent_id: torrent.id,
                user_id: user.id,
                seeding: now_seeding,
            };
            if now_seeding {
                if swarm.leechers.remove(&key).is_some() {
                    self.update_stats(StatsEvent::Leechers, -1);
                }
                if swarm.seeders.insert(key, peer).is_none() {
                    self.update_stats(StatsEvent::Seeders, 1);
                }
            } else {
                if swarm.seeders.remove(&key).is_some() {
                    self.update_stats(StatsEvent::Seeders, -1);
                }
                if swarm.leechers.insert(key, peer).is_none() {
                    self.update_stats(StatsEvent::Leechers, 1);
                }
            }
        } else {
            if swarm.seeders.remove(&key).is_some() {
                self.update_stats(StatsEvent::Seeders, -1);
            }
            if swarm.leechers.remove(&key).is_some() {
                self.update_stats(StatsEvent::Leechers, -1);
            }
        }
        torrent.store_counts(&swarm);

        if announce.left > 0
            && user.disable_download.load(Ordering::Relaxed)
            && !self.has_hit_and_run(user.id, torrent.id)
        {
            drop(swarm);
            return Err(TrackerFailure::new("Your download privileges are disabled", INTERVAL_VALIDATION));
        }

        // Deltas are taken against the stats the peer reported last time;
        // a client-side counter reset clamps to zero instead of going
        // negative, and a fresh peer contributes nothing.
        let peer_inactivity = self.config.intervals.peer_inactivity;
        let (raw_delta_up, raw_delta_down, delta_time) = match previous {
            Some(prev) => {
                let gap = now.saturating_sub(prev.last_announce);
                (
                    announce.uploaded.saturating_sub(prev.uploaded),
                    announce.downloaded.saturating_sub(prev.downloaded),
                    if gap as u64 > peer_inactivity { 0 } else { gap },
                )
            }
            None => (0, 0, 0),
        };
        let group_freeleech = self.get_group_freeleech(torrent.group());
        let up_factor = user.up_multiplier().abs()
            * group_freeleech.map(|g| g.up_multiplier.abs()).unwrap_or(1.0)
            * torrent.up_multiplier().abs();
        let down_factor = user.down_multiplier().abs()
            * group_freeleech.map(|g| g.down_multiplier.abs()).unwrap_or(1.0)
            * torrent.down_multiplier().abs();
        let delta_up = (raw_delta_up as f64 * up_factor) as u64;
        let delta_down = if self.is_global_freeleech() {
            0
        } else {
            (raw_delta_down as f64 * down_factor) as u64
        };
        let delta_seed_time = if now_seeding { delta_time } else { 0 };

        if now_seeding {
            torrent.last_action.store(now, Ordering::Relaxed);
        }
        if snatch {
            torrent.snatched.fetch_add(1, Ordering::Relaxed);
        }

        let complete = torrent.seeders_count.load(Ordering::Relaxed) as i64;
        let incomplete = torrent.leechers_count.load(Ordering::Relaxed) as i64;
        let downloaded = torrent.snatched.load(Ordering::Relaxed) as i64;
        let start_time = previous.map(|p| p.start_time).unwrap_or(now);

        let numwant = announce.numwant
            .unwrap_or(self.config.announce.numwant)
            .min(self.config.announce.max_numwant) as usize;
        let selected = select_peers(&swarm, user.id, now_seeding, active, numwant);
        drop(swarm);

        self.queue_torrent_row(TorrentRow {
            id: torrent.id,
            seeders: complete as u32,
            leechers: incomplete as u32,
            snatched_delta: snatch as u8,
            last_action: torrent.last_action.load(Ordering::Relaxed),
        });
        if raw_delta_up > 0 || raw_delta_down > 0 {
            self.queue_user_row(UserRow {
                id: user.id,
                uploaded_delta: delta_up,
                downloaded_delta: delta_down,
                raw_up_delta: raw_delta_up,
                raw_down_delta: raw_delta_down,
            });
        }
        self.queue_transfer_history_row(TransferHistoryRow {
            user_id: user.id,
            torrent_id: torrent.id,
            uploaded_delta: delta_up,
            downloaded_delta: delta_down,
            remaining: announce.left,
            seeding: now_seeding,
            start_time,
            last_announce: now,
            active_delta: delta_time,
            seed_delta: delta_seed_time,
            active,
            snatched_delta: snatch as u8,
        });
        let persisted_ip = if user.tracker_hide.load(Ordering::Relaxed) {
            Ipv4Addr::LOCALHOST
        } else {
            announce.client_ip
        };
        self.queue_transfer_ip_row(TransferIpRow {
            user_id: user.id,
            torrent_id: torrent.id,
            client_id,
            ip: persisted_ip,
            port: announce.port,
            uploaded_delta: raw_delta_up,
            downloaded_delta: raw_delta_down,
            last_announce: now,
        });
        if snatch {
            self.queue_snatch_row(SnatchRow { user_id: user.id, torrent_id: torrent.id, snatched_time: now });
        }
        if self.config.record_announces {
            self.queue_event_record(&AnnounceEventRecord {
                time: now,
                user_id: user.id,
                torrent_id: torrent.id,
                info_hash: announce.info_hash.to_string(),
                ip: announce.client_ip.to_string(),
                port: announce.port,
                event: announce.event.as_str(),
                uploaded: announce.uploaded,
                downloaded: announce.downloaded,
                left: announce.left,
                delta_up,
                delta_down,
                seeding: now_seeding,
            });
        }

        // Spreading re-announces over the drift window keeps rejoining
        // clients from synchronizing into a thundering herd.
        let drift = self.config.intervals.announce_drift;
        let interval = self.config.intervals.announce
            + if drift > 0 { rand::rng().random_range(0..=drift) } else { 0 };
        let min_interval = self.config.intervals.min_announce;

        if announce.compact {
            let mut peers_bytes = Vec::with_capacity(selected.len() * 6);
            for (addr, _) in &selected {
                peers_bytes.extend_from_slice(&addr.0);
            }
            return Ok(ben_map! {
                "complete" => ben_int!(complete),
                "downloaded" => ben_int!(downloaded),
                "incomplete" => ben_int!(incomplete),
                "interval" => ben_int!(interval as i64),
                "min interval" => ben_int!(min_interval as i64),
                "peers" => ben_bytes!(peers_bytes)
            }.encode());
        }
        let mut peers_list = ben_list!();
        let peers_list_mut = peers_list.list_mut().unwrap();
        for (addr, peer_id) in &selected {
            if announce.no_peer_id {
                peers_list_mut.push(ben_map! {
                    "ip" => ben_bytes!(addr.ip().to_string()),
                    "port" => ben_int!(addr.port() as i64)
                });
            } else {
                peers_list_mut.push(ben_map! {
                    "ip" => ben_bytes!(addr.ip().to_string()),
                    "peer id" => ben_bytes!(peer_id.0.to_vec()),
                    "port" => ben_int!(addr.port() as i64)
                });
            }
        }
        Ok(ben_map! {
            "complete" => ben_int!(complete),
            "downloaded" => ben_int!(downloaded),
            "incomplete" => ben_int!(incomplete),
            "interval" => ben_int!(interval as i64),
            "min interval" => ben_int!(min_interval as i64),
            "peers" => peers_list
        }.encode())
    }
}

/// Picks the peer slate under the swarm lock. Map iteration order is
/// randomized by the hasher seed, which is the sampling randomness.
///
/// A seeding client only receives leechers. A leeching client receives
/// seeders first, capped at one per user so a multihomed member cannot
/// monopolize the slate, then leechers to fill up. The requesting member's
/// own peers are never returned.
fn select_peers(
    swarm: &crate::tracker::structs::torrent_swarm::TorrentSwarm,
    self_user_id: u32,
    now_seeding: bool,
    active: bool,
    numwant: usize,
) -> Vec<(PeerAddress, PeerId)>
{
    let mut selected = Vec::new();
    if !active || numwant == 0 {
        return selected;
    }
    if now_seeding {
        for (key, peer) in swarm.leechers.iter() {
            if key.user_id == self_user_id {
                continue;
            }
            selected.push((peer.addr, peer.peer_id));
            if selected.len() >= numwant {
                break;
            }
        }
        return selected;
    }
    let mut seen_users = HashSet::new();
    for (key, peer) in swarm.seeders.iter() {
        if key.user_id == self_user_id || !seen_users.insert(key.user_id) {
            continue;
        }
        selected.push((peer.addr, peer.peer_id));
        if selected.len() >= numwant {
            break;
        }
    }
    if selected.len() < numwant {
        for (key, peer) in swarm.leechers.iter() {
            if key.user_id == self_user_id {
                continue;
            }
            selected.push((peer.addr, peer.peer_id));
            if selected.len() >= numwant {
                break;
            }
        }
    }
    selected
}

fn required_number<T: std::str::FromStr>(
    query: &HashMap<String, QueryValues>,
    field: &str,
) -> Result<T, TrackerFailure>
{
    query.get(field)
        .and_then(|values| values.first())
        .and_then(|value| std::str::from_utf8(value).ok())
        .and_then(|value| value.parse::<T>().ok())
        .ok_or_else(|| TrackerFailure::new(&format!("Malformed request - missing {field}"), INTERVAL_VALIDATION))
}

fn optional_number<T: std::str::FromStr>(
    query: &HashMap<String, QueryValues>,
    field: &str,
) -> Result<Option<T>, TrackerFailure>
{
    match query.get(field).and_then(|values| values.first()) {
        None => Ok(None),
        Some(value) => std::str::from_utf8(value)
            .ok()
            .and_then(|value| value.parse::<T>().ok())
            .map(Some)
            .ok_or_else(|| TrackerFailure::new(&format!("Malformed request - invalid {field}"), INTERVAL_VALIDATION)),
    }
}

/// Resolution order: a routable `ip=` parameter, then the first routable
/// entry of the configured proxy header, then the TCP peer address. The
/// result must be (or map to) IPv4.
fn resolve_client_ip(
    query_ip: Option<IpAddr>,
    proxy_header: Option<&str>,
    remote_addr: IpAddr,
) -> Result<Ipv4Addr, TrackerFailure>
{
    let resolved = query_ip
        .filter(|ip| is_routable(*ip))
        .or_else(|| {
            proxy_header.and_then(|header| {
                header
                    .split(',')
                    .filter_map(|entry| entry.trim().parse::<IpAddr>().ok())
                    .find(|ip| is_routable(*ip))
            })
        })
        .unwrap_or(remote_addr);
    match resolved {
        IpAddr::V4(ip) => Ok(ip),
        IpAddr::V6(ip) => ip
            .to_ipv4_mapped()
            .ok_or_else(|| TrackerFailure::new("Failed to parse IP address", INTERVAL_VALIDATION)),
    }
}

fn is_routable(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => {
            !(ip.is_unspecified()
                || ip.is_loopback()
                || ip.is_private()
                || ip.is_link_local()
                || ip.is_broadcast()
                || ip.is_documentation())
        }
        IpAddr::V6(ip) => {
            !(ip.is_unspecified() || ip.is_loopback() || (ip.segments()[0] & 0xfe00) == 0xfc00 || (ip.segments()[0] & 0xffc0) == 0xfe80)
        }
    }
}
