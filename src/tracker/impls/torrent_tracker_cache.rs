//! Binary swarm snapshots.
//!
//! Both hot maps are periodically serialized to disk so a restart can
//! repopulate the store before the first database reload. Files are written
//! to a `.tmp` sibling, fsynced, then renamed over the live file; a reader
//! never observes a half-written cache.
//!
//! The format is a varint version, a varint record count, then fixed-layout
//! little-endian records. The version is bumped whenever a struct changes;
//! a mismatched file is discarded, not migrated.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{info, warn};
use std::fs;
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use crate::common::common::{read_varint, write_varint};
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_group::TorrentGroup;
use crate::tracker::structs::torrent_hash::TorrentHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user::User;
use crate::tracker::types::{AHashMap, TorrentsMap, UsersMap};

pub const CACHE_VERSION: u64 = 1;

impl TorrentTracker {
    /// Snapshots both maps to their cache files.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn save_cache(&self) -> std::io::Result<()>
    {
        let torrents = self.encode_torrent_cache();
        write_atomic(&self.config.cache.torrents, &torrents)?;
        let users = self.encode_user_cache();
        write_atomic(&self.config.cache.users, &users)?;
        info!(
            "[CACHE] Wrote {} and {} ({} + {} bytes)",
            self.config.cache.torrents,
            self.config.cache.users,
            torrents.len(),
            users.len()
        );
        Ok(())
    }

    /// Repopulates the store from the cache files. Missing or stale files
    /// are skipped; the reloader backfills from the database either way.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn load_cache(&self)
    {
        match fs::read(&self.config.cache.torrents) {
            Ok(data) => match Self::decode_torrent_cache(&data) {
                Ok(torrents) => {
                    info!("[CACHE] Loaded {} torrents from {}", torrents.len(), self.config.cache.torrents);
                    self.publish_torrents(torrents);
                }
                Err(e) => warn!("[CACHE] Discarding {}: {}", self.config.cache.torrents, e),
            },
            Err(e) => info!("[CACHE] No torrent cache: {e}"),
        }
        match fs::read(&self.config.cache.users) {
            Ok(data) => match Self::decode_user_cache(&data) {
                Ok(users) => {
                    info!("[CACHE] Loaded {} users from {}", users.len(), self.config.cache.users);
                    self.publish_users(users);
                }
                Err(e) => warn!("[CACHE] Discarding {}: {}", self.config.cache.users, e),
            },
            Err(e) => info!("[CACHE] No user cache: {e}"),
        }
    }

    pub fn encode_torrent_cache(&self) -> Vec<u8>
    {
        let torrents = self.torrents.load_full();
        let mut buffer = Vec::with_capacity(64 + torrents.len() * 128);
        write_varint(&mut buffer, CACHE_VERSION);
        write_varint(&mut buffer, torrents.len() as u64);
        for (hash, torrent) in torrents.iter() {
            buffer.extend_from_slice(&hash.0);
            {
                let swarm = torrent.swarm.lock();
                write_varint(&mut buffer, swarm.seeders.len() as u64);
                for (key, peer) in swarm.seeders.iter() {
                    encode_peer(&mut buffer, key, peer);
                }
                write_varint(&mut buffer, swarm.leechers.len() as u64);
                for (key, peer) in swarm.leechers.iter() {
                    encode_peer(&mut buffer, key, peer);
                }
            }
            let group = torrent.group();
            buffer.extend_from_slice(&group.torrent_type);
            let _ = buffer.write_u32::<LittleEndian>(group.id);
            let _ = buffer.write_u32::<LittleEndian>(torrent.id);
            let _ = buffer.write_u16::<LittleEndian>(torrent.snatched.load(Ordering::Relaxed));
            let _ = buffer.write_u8(torrent.status.load(Ordering::Relaxed));
            let _ = buffer.write_i64::<LittleEndian>(torrent.last_action.load(Ordering::Relaxed));
            let _ = buffer.write_f64::<LittleEndian>(torrent.up_multiplier());
            let _ = buffer.write_f64::<LittleEndian>(torrent.down_multiplier());
        }
        buffer
    }

    pub fn decode_torrent_cache(data: &[u8]) -> Result<TorrentsMap, CustomError>
    {
        let mut cursor = Cursor::new(data);
        let version = read_varint(&mut cursor)?;
        if version != CACHE_VERSION {
            return Err(CustomError::new(&format!("cache version {version}, expected {CACHE_VERSION}")));
        }
        let count = read_varint(&mut cursor)?;
        let mut torrents = TorrentsMap::default();
        for _ in 0..count {
            let mut hash = [0u8; 20];
            read_bytes(&mut cursor, &mut hash)?;
            let seeder_count = read_varint(&mut cursor)?;
            let mut seeders = AHashMap::default();
            for _ in 0..seeder_count {
                let (key, peer) = decode_peer(&mut cursor)?;
                seeders.insert(key, peer);
            }
            let leecher_count = read_varint(&mut cursor)?;
            let mut leechers = AHashMap::default();
            for _ in 0..leecher_count {
                let (key, peer) = decode_peer(&mut cursor)?;
                leechers.insert(key, peer);
            }
            let mut torrent_type = [0u8; 8];
            read_bytes(&mut cursor, &mut torrent_type)?;
            let group_id = cursor.read_u32::<LittleEndian>().map_err(cache_eof)?;
            let id = cursor.read_u32::<LittleEndian>().map_err(cache_eof)?;
            let snatched = cursor.read_u16::<LittleEndian>().map_err(cache_eof)?;
            let status = cursor.read_u8().map_err(cache_eof)?;
            let last_action = cursor.read_i64::<LittleEndian>().map_err(cache_eof)?;
            let up_multiplier = cursor.read_f64::<LittleEndian>().map_err(cache_eof)?;
            let down_multiplier = cursor.read_f64::<LittleEndian>().map_err(cache_eof)?;
            let torrent = Torrent::new(
                id,
                status,
                snatched,
                last_action,
                up_multiplier,
                down_multiplier,
                TorrentGroup { torrent_type, id: group_id },
            );
            {
                let mut swarm = torrent.swarm.lock();
                swarm.seeders = seeders;
                swarm.leechers = leechers;
                torrent.store_counts(&swarm);
            }
            torrents.insert(TorrentHash(hash), Arc::new(torrent));
        }
        Ok(torrents)
    }

    pub fn encode_user_cache(&self) -> Vec<u8>
    {
        let users = self.users.load_full();
        let mut buffer = Vec::with_capacity(64 + users.len() * 64);
        write_varint(&mut buffer, CACHE_VERSION);
        write_varint(&mut buffer, users.len() as u64);
        for (passkey, user) in users.iter() {
            write_varint(&mut buffer, passkey.0.len() as u64);
            buffer.extend_from_slice(&passkey.0);
            let _ = buffer.write_u32::<LittleEndian>(user.id);
            let _ = buffer.write_u8(user.disable_download.load(Ordering::Relaxed) as u8);
            let _ = buffer.write_u8(user.tracker_hide.load(Ordering::Relaxed) as u8);
            let _ = buffer.write_f64::<LittleEndian>(user.up_multiplier());
            let _ = buffer.write_f64::<LittleEndian>(user.down_multiplier());
        }
        buffer
    }

    pub fn decode_user_cache(data: &[u8]) -> Result<UsersMap, CustomError>
    {
        let mut cursor = Cursor::new(data);
        let version = read_varint(&mut cursor)?;
        if version != CACHE_VERSION {
            return Err(CustomError::new(&format!("cache version {version}, expected {CACHE_VERSION}")));
        }
        let count = read_varint(&mut cursor)?;
        let mut users = UsersMap::default();
        for _ in 0..count {
            let passkey_len = read_varint(&mut cursor)? as usize;
            if passkey_len != 32 {
                return Err(CustomError::new("malformed passkey record"));
            }
            let mut passkey = [0u8; 32];
            read_bytes(&mut cursor, &mut passkey)?;
            let id = cursor.read_u32::<LittleEndian>().map_err(cache_eof)?;
            let disable_download = cursor.read_u8().map_err(cache_eof)? != 0;
            let tracker_hide = cursor.read_u8().map_err(cache_eof)? != 0;
            let up_multiplier = cursor.read_f64::<LittleEndian>().map_err(cache_eof)?;
            let down_multiplier = cursor.read_f64::<LittleEndian>().map_err(cache_eof)?;
            users.insert(
                Passkey(passkey),
                Arc::new(User::new(id, disable_download, tracker_hide, up_multiplier, down_multiplier)),
            );
        }
        Ok(users)
    }
}

fn encode_peer(buffer: &mut Vec<u8>, key: &PeerKey, peer: &Peer)
{
    let _ = buffer.write_u32::<LittleEndian>(key.user_id);
    buffer.extend_from_slice(&key.peer_id.0);
    buffer.extend_from_slice(&peer.peer_id.0);
    buffer.extend_from_slice(&peer.addr.0);
    let _ = buffer.write_u64::<LittleEndian>(peer.uploaded);
    let _ = buffer.write_u64::<LittleEndian>(peer.downloaded);
    let _ = buffer.write_u64::<LittleEndian>(peer.left);
    let _ = buffer.write_i64::<LittleEndian>(peer.start_time);
    let _ = buffer.write_i64::<LittleEndian>(peer.last_announce);
    let _ = buffer.write_u32::<LittleEndian>(peer.torrent_id);
    let _ = buffer.write_u32::<LittleEndian>(peer.user_id);
    let _ = buffer.write_u16::<LittleEndian>(peer.client_id);
    let _ = buffer.write_u8(peer.seeding as u8);
}

fn decode_peer(cursor: &mut Cursor<&[u8]>) -> Result<(PeerKey, Peer), CustomError>
{
    let key_user_id = cursor.read_u32::<LittleEndian>().map_err(cache_eof)?;
    let mut key_peer_id = [0u8; 20];
    read_bytes(cursor, &mut key_peer_id)?;
    let mut peer_id = [0u8; 20];
    read_bytes(cursor, &mut peer_id)?;
    let mut addr = [0u8; 6];
    read_bytes(cursor, &mut addr)?;
    let uploaded = cursor.read_u64::<LittleEndian>().map_err(cache_eof)?;
    let downloaded = cursor.read_u64::<LittleEndian>().map_err(cache_eof)?;
    let left = cursor.read_u64::<LittleEndian>().map_err(cache_eof)?;
    let start_time = cursor.read_i64::<LittleEndian>().map_err(cache_eof)?;
    let last_announce = cursor.read_i64::<LittleEndian>().map_err(cache_eof)?;
    let torrent_id = cursor.read_u32::<LittleEndian>().map_err(cache_eof)?;
    let user_id = cursor.read_u32::<LittleEndian>().map_err(cache_eof)?;
    let client_id = cursor.read_u16::<LittleEndian>().map_err(cache_eof)?;
    let seeding = cursor.read_u8().map_err(cache_eof)? != 0;
    Ok((
        PeerKey { user_id: key_user_id, peer_id: PeerId(key_peer_id) },
        Peer {
            peer_id: PeerId(peer_id),
            addr: PeerAddress(addr),
            client_id,
            uploaded,
            downloaded,
            left,
            start_time,
            last_announce,
            torrent_id,
            user_id,
            seeding,
        },
    ))
}

fn read_bytes(cursor: &mut Cursor<&[u8]>, target: &mut [u8]) -> Result<(), CustomError>
{
    cursor.read_exact(target).map_err(|_| CustomError::new("truncated cache record"))
}

fn cache_eof(_: std::io::Error) -> CustomError
{
    CustomError::new("truncated cache record")
}

fn write_atomic(path: &str, data: &[u8]) -> std::io::Result<()>
{
    let tmp = format!("{path}.tmp");
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, path)
}
