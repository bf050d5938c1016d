//! Snapshot map aliases.
//!
//! These are the immutable maps published behind the tracker's atomic
//! pointers. Writers allocate a replacement, populate it, then swap.

use ahash::AHasher;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasherDefault;
use std::sync::Arc;
use crate::tracker::structs::group_freeleech::GroupFreeleech;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_group::TorrentGroup;
use crate::tracker::structs::torrent_hash::TorrentHash;
use crate::tracker::structs::user::User;
use crate::tracker::structs::user_torrent_pair::UserTorrentPair;

/// A HashMap using the aHash algorithm; its randomized seed also provides
/// the sampling randomness of peer selection.
pub type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;

pub type TorrentsMap = AHashMap<TorrentHash, Arc<Torrent>>;
pub type UsersMap = AHashMap<Passkey, Arc<User>>;
pub type HitAndRunSet = HashSet<UserTorrentPair>;
/// Approved clients ordered by id; the value is a peer-id prefix.
pub type ApprovedClientsMap = BTreeMap<u16, Vec<u8>>;
pub type GroupFreeleechMap = HashMap<TorrentGroup, GroupFreeleech>;
