#![allow(dead_code)]
use rand::RngExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use swarmtrack::config::structs::configuration::Configuration;
use swarmtrack::tracker::structs::passkey::Passkey;
use swarmtrack::tracker::structs::peer_id::PeerId;
use swarmtrack::tracker::structs::torrent::Torrent;
use swarmtrack::tracker::structs::torrent_group::TorrentGroup;
use swarmtrack::tracker::structs::torrent_hash::TorrentHash;
use swarmtrack::tracker::structs::torrent_tracker::TorrentTracker;
use swarmtrack::tracker::structs::user::User;

pub type TestTracker = Arc<TorrentTracker>;

pub fn create_test_config() -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.intervals.announce_drift = 0;
    Arc::new(config)
}

pub async fn create_test_tracker() -> TestTracker {
    let tracker = Arc::new(TorrentTracker::new(create_test_config(), false).await);
    tracker.publish_approved_clients(BTreeMap::from([
        (1u16, b"-TR2".to_vec()),
        (3u16, b"-DE13".to_vec()),
    ]));
    tracker
}

pub fn random_info_hash() -> TorrentHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    TorrentHash(bytes)
}

/// A random peer id carrying an approved Transmission prefix.
pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let mut bytes: [u8; 20] = rng.random();
    bytes[..8].copy_from_slice(b"-TR2920-");
    PeerId(bytes)
}

pub fn add_torrent(tracker: &TorrentTracker, info_hash: TorrentHash, id: u32) -> Arc<Torrent> {
    let torrent = Arc::new(Torrent::new(
        id,
        0,
        0,
        0,
        1.0,
        1.0,
        TorrentGroup { torrent_type: *b"movies\0\0", id: 1 },
    ));
    let mut torrents = (*tracker.torrents.load_full()).clone();
    torrents.insert(info_hash, torrent.clone());
    tracker.publish_torrents(torrents);
    torrent
}

pub fn add_user(tracker: &TorrentTracker, passkey: &str, id: u32) -> Arc<User> {
    let user = Arc::new(User::new(id, false, false, 1.0, 1.0));
    let mut users = (*tracker.users.load_full()).clone();
    users.insert(passkey.parse::<Passkey>().unwrap(), user.clone());
    tracker.publish_users(users);
    user
}

/// Percent-encodes raw binary for use in a query string.
pub fn encode_binary(data: &[u8]) -> String {
    percent_encoding::percent_encode(data, percent_encoding::NON_ALPHANUMERIC).to_string()
}
