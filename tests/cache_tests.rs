mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use swarmtrack::config::structs::configuration::Configuration;
use swarmtrack::tracker::enums::announce_event::AnnounceEvent;
use swarmtrack::tracker::structs::announce_query_request::AnnounceQueryRequest;
use swarmtrack::tracker::structs::peer_key::PeerKey;
use swarmtrack::tracker::structs::torrent_tracker::TorrentTracker;

fn announce(info_hash: swarmtrack::tracker::structs::torrent_hash::TorrentHash, peer_id: swarmtrack::tracker::structs::peer_id::PeerId, left: u64) -> AnnounceQueryRequest {
    AnnounceQueryRequest {
        info_hash,
        peer_id,
        port: 6881,
        uploaded: 1024,
        downloaded: 2048,
        left,
        event: AnnounceEvent::Started,
        numwant: Some(0),
        compact: true,
        no_peer_id: false,
        client_ip: std::net::Ipv4Addr::new(93, 184, 216, 34),
    }
}

#[tokio::test]
async fn test_cache_round_trip_preserves_store() {
    let tracker = common::create_test_tracker().await;
    let info_hash = common::random_info_hash();
    let torrent = common::add_torrent(&tracker, info_hash, 900);
    let user = common::add_user(&tracker, "tbHfQDQ9xDaQdsNv5CZBtHPfk7KGzaCw", 42);
    let seeder_id = common::random_peer_id();
    let leecher_id = common::random_peer_id();
    tracker.handle_announce(tracker.clone(), announce(info_hash, seeder_id, 0), user.clone()).unwrap();
    tracker.handle_announce(tracker.clone(), announce(info_hash, leecher_id, 512), user.clone()).unwrap();

    let torrents_blob = tracker.encode_torrent_cache();
    let users_blob = tracker.encode_user_cache();

    let restored_torrents = TorrentTracker::decode_torrent_cache(&torrents_blob).unwrap();
    let restored_users = TorrentTracker::decode_user_cache(&users_blob).unwrap();

    assert_eq!(restored_torrents.len(), 1);
    let restored = restored_torrents.get(&info_hash).unwrap();
    assert_eq!(restored.id, torrent.id);
    assert_eq!(restored.group().id, torrent.group().id);
    assert_eq!(restored.group().torrent_type, torrent.group().torrent_type);
    assert_eq!(restored.seeders_count.load(Ordering::Relaxed), 1);
    assert_eq!(restored.leechers_count.load(Ordering::Relaxed), 1);
    let swarm = restored.swarm.lock();
    let key = PeerKey { user_id: 42, peer_id: leecher_id };
    let peer = swarm.leechers.get(&key).expect("leecher must survive the round trip");
    assert_eq!(peer.uploaded, 1024);
    assert_eq!(peer.downloaded, 2048);
    assert_eq!(peer.left, 512);
    assert_eq!(peer.addr.ip(), std::net::Ipv4Addr::new(93, 184, 216, 34));
    assert_eq!(peer.addr.port(), 6881);

    assert_eq!(restored_users.len(), 1);
    let passkey = "tbHfQDQ9xDaQdsNv5CZBtHPfk7KGzaCw".parse().unwrap();
    let restored_user = restored_users.get(&passkey).unwrap();
    assert_eq!(restored_user.id, 42);
    assert_eq!(restored_user.up_multiplier(), 1.0);
}

#[tokio::test]
async fn test_cache_files_written_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Configuration::init();
    config.intervals.announce_drift = 0;
    config.cache.torrents = dir.path().join("torrents.bin").to_string_lossy().to_string();
    config.cache.users = dir.path().join("users.bin").to_string_lossy().to_string();
    let tracker = Arc::new(TorrentTracker::new(Arc::new(config), false).await);
    let info_hash = common::random_info_hash();
    common::add_torrent(&tracker, info_hash, 901);
    common::add_user(&tracker, "tbHfQDQ9xDaQdsNv5CZBtHPfk7KGzaCw", 42);

    tracker.save_cache().unwrap();

    assert!(dir.path().join("torrents.bin").exists());
    assert!(dir.path().join("users.bin").exists());
    assert!(!dir.path().join("torrents.bin.tmp").exists(), "tmp file must be renamed away");

    // a second tracker warm-starts from the files
    let tracker2 = Arc::new(TorrentTracker::new(Arc::new(tracker.config.as_ref().clone()), false).await);
    tracker2.load_cache();
    assert!(tracker2.get_torrent(info_hash).is_some());
    assert_eq!(tracker2.get_stats().torrents, 1);
    assert_eq!(tracker2.get_stats().users, 1);
}

#[tokio::test]
async fn test_cache_rejects_unknown_version() {
    let mut blob = vec![99u8]; // varint version 99
    blob.push(0); // zero records
    assert!(TorrentTracker::decode_torrent_cache(&blob).is_err());
    assert!(TorrentTracker::decode_user_cache(&blob).is_err());
}
