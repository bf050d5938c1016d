#[cfg(test)]
mod tracker_tests {
    use std::collections::{BTreeMap, HashMap};
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use crate::common::common::{current_time, QueryValues};
    use crate::config::structs::configuration::Configuration;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
    use crate::tracker::structs::passkey::Passkey;
    use crate::tracker::structs::peer::Peer;
    use crate::tracker::structs::peer_address::PeerAddress;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::peer_key::PeerKey;
    use crate::tracker::structs::torrent::Torrent;
    use crate::tracker::structs::torrent_group::TorrentGroup;
    use crate::tracker::structs::torrent_hash::TorrentHash;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;
    use crate::tracker::structs::tracker_failure::TrackerFailure;
    use crate::tracker::structs::user::User;
    use crate::tracker::structs::user_torrent_pair::UserTorrentPair;

    const REMOTE: IpAddr = IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34));

    async fn memory_tracker() -> Arc<TorrentTracker> {
        let mut config = Configuration::init();
        config.intervals.announce_drift = 0;
        let tracker = Arc::new(TorrentTracker::new(Arc::new(config), false).await);
        tracker.publish_approved_clients(BTreeMap::from([
            (1u16, b"-TR2".to_vec()),
            (3u16, b"-DE13".to_vec()),
        ]));
        tracker
    }

    fn add_user(tracker: &TorrentTracker, passkey: &str, user: User) -> Arc<User> {
        let user = Arc::new(user);
        let mut users = (*tracker.users.load_full()).clone();
        users.insert(passkey.parse::<Passkey>().unwrap(), user.clone());
        tracker.publish_users(users);
        user
    }

    fn add_torrent(tracker: &TorrentTracker, info_hash: TorrentHash, torrent: Torrent) -> Arc<Torrent> {
        let torrent = Arc::new(torrent);
        let mut torrents = (*tracker.torrents.load_full()).clone();
        torrents.insert(info_hash, torrent.clone());
        tracker.publish_torrents(torrents);
        torrent
    }

    fn plain_torrent(id: u32) -> Torrent {
        Torrent::new(id, 0, 0, 0, 1.0, 1.0, TorrentGroup { torrent_type: *b"movies\0\0", id: 7 })
    }

    fn plain_user(id: u32) -> User {
        User::new(id, false, false, 1.0, 1.0)
    }

    fn announce_request(info_hash: TorrentHash, peer_id: &[u8; 20], uploaded: u64, downloaded: u64, left: u64, event: AnnounceEvent) -> AnnounceQueryRequest {
        AnnounceQueryRequest {
            info_hash,
            peer_id: PeerId(*peer_id),
            port: 6881,
            uploaded,
            downloaded,
            left,
            event,
            numwant: Some(50),
            compact: true,
            no_peer_id: false,
            client_ip: Ipv4Addr::new(93, 184, 216, 34),
        }
    }

    fn query_of(pairs: Vec<(&str, Vec<u8>)>) -> HashMap<String, QueryValues> {
        let mut query: HashMap<String, QueryValues> = HashMap::new();
        for (key, value) in pairs {
            query.entry(key.to_string()).or_default().push(value);
        }
        query
    }

    #[test]
    fn test_failure_reason_exact_serialization() {
        assert_eq!(
            TrackerFailure::new("error message", 5).encode(),
            b"d14:failure reason13:error message8:intervali5ee".to_vec()
        );
    }

    #[tokio::test]
    async fn test_fresh_leecher_lands_in_leechers() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([1u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(10));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        let result = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user,
        );

        assert!(result.is_ok());
        assert_eq!(torrent.leechers_count.load(Ordering::Relaxed), 1);
        assert_eq!(torrent.seeders_count.load(Ordering::Relaxed), 0);
        let swarm = torrent.swarm.lock();
        assert_eq!(swarm.leechers.len(), 1);
        assert!(swarm.leechers.values().all(|peer| !peer.seeding));
    }

    #[tokio::test]
    async fn test_completed_moves_leecher_to_seeders_and_snatches() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([2u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(11));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user.clone(),
        ).unwrap();
        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 5000, 0, AnnounceEvent::Completed),
            user,
        ).unwrap();

        assert_eq!(torrent.seeders_count.load(Ordering::Relaxed), 1);
        assert_eq!(torrent.leechers_count.load(Ordering::Relaxed), 0);
        assert_eq!(torrent.snatched.load(Ordering::Relaxed), 1);
        assert!(!tracker.queues.snatches.is_empty(), "completed must enqueue a snatch row");
    }

    #[tokio::test]
    async fn test_silent_promotion_is_cross_seed_safe() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([3u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(12));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1, AnnounceEvent::Started),
            user.clone(),
        ).unwrap();
        // left drops to zero without an explicit completed event
        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 0, AnnounceEvent::None),
            user,
        ).unwrap();

        assert_eq!(torrent.seeders_count.load(Ordering::Relaxed), 1);
        assert_eq!(torrent.leechers_count.load(Ordering::Relaxed), 0);
        assert_eq!(torrent.snatched.load(Ordering::Relaxed), 0, "no snatch credit without completed");
        assert!(tracker.queues.snatches.is_empty());
    }

    #[tokio::test]
    async fn test_stopped_removes_peer() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([4u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(13));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user.clone(),
        ).unwrap();
        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Stopped),
            user,
        ).unwrap();

        assert_eq!(torrent.leechers_count.load(Ordering::Relaxed), 0);
        assert_eq!(torrent.seeders_count.load(Ordering::Relaxed), 0);
        let swarm = torrent.swarm.lock();
        assert!(swarm.seeders.is_empty() && swarm.leechers.is_empty());
    }

    #[tokio::test]
    async fn test_client_gate_prefix_match() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([5u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(14));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        let accepted = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user.clone(),
        );
        assert!(accepted.is_ok());
        {
            let swarm = torrent.swarm.lock();
            assert!(swarm.leechers.values().all(|peer| peer.client_id == 1));
        }

        let rejected = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-QB4000-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user,
        );
        assert_eq!(rejected.unwrap_err().reason, "Your client is not approved");
    }

    #[tokio::test]
    async fn test_multiplier_delta_accounting() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([6u8; 20]);
        add_torrent(&tracker, hash, plain_torrent(15));
        let user = add_user(
            &tracker,
            "tbHfQDQ9xDaQdsNv5CZBtHPfk7KGzaCw",
            User::new(200, false, false, 0.5, 2.0),
        );

        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 100000, AnnounceEvent::Started),
            user.clone(),
        ).unwrap();
        assert!(tracker.queues.users.is_empty(), "a fresh peer produces no accounting");

        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 245, 83472, 16528, AnnounceEvent::None),
            user,
        ).unwrap();

        let row = tracker.queues.users.receiver.try_recv().unwrap();
        assert_eq!(String::from_utf8(row).unwrap(), "(200,122,166944,245,83472)");
    }

    #[tokio::test]
    async fn test_seeder_announce_revives_pruned_torrent() {
        let tracker = memory_tracker().await;
        let hash: TorrentHash = "72ef20eddcb5438f73b6d88d78c4dfc1667b8938".parse().unwrap();
        let torrent = add_torrent(
            &tracker,
            hash,
            Torrent::new(16, 1, 0, 0, 1.0, 1.0, TorrentGroup { torrent_type: *b"movies\0\0", id: 7 }),
        );
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        let result = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 0, AnnounceEvent::None),
            user,
        );

        assert!(result.is_ok());
        assert_eq!(torrent.status.load(Ordering::Relaxed), Torrent::STATUS_LIVE);
    }

    #[tokio::test]
    async fn test_pruned_torrent_rejects_leecher() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([7u8; 20]);
        add_torrent(
            &tracker,
            hash,
            Torrent::new(17, 1, 0, 0, 1.0, 1.0, TorrentGroup { torrent_type: *b"movies\0\0", id: 7 }),
        );
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        let result = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user,
        );
        let failure = result.unwrap_err();
        assert_eq!(failure.reason, "This torrent does not exist");
        assert_eq!(failure.interval, 900);
    }

    #[tokio::test]
    async fn test_download_gate_blocks_without_hit_and_run() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([8u8; 20]);
        add_torrent(&tracker, hash, plain_torrent(18));
        let user = add_user(
            &tracker,
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
            User::new(300, true, false, 1.0, 1.0),
        );

        let blocked = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user.clone(),
        );
        assert_eq!(blocked.unwrap_err().reason, "Your download privileges are disabled");

        let mut records = (*tracker.hit_and_runs.load_full()).clone();
        records.insert(UserTorrentPair { user_id: 300, torrent_id: 18 });
        tracker.publish_hit_and_runs(records);

        let unlocked = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 1000, AnnounceEvent::Started),
            user,
        );
        assert!(unlocked.is_ok(), "a hit-and-run record unlocks redownload");
    }

    #[tokio::test]
    async fn test_leecher_receives_seeders_deduplicated_per_user() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([9u8; 20]);
        add_torrent(&tracker, hash, plain_torrent(19));
        let seeder = add_user(&tracker, "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB", plain_user(101));
        let leecher = add_user(&tracker, "CCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC", plain_user(102));

        // one multihomed seeder with two clients
        for peer_id in [b"-TR2920-aaaaaaaaaaaa", b"-TR2920-bbbbbbbbbbbb"] {
            tracker.handle_announce(
                tracker.clone(),
                announce_request(hash, peer_id, 0, 0, 0, AnnounceEvent::None),
                seeder.clone(),
            ).unwrap();
        }

        let body = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-cccccccccccc", 0, 0, 1000, AnnounceEvent::Started),
            leecher,
        ).unwrap();

        let needle = b"5:peers6:";
        let position = body.windows(needle.len()).position(|window| window == needle);
        assert!(position.is_some(), "one user must fill exactly one seeder slot: {:?}", String::from_utf8_lossy(&body));
    }

    #[tokio::test]
    async fn test_seeding_client_receives_only_leechers() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([10u8; 20]);
        add_torrent(&tracker, hash, plain_torrent(20));
        let seeder_a = add_user(&tracker, "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB", plain_user(101));
        let seeder_b = add_user(&tracker, "DDDDDDDDDDDDDDDDDDDDDDDDDDDDDDDD", plain_user(103));
        let leecher = add_user(&tracker, "CCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC", plain_user(102));

        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-aaaaaaaaaaaa", 0, 0, 0, AnnounceEvent::None),
            seeder_a,
        ).unwrap();
        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-llllllllllll", 0, 0, 500, AnnounceEvent::Started),
            leecher,
        ).unwrap();

        let body = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-dddddddddddd", 0, 0, 0, AnnounceEvent::None),
            seeder_b,
        ).unwrap();

        // exactly one compact entry: the leecher, not the other seeder
        let needle = b"5:peers6:";
        assert!(
            body.windows(needle.len()).any(|window| window == needle),
            "seeding client gets leechers only: {:?}",
            String::from_utf8_lossy(&body)
        );
    }

    #[tokio::test]
    async fn test_counts_mirror_map_sizes_after_announce_sequence() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([11u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(21));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        let sequence = [
            (1000u64, AnnounceEvent::Started),
            (400, AnnounceEvent::None),
            (0, AnnounceEvent::Completed),
            (0, AnnounceEvent::None),
            (0, AnnounceEvent::Stopped),
        ];
        for (left, event) in sequence {
            let _ = tracker.handle_announce(
                tracker.clone(),
                announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, left, event),
                user.clone(),
            );
            let swarm = torrent.swarm.lock();
            assert_eq!(torrent.seeders_count.load(Ordering::Relaxed) as usize, swarm.seeders.len());
            assert_eq!(torrent.leechers_count.load(Ordering::Relaxed) as usize, swarm.leechers.len());
        }
    }

    #[tokio::test]
    async fn test_purge_evicts_stale_peer_and_enqueues_correction() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([12u8; 20]);
        let torrent = add_torrent(&tracker, hash, plain_torrent(22));
        let now = current_time();
        {
            let mut swarm = torrent.swarm.lock();
            let key = PeerKey { user_id: 100, peer_id: PeerId(*b"-TR2920-abcdefghijkl") };
            swarm.leechers.insert(key, Peer {
                peer_id: key.peer_id,
                addr: PeerAddress::new(Ipv4Addr::new(93, 184, 216, 34), 6881),
                client_id: 1,
                uploaded: 0,
                downloaded: 0,
                left: 1000,
                start_time: now - 5000,
                last_announce: now - 4000,
                torrent_id: 22,
                user_id: 100,
                seeding: false,
            });
            torrent.store_counts(&swarm);
        }

        // default peer_inactivity is 3900; a 4000 second silence is stale
        let purged = tracker.purge_inactive_peers();

        assert_eq!(purged, 1);
        assert_eq!(torrent.leechers_count.load(Ordering::Relaxed), 0);
        assert!(!tracker.queues.torrents.is_empty(), "count correction must be enqueued");
    }

    #[tokio::test]
    async fn test_validate_announce_requires_exactly_one_info_hash() {
        let tracker = memory_tracker().await;
        let missing = tracker.validate_announce(REMOTE, None, query_of(vec![
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"6881".to_vec()),
        ]));
        assert!(missing.is_err());

        let twice = tracker.validate_announce(REMOTE, None, query_of(vec![
            ("info_hash", vec![1u8; 20]),
            ("info_hash", vec![2u8; 20]),
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"6881".to_vec()),
            ("uploaded", b"0".to_vec()),
            ("downloaded", b"0".to_vec()),
            ("left", b"0".to_vec()),
        ]));
        assert!(twice.is_err());

        // an occurrence that is not 20 bytes is dropped, not an error
        let odd_length = tracker.validate_announce(REMOTE, None, query_of(vec![
            ("info_hash", vec![1u8; 19]),
            ("info_hash", vec![2u8; 20]),
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"6881".to_vec()),
            ("uploaded", b"0".to_vec()),
            ("downloaded", b"0".to_vec()),
            ("left", b"0".to_vec()),
        ]));
        assert_eq!(odd_length.unwrap().info_hash, TorrentHash([2u8; 20]));
    }

    #[tokio::test]
    async fn test_validate_announce_rejects_malformed_numbers() {
        let tracker = memory_tracker().await;
        let result = tracker.validate_announce(REMOTE, None, query_of(vec![
            ("info_hash", vec![1u8; 20]),
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"6881".to_vec()),
            ("uploaded", b"abc".to_vec()),
            ("downloaded", b"0".to_vec()),
            ("left", b"0".to_vec()),
        ]));
        assert!(result.is_err());

        let bad_numwant = tracker.validate_announce(REMOTE, None, query_of(vec![
            ("info_hash", vec![1u8; 20]),
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"6881".to_vec()),
            ("uploaded", b"0".to_vec()),
            ("downloaded", b"0".to_vec()),
            ("left", b"0".to_vec()),
            ("numwant", b"many".to_vec()),
        ]));
        assert!(bad_numwant.is_err());
    }

    #[tokio::test]
    async fn test_validate_announce_strict_port() {
        let mut config = Configuration::init();
        config.announce.strict_port = true;
        let tracker = Arc::new(TorrentTracker::new(Arc::new(config), false).await);
        let result = tracker.validate_announce(REMOTE, None, query_of(vec![
            ("info_hash", vec![1u8; 20]),
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"80".to_vec()),
            ("uploaded", b"0".to_vec()),
            ("downloaded", b"0".to_vec()),
            ("left", b"0".to_vec()),
        ]));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_validate_announce_ip_resolution_order() {
        let tracker = memory_tracker().await;
        let base = vec![
            ("info_hash", vec![1u8; 20]),
            ("peer_id", b"-TR2920-abcdefghijkl".to_vec()),
            ("port", b"6881".to_vec()),
            ("uploaded", b"0".to_vec()),
            ("downloaded", b"0".to_vec()),
            ("left", b"0".to_vec()),
        ];

        // routable ip parameter wins
        let mut with_ip = base.clone();
        with_ip.push(("ip", b"1.2.3.4".to_vec()));
        let request = tracker.validate_announce(REMOTE, Some("8.8.8.8"), query_of(with_ip)).unwrap();
        assert_eq!(request.client_ip, Ipv4Addr::new(1, 2, 3, 4));

        // a private ip parameter is ignored in favor of the proxy header
        let mut with_private_ip = base.clone();
        with_private_ip.push(("ip", b"192.168.1.5".to_vec()));
        let request = tracker.validate_announce(REMOTE, Some("10.0.0.1, 8.8.8.8"), query_of(with_private_ip)).unwrap();
        assert_eq!(request.client_ip, Ipv4Addr::new(8, 8, 8, 8));

        // otherwise the transport address is used
        let request = tracker.validate_announce(REMOTE, None, query_of(base)).unwrap();
        assert_eq!(request.client_ip, Ipv4Addr::new(93, 184, 216, 34));
    }

    #[tokio::test]
    async fn test_compact_response_shape_without_peers() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([13u8; 20]);
        add_torrent(&tracker, hash, plain_torrent(23));
        let user = add_user(&tracker, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", plain_user(100));

        let body = tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-abcdefghijkl", 0, 0, 0, AnnounceEvent::None),
            user,
        ).unwrap();

        assert_eq!(
            String::from_utf8(body).unwrap(),
            "d8:completei1e10:downloadedi0e10:incompletei0e8:intervali1800e12:min intervali900e5:peers0:e"
        );
    }

    #[tokio::test]
    async fn test_scrape_reports_counts_and_skips_gated_torrents() {
        let tracker = memory_tracker().await;
        let hash = TorrentHash([14u8; 20]);
        add_torrent(&tracker, hash, plain_torrent(24));
        let seeder = add_user(&tracker, "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB", plain_user(101));
        tracker.handle_announce(
            tracker.clone(),
            announce_request(hash, b"-TR2920-aaaaaaaaaaaa", 0, 0, 0, AnnounceEvent::None),
            seeder.clone(),
        ).unwrap();

        let scrape = tracker.validate_scrape(query_of(vec![("info_hash", hash.0.to_vec())])).unwrap();
        let body = tracker.handle_scrape(seeder, scrape.clone());
        let text = String::from_utf8_lossy(&body).to_string();
        assert!(text.contains("8:completei1e"), "{text}");
        assert!(text.contains("min_request_interval"), "{text}");

        let gated = add_user(
            &tracker,
            "EEEEEEEEEEEEEEEEEEEEEEEEEEEEEEEE",
            User::new(400, true, false, 1.0, 1.0),
        );
        let body = tracker.handle_scrape(gated, scrape);
        let text = String::from_utf8_lossy(&body).to_string();
        assert!(!text.contains("8:completei1e"), "gated torrent must be omitted: {text}");
    }

    #[tokio::test]
    async fn test_scrape_requires_info_hash() {
        let tracker = memory_tracker().await;
        assert!(tracker.validate_scrape(query_of(vec![])).is_err());
    }

    #[test]
    fn test_torrent_type_tag_fixed_width() {
        assert_eq!(Torrent::tag_from_str("anime"), *b"anime\0\0\0");
        assert_eq!(Torrent::tag_from_str("livestreams"), *b"livestre");
        assert_eq!(Torrent::tag_from_str(""), [0u8; 8]);
    }
}
