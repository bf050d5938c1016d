pub mod passkey;
pub mod peer_address;
pub mod peer_id;
pub mod torrent;
pub mod torrent_hash;
pub mod torrent_tracker;
pub mod torrent_tracker_announce;
pub mod torrent_tracker_cache;
pub mod torrent_tracker_purge;
pub mod torrent_tracker_scrape;
pub mod tracker_failure;
pub mod user;
