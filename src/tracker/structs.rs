//! Data structures for tracker operations.

pub mod announce_query_request;
pub mod group_freeleech;
pub mod passkey;
pub mod peer;
pub mod peer_address;
pub mod peer_id;
pub mod peer_key;
pub mod scrape_query_request;
pub mod torrent;
pub mod torrent_group;
pub mod torrent_hash;
pub mod torrent_swarm;
pub mod torrent_tracker;
pub mod tracker_failure;
pub mod user;
pub mod user_torrent_pair;
