//! Core private-tracker implementation.
//!
//! This module owns the in-memory swarm state and the announce/scrape
//! protocol engines.
//!
//! # Architecture
//!
//! Read-hot containers (users by passkey, torrents by info hash, hit-and-run
//! records, approved clients, group freeleech rules) are published behind
//! atomic snapshot pointers: writers build a replacement map and swap it in,
//! readers dereference once per request and never block. Per-torrent peer
//! maps mutate at announce rate and are instead guarded by a per-torrent
//! mutex which also covers the atomic length mirrors.
//!
//! # Main components
//!
//! - `TorrentTracker` - the swarm store and engine entry points
//! - `Torrent` / `Peer` / `User` - swarm entities
//! - `TorrentHash` / `PeerId` / `Passkey` - wire identifiers
//! - announce and scrape handling, peer purging, binary cache files

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for the snapshot map types.
pub mod types;

/// Unit tests for tracker functionality.
pub mod tests;
