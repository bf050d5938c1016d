//! # Swarmtrack
//!
//! A high-throughput private BitTorrent tracker built on Rust, Actix-web and MySQL.
//!
//! ## Overview
//!
//! Swarmtrack keeps authoritative swarm state for a catalog of torrents in
//! memory, authorizes announcing clients against a membership database,
//! accounts per-user traffic with configurable multipliers, and persists both
//! swarm state and accounting deltas to MariaDB/MySQL through an asynchronous,
//! batched write pipeline.
//!
//! ## Architecture
//!
//! - **Swarm store**: torrents, users, hit-and-run records, approved clients
//!   and freeleech rules live behind atomic snapshot pointers; per-torrent
//!   peer maps are guarded by per-torrent mutexes.
//! - **Protocol engine**: announce and scrape requests are parsed, validated,
//!   applied to the swarm under the torrent's lock, and answered with bencoded
//!   bodies.
//! - **Write pipeline**: five bounded queues of pre-formatted SQL row tuples,
//!   drained by dedicated workers into batched
//!   `INSERT ... ON DUPLICATE KEY UPDATE` statements.
//! - **Background jobs**: a periodic reloader refreshes read-only caches from
//!   the database, a serializer snapshots swarm state to binary cache files,
//!   and a purger evicts peers that stopped announcing.

/// Common utilities: query-string parsing, hex helpers, timestamps.
pub mod common;

/// Configuration loading and structures.
pub mod config;

/// MySQL connectivity, the deadlock-aware executor, and cache reloading.
pub mod database;

/// The HTTP tracker front: routing, deadlines, response mapping.
pub mod http;

/// Logging setup.
pub mod logging;

/// The write pipeline: bounded queues, row encoders, flush workers.
pub mod queues;

/// Runtime statistics counters and the Prometheus text renderer.
pub mod stats;

/// Command-line interface definition.
pub mod structs;

/// The tracker core: swarm store, announce/scrape engines, purger, cache files.
pub mod tracker;
