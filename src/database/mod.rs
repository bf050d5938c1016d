//! MySQL connectivity.
//!
//! A single sqlx connection pool shared by the flush workers, the reloader
//! and the purger. Batched statements go through a deadlock-aware executor
//! that retries MySQL 1213/1205 with linear backoff; the reloader refreshes
//! the read-only caches from the authoritative tables.

/// Implementation blocks for database handling.
pub mod impls;

/// Database data structures.
pub mod structs;
