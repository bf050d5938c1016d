//! The asynchronous write pipeline.
//!
//! Announce handlers never talk to the database. Instead each accounting
//! outcome is formatted once, as the SQL value tuple it will become, into a
//! pooled byte buffer and pushed onto one of five bounded queues. Dedicated
//! flush workers drain the queues in batches and execute a single
//! `INSERT ... ON DUPLICATE KEY UPDATE` per batch through the deadlock-aware
//! executor.

/// Flush category enumeration.
pub mod enums;

/// Implementation blocks: encoders, workers, the event recorder.
pub mod impls;

/// Queue and record data structures.
pub mod structs;
