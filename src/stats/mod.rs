//! Runtime statistics.
//!
//! Atomic counters updated from the hot paths and exposed through the
//! `/{passkey}/metrics` endpoint as Prometheus text exposition.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics handling.
pub mod impls;

/// Statistics data structures.
pub mod structs;
