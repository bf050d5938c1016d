//! The HTTP tracker front.
//!
//! Routes `/alive`, `/{passkey}/announce`, `/{passkey}/scrape` and
//! `/{passkey}/metrics`; everything else is a 404. Handler work runs on a
//! spawned task raced against the request deadline, and panics inside a
//! handler are recovered here instead of taking a worker down.

/// HTTP service setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;

/// HTTP data structures.
pub mod structs;
