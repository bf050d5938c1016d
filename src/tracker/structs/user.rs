use std::sync::atomic::{AtomicBool, AtomicU64};

/// A tracker member, indexed by passkey.
///
/// Multipliers are stored as f64 bit patterns so the reloader can refresh
/// them atomically in place without readers observing torn values.
#[derive(Debug)]
pub struct User {
    pub id: u32,
    pub disable_download: AtomicBool,
    /// Persist 127.0.0.1 instead of the member's address in transfer_ips.
    pub tracker_hide: AtomicBool,
    pub up_multiplier: AtomicU64,
    pub down_multiplier: AtomicU64,
}
