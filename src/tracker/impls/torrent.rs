use parking_lot::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU8, AtomicU16, AtomicU32, AtomicU64, Ordering};
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_group::TorrentGroup;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

impl Torrent {
    pub const STATUS_LIVE: u8 = 0;
    pub const STATUS_PRUNED: u8 = 1;

    pub fn new(id: u32, status: u8, snatched: u16, last_action: i64, up_multiplier: f64, down_multiplier: f64, group: TorrentGroup) -> Torrent {
        Torrent {
            id,
            status: AtomicU8::new(status),
            snatched: AtomicU16::new(snatched),
            last_action: AtomicI64::new(last_action),
            up_multiplier: AtomicU64::new(up_multiplier.to_bits()),
            down_multiplier: AtomicU64::new(down_multiplier.to_bits()),
            group_id: AtomicU32::new(group.id),
            group_type: AtomicU64::new(u64::from_le_bytes(group.torrent_type)),
            swarm: Mutex::new(TorrentSwarm::default()),
            seeders_count: AtomicU32::new(0),
            leechers_count: AtomicU32::new(0),
        }
    }

    /// Zero-pads or truncates a database type string into the fixed 8-byte tag.
    pub fn tag_from_str(torrent_type: &str) -> [u8; 8] {
        let mut tag = [0u8; 8];
        let bytes = torrent_type.as_bytes();
        let len = bytes.len().min(8);
        tag[..len].copy_from_slice(&bytes[..len]);
        tag
    }

    #[inline]
    pub fn up_multiplier(&self) -> f64 {
        f64::from_bits(self.up_multiplier.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn down_multiplier(&self) -> f64 {
        f64::from_bits(self.down_multiplier.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set_up_multiplier(&self, value: f64) {
        self.up_multiplier.store(value.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn set_down_multiplier(&self, value: f64) {
        self.down_multiplier.store(value.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn group(&self) -> TorrentGroup {
        TorrentGroup {
            torrent_type: self.group_type.load(Ordering::Relaxed).to_le_bytes(),
            id: self.group_id.load(Ordering::Relaxed),
        }
    }

    pub fn set_group(&self, group: TorrentGroup) {
        self.group_id.store(group.id, Ordering::Relaxed);
        self.group_type.store(u64::from_le_bytes(group.torrent_type), Ordering::Relaxed);
    }

    /// Stores the count mirrors; must be called with the swarm lock held,
    /// immediately after any mutation of the peer maps.
    #[inline]
    pub fn store_counts(&self, swarm: &TorrentSwarm) {
        self.seeders_count.store(swarm.seeders.len() as u32, Ordering::Relaxed);
        self.leechers_count.store(swarm.leechers.len() as u32, Ordering::Relaxed);
    }
}
