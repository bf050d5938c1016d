use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use crate::tracker::structs::user::User;

impl User {
    pub fn new(id: u32, disable_download: bool, tracker_hide: bool, up_multiplier: f64, down_multiplier: f64) -> User {
        User {
            id,
            disable_download: AtomicBool::new(disable_download),
            tracker_hide: AtomicBool::new(tracker_hide),
            up_multiplier: AtomicU64::new(up_multiplier.to_bits()),
            down_multiplier: AtomicU64::new(down_multiplier.to_bits()),
        }
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
}
