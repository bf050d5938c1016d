use bip_bencode::{ben_bytes, ben_int, ben_map};
use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::tracker_failure::TrackerFailure;

impl TrackerFailure {
    pub fn new(reason: &str, interval: u64) -> TrackerFailure {
        TrackerFailure { reason: reason.to_string(), interval }
    }

    /// The exact wire form: `d14:failure reason<n>:<reason>8:intervali<n>ee`.
    pub fn encode(&self) -> Vec<u8> {
        ben_map! {
            "failure reason" => ben_bytes!(self.reason.clone()),
            "interval" => ben_int!(self.interval as i64)
        }.encode()
    }
}

impl fmt::Display for TrackerFailure {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}
