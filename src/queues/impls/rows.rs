//! Row encoders.
//!
//! Each record formats itself once, as the exact SQL value tuple it will
//! become, into a buffer leased from the pool. The flush worker only
//! concatenates tuples; it never re-inspects record fields.

use std::io::Write;
use crate::queues::structs::snatch_row::SnatchRow;
use crate::queues::structs::torrent_row::TorrentRow;
use crate::queues::structs::transfer_history_row::TransferHistoryRow;
use crate::queues::structs::transfer_ip_row::TransferIpRow;
use crate::queues::structs::user_row::UserRow;

#[inline]
fn flag(value: bool) -> &'static str {
    if value { "'1'" } else { "'0'" }
}

impl TorrentRow {
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        let _ = write!(
            buffer,
            "({},{},{},{},FROM_UNIXTIME({}))",
            self.id, self.seeders, self.leechers, self.snatched_delta, self.last_action
        );
    }
}

impl UserRow {
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        let _ = write!(
            buffer,
            "({},{},{},{},{})",
            self.id, self.uploaded_delta, self.downloaded_delta, self.raw_up_delta, self.raw_down_delta
        );
    }
}

impl TransferHistoryRow {
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        let _ = write!(
            buffer,
            "({},{},{},{},{},{},FROM_UNIXTIME({}),FROM_UNIXTIME({}),{},{},{},{})",
            self.user_id,
            self.torrent_id,
            self.uploaded_delta,
            self.downloaded_delta,
            self.remaining,
            flag(self.seeding),
            self.start_time,
            self.last_announce,
            self.active_delta,
            self.seed_delta,
            flag(self.active),
            self.snatched_delta
        );
    }
}

impl TransferIpRow {
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        let _ = write!(
            buffer,
            "({},{},{},INET_ATON('{}'),{},{},{},FROM_UNIXTIME({}))",
            self.user_id,
            self.torrent_id,
            self.client_id,
            self.ip,
            self.port,
            self.uploaded_delta,
            self.downloaded_delta,
            self.last_announce
        );
    }
}

impl SnatchRow {
    pub fn encode(&self, buffer: &mut Vec<u8>) {
        let _ = write!(
            buffer,
            "({},{},FROM_UNIXTIME({}))",
            self.user_id, self.torrent_id, self.snatched_time
        );
    }
}
