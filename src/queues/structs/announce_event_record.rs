use serde::Serialize;

/// One announce, serialized to the newline-delimited JSON event log when
/// `record_announces` is enabled.
#[derive(Serialize, Clone, Debug)]
pub struct AnnounceEventRecord {
    pub time: i64,
    pub user_id: u32,
    pub torrent_id: u32,
    pub info_hash: String,
    pub ip: String,
    pub port: u16,
    pub event: &'static str,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub delta_up: u64,
    pub delta_down: u64,
    pub seeding: bool,
}
