/// One `transfer_history` upsert tuple for a user x torrent pair.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TransferHistoryRow {
    pub user_id: u32,
    pub torrent_id: u32,
    pub uploaded_delta: u64,
    pub downloaded_delta: u64,
    pub remaining: u64,
    pub seeding: bool,
    pub start_time: i64,
    pub last_announce: i64,
    pub active_delta: i64,
    pub seed_delta: i64,
    pub active: bool,
    pub snatched_delta: u8,
}
