/// One `torrents` upsert tuple.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TorrentRow {
    pub id: u32,
    pub seeders: u32,
    pub leechers: u32,
    pub snatched_delta: u8,
    pub last_action: i64,
}
