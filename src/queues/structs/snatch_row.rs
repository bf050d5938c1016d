/// One completed-download timestamp for `transfer_history`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SnatchRow {
    pub user_id: u32,
    pub torrent_id: u32,
    pub snatched_time: i64,
}
