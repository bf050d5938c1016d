/// One `users_main` delta tuple. Multiplied deltas feed the credited
/// counters, raw deltas the rawup/rawdl counters.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct UserRow {
    pub id: u32,
    pub uploaded_delta: u64,
    pub downloaded_delta: u64,
    pub raw_up_delta: u64,
    pub raw_down_delta: u64,
}
