use std::net::Ipv4Addr;

/// One `transfer_ips` upsert tuple, keyed by user x torrent x ip x client.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TransferIpRow {
    pub user_id: u32,
    pub torrent_id: u32,
    pub client_id: u16,
    /// Persisted address; 127.0.0.1 when the member has tracker_hide set.
    pub ip: Ipv4Addr,
    pub port: u16,
    pub uploaded_delta: u64,
    pub downloaded_delta: u64,
    pub last_announce: i64,
}
