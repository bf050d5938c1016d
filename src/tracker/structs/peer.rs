use crate::tracker::structs::peer_address::PeerAddress;
use crate::tracker::structs::peer_id::PeerId;

/// A client participating in one torrent's swarm.
///
/// Owned by the torrent's swarm maps and only ever read or written while the
/// torrent's swarm lock is held. All transfer counters are cumulative values
/// as last reported by the client; deltas are derived at announce time.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Peer {
    pub peer_id: PeerId,
    pub addr: PeerAddress,
    /// Id of the approved-clients entry that matched this peer's prefix.
    pub client_id: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    /// Unix seconds of the first announce of this session.
    pub start_time: i64,
    /// Unix seconds of the most recent announce; nondecreasing.
    pub last_announce: i64,
    pub torrent_id: u32,
    pub user_id: u32,
    pub seeding: bool,
}
