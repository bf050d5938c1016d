use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::types::AHashMap;

/// The mutable half of a torrent: its two peer maps.
///
/// A peer lives in exactly one of the two maps; `seeding` on the peer mirrors
/// which one. Exclusively accessed through the owning torrent's swarm lock.
#[derive(Debug, Default)]
pub struct TorrentSwarm {
    pub seeders: AHashMap<PeerKey, Peer>,
    pub leechers: AHashMap<PeerKey, Peer>,
}
