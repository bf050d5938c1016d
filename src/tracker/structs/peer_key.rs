use crate::tracker::structs::peer_id::PeerId;

/// Composite key of a torrent's peer maps.
///
/// Keying by `(user, peer id)` lets one user occupy distinct slots from
/// multiple clients without colliding.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerKey {
    pub user_id: u32,
    pub peer_id: PeerId,
}
