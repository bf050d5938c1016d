//! Peer identifier.

/// The opaque 20-byte identifier a BitTorrent client chooses for itself.
///
/// The leading bytes carry the client software prefix (e.g. `-TR2` for
/// Transmission 2.x) which the approved-clients gate matches against.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
