//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 hash of the "info" dictionary of a torrent file; the map key of
/// the torrent catalog and the wire identifier of announce and scrape
/// requests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TorrentHash(pub [u8; 20]);
