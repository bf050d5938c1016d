//! Compact peer address.

/// Four IPv4 octets followed by a big-endian port, the exact 6-byte layout of
/// an entry in a compact peer list. Stored pre-packed so response generation
/// appends it verbatim.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerAddress(pub [u8; 6]);
