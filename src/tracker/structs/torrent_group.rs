/// Group-level freeleech lookup key: torrent type tag plus group id.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TorrentGroup {
    /// Fixed-width type tag, zero-padded (e.g. `b"anime\0\0\0"`).
    pub torrent_type: [u8; 8],
    pub id: u32,
}
