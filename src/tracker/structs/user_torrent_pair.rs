/// Key of the hit-and-run record set: `(user id, torrent id)`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct UserTorrentPair {
    pub user_id: u32,
    pub torrent_id: u32,
}
