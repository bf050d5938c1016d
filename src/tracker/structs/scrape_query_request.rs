use crate::tracker::structs::torrent_hash::TorrentHash;

/// A validated scrape request.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ScrapeQueryRequest {
    pub info_hash: Vec<TorrentHash>,
}
