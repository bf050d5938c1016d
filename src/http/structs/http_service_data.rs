use std::sync::Arc;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Shared state handed to every HTTP handler.
#[derive(Debug)]
pub struct HttpServiceData {
    pub torrent_tracker: Arc<TorrentTracker>,
}
