use std::net::Ipv4Addr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_hash::TorrentHash;

/// A fully validated announce request.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct AnnounceQueryRequest {
    pub info_hash: TorrentHash,
    pub peer_id: PeerId,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
    /// Requested peer count; the configured default applies when absent.
    pub numwant: Option<u16>,
    pub compact: bool,
    pub no_peer_id: bool,
    /// Resolved, globally routable client address.
    pub client_ip: Ipv4Addr,
}
