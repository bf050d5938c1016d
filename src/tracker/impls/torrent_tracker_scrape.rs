use bip_bencode::{ben_int, ben_map, BMutAccess};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use crate::common::common::QueryValues;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::torrent_hash::TorrentHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracker_failure::TrackerFailure;
use crate::tracker::structs::user::User;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_scrape(&self, query: HashMap<String, QueryValues>) -> Result<ScrapeQueryRequest, TrackerFailure>
    {
        let hashes: Vec<TorrentHash> = query.get("info_hash")
            .map(|values| {
                values.iter()
                    .filter(|value| value.len() == 20)
                    .map(|value| TorrentHash::from(value.as_slice()))
                    .collect()
            })
            .unwrap_or_default();
        if hashes.is_empty() {
            return Err(TrackerFailure::new("Malformed request - missing info_hash", 0));
        }
        Ok(ScrapeQueryRequest { info_hash: hashes })
    }

    /// Aggregate counts per requested hash. Torrents that are download-gated
    /// for this member are omitted, the same rule the announce path applies.
    #[tracing::instrument(level = "debug", skip(self, user))]
    pub fn handle_scrape(&self, user: Arc<User>, scrape: ScrapeQueryRequest) -> Vec<u8>
    {
        let download_disabled = user.disable_download.load(Ordering::Relaxed);
        let mut files = ben_map!();
        let files_mut = files.dict_mut().unwrap();
        for info_hash in scrape.info_hash.iter() {
            let Some(torrent) = self.get_torrent(*info_hash) else {
                continue;
            };
            if download_disabled && !self.has_hit_and_run(user.id, torrent.id) {
                continue;
            }
            files_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(torrent.seeders_count.load(Ordering::Relaxed) as i64),
                "downloaded" => ben_int!(torrent.snatched.load(Ordering::Relaxed) as i64),
                "incomplete" => ben_int!(torrent.leechers_count.load(Ordering::Relaxed) as i64)
            });
        }
        ben_map! {
            "files" => files,
            "flags" => ben_map! {
                "min_request_interval" => ben_int!(self.config.intervals.scrape as i64)
            }
        }.encode()
    }
}
