use std::fmt;
use std::fmt::Formatter;
use crate::queues::enums::flush_category::FlushCategory;
use crate::stats::enums::stats_event::StatsEvent;

impl FlushCategory {
    pub const ALL: [FlushCategory; 5] = [
        FlushCategory::Torrents,
        FlushCategory::Users,
        FlushCategory::TransferHistory,
        FlushCategory::TransferIps,
        FlushCategory::Snatches,
    ];

    /// The batch opener; value tuples are appended comma-separated.
    pub fn insert_prefix(&self) -> &'static str {
        match self {
            FlushCategory::Torrents => {
                "INSERT INTO torrents (ID, Seeders, Leechers, Snatched, last_action) VALUES "
            }
            FlushCategory::Users => {
                "INSERT INTO users_main (ID, Uploaded, Downloaded, rawup, rawdl) VALUES "
            }
            FlushCategory::TransferHistory => {
                "INSERT INTO transfer_history (uid, fid, uploaded, downloaded, remaining, seeding, starttime, last_announce, activetime, seedtime, active, snatched) VALUES "
            }
            FlushCategory::TransferIps => {
                "INSERT INTO transfer_ips (uid, fid, client_id, ip, port, uploaded, downloaded, last_announce) VALUES "
            }
            FlushCategory::Snatches => {
                "INSERT INTO transfer_history (uid, fid, snatched_time) VALUES "
            }
        }
    }

    /// The batch closer. Accumulators add, states overwrite.
    pub fn upsert_suffix(&self) -> &'static str {
        match self {
            FlushCategory::Torrents => {
                " ON DUPLICATE KEY UPDATE Seeders = VALUES(Seeders), Leechers = VALUES(Leechers), Snatched = Snatched + VALUES(Snatched), last_action = GREATEST(last_action, VALUES(last_action))"
            }
            FlushCategory::Users => {
                " ON DUPLICATE KEY UPDATE Uploaded = Uploaded + VALUES(Uploaded), Downloaded = Downloaded + VALUES(Downloaded), rawup = rawup + VALUES(rawup), rawdl = rawdl + VALUES(rawdl)"
            }
            FlushCategory::TransferHistory => {
                " ON DUPLICATE KEY UPDATE uploaded = uploaded + VALUES(uploaded), downloaded = downloaded + VALUES(downloaded), remaining = VALUES(remaining), seeding = VALUES(seeding), last_announce = VALUES(last_announce), activetime = activetime + VALUES(activetime), seedtime = seedtime + VALUES(seedtime), active = VALUES(active), snatched = snatched + VALUES(snatched)"
            }
            FlushCategory::TransferIps => {
                " ON DUPLICATE KEY UPDATE port = VALUES(port), uploaded = uploaded + VALUES(uploaded), downloaded = downloaded + VALUES(downloaded), last_announce = VALUES(last_announce)"
            }
            FlushCategory::Snatches => {
                " ON DUPLICATE KEY UPDATE snatched_time = VALUES(snatched_time)"
            }
        }
    }

    pub fn rows_stat(&self) -> StatsEvent {
        match self {
            FlushCategory::Torrents => StatsEvent::FlushedTorrentRows,
            FlushCategory::Users => StatsEvent::FlushedUserRows,
            FlushCategory::TransferHistory => StatsEvent::FlushedTransferHistoryRows,
            FlushCategory::TransferIps => StatsEvent::FlushedTransferIpRows,
            FlushCategory::Snatches => StatsEvent::FlushedSnatchRows,
        }
    }
}

impl fmt::Display for FlushCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FlushCategory::Torrents => write!(f, "torrents"),
            FlushCategory::Users => write!(f, "users"),
            FlushCategory::TransferHistory => write!(f, "transfer_history"),
            FlushCategory::TransferIps => write!(f, "transfer_ips"),
            FlushCategory::Snatches => write!(f, "snatches"),
        }
    }
}
