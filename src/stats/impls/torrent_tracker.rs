use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use std::sync::atomic::{AtomicI64, Ordering};

impl TorrentTracker {
    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Torrents => &self.stats.torrents,
            StatsEvent::Seeders => &self.stats.seeders,
            StatsEvent::Leechers => &self.stats.leechers,
            StatsEvent::Users => &self.stats.users,
            StatsEvent::AnnouncesHandled => &self.stats.announces_handled,
            StatsEvent::ScrapesHandled => &self.stats.scrapes_handled,
            StatsEvent::Failures => &self.stats.failures,
            StatsEvent::NotFound => &self.stats.not_found,
            StatsEvent::DeadlinesExceeded => &self.stats.deadlines_exceeded,
            StatsEvent::PanicsRecovered => &self.stats.panics_recovered,
            StatsEvent::DeadlocksObserved => &self.stats.deadlocks_observed,
            StatsEvent::SqlErrors => &self.stats.sql_errors,
            StatsEvent::TorrentsUnpruned => &self.stats.torrents_unpruned,
            StatsEvent::PeersPurged => &self.stats.peers_purged,
            StatsEvent::FlushedTorrentRows => &self.stats.flushed_torrent_rows,
            StatsEvent::FlushedUserRows => &self.stats.flushed_user_rows,
            StatsEvent::FlushedTransferHistoryRows => &self.stats.flushed_transfer_history_rows,
            StatsEvent::FlushedTransferIpRows => &self.stats.flushed_transfer_ip_rows,
            StatsEvent::FlushedSnatchRows => &self.stats.flushed_snatch_rows,
            StatsEvent::EventsRecorded => &self.stats.events_recorded,
            StatsEvent::EventsDropped => &self.stats.events_dropped,
        }
    }

    #[inline]
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).fetch_add(value, Ordering::Relaxed);
    }

    #[inline]
    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::Relaxed);
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::Relaxed),
            torrents: self.stats.torrents.load(Ordering::Relaxed),
            seeders: self.stats.seeders.load(Ordering::Relaxed),
            leechers: self.stats.leechers.load(Ordering::Relaxed),
            users: self.stats.users.load(Ordering::Relaxed),
            announces_handled: self.stats.announces_handled.load(Ordering::Relaxed),
            scrapes_handled: self.stats.scrapes_handled.load(Ordering::Relaxed),
            failures: self.stats.failures.load(Ordering::Relaxed),
            not_found: self.stats.not_found.load(Ordering::Relaxed),
            deadlines_exceeded: self.stats.deadlines_exceeded.load(Ordering::Relaxed),
            panics_recovered: self.stats.panics_recovered.load(Ordering::Relaxed),
            deadlocks_observed: self.stats.deadlocks_observed.load(Ordering::Relaxed),
            sql_errors: self.stats.sql_errors.load(Ordering::Relaxed),
            torrents_unpruned: self.stats.torrents_unpruned.load(Ordering::Relaxed),
            peers_purged: self.stats.peers_purged.load(Ordering::Relaxed),
            flushed_torrent_rows: self.stats.flushed_torrent_rows.load(Ordering::Relaxed),
            flushed_user_rows: self.stats.flushed_user_rows.load(Ordering::Relaxed),
            flushed_transfer_history_rows: self.stats.flushed_transfer_history_rows.load(Ordering::Relaxed),
            flushed_transfer_ip_rows: self.stats.flushed_transfer_ip_rows.load(Ordering::Relaxed),
            flushed_snatch_rows: self.stats.flushed_snatch_rows.load(Ordering::Relaxed),
            events_recorded: self.stats.events_recorded.load(Ordering::Relaxed),
            events_dropped: self.stats.events_dropped.load(Ordering::Relaxed),
        }
    }

    /// Renders the Prometheus text exposition. The admin set covers the write
    /// pipeline and failure counters; the public set only swarm totals.
    #[tracing::instrument(level = "debug")]
    pub fn render_metrics(&self, admin: bool) -> String
    {
        let stats = self.get_stats();
        let mut output = String::with_capacity(4096);
        prom_line(&mut output, "gauge", "torrents", stats.torrents, Some("Torrents tracked in memory"));
        prom_line(&mut output, "gauge", "seeders", stats.seeders, None);
        prom_line(&mut output, "gauge", "leechers", stats.leechers, None);
        prom_line(&mut output, "gauge", "users", stats.users, None);
        prom_line(&mut output, "counter", "announces_handled", stats.announces_handled, None);
        prom_line(&mut output, "counter", "scrapes_handled", stats.scrapes_handled, None);
        prom_line(&mut output, "counter", "failures", stats.failures, None);
        prom_line(&mut output, "counter", "not_found", stats.not_found, None);
        if admin {
            prom_line(&mut output, "counter", "deadlines_exceeded", stats.deadlines_exceeded, None);
            prom_line(&mut output, "counter", "panics_recovered", stats.panics_recovered, None);
            prom_line(&mut output, "counter", "deadlocks_observed", stats.deadlocks_observed, None);
            prom_line(&mut output, "counter", "sql_errors", stats.sql_errors, None);
            prom_line(&mut output, "counter", "torrents_unpruned", stats.torrents_unpruned, None);
            prom_line(&mut output, "counter", "peers_purged", stats.peers_purged, None);
            prom_line(&mut output, "counter", "flushed_torrent_rows", stats.flushed_torrent_rows, None);
            prom_line(&mut output, "counter", "flushed_user_rows", stats.flushed_user_rows, None);
            prom_line(&mut output, "counter", "flushed_transfer_history_rows", stats.flushed_transfer_history_rows, None);
            prom_line(&mut output, "counter", "flushed_transfer_ip_rows", stats.flushed_transfer_ip_rows, None);
            prom_line(&mut output, "counter", "flushed_snatch_rows", stats.flushed_snatch_rows, None);
            prom_line(&mut output, "counter", "events_recorded", stats.events_recorded, None);
            prom_line(&mut output, "counter", "events_dropped", stats.events_dropped, None);
            prom_line(&mut output, "gauge", "queue_torrents", self.queues.torrents.len() as i64, None);
            prom_line(&mut output, "gauge", "queue_users", self.queues.users.len() as i64, None);
            prom_line(&mut output, "gauge", "queue_transfer_history", self.queues.transfer_history.len() as i64, None);
            prom_line(&mut output, "gauge", "queue_transfer_ips", self.queues.transfer_ips.len() as i64, None);
            prom_line(&mut output, "gauge", "queue_snatches", self.queues.snatches.len() as i64, None);
        }
        output
    }
}

fn prom_line(output: &mut String, metric_type: &str, name: &str, value: i64, help: Option<&str>)
{
    if let Some(help) = help {
        output.push_str(&format!("# HELP swarmtrack_{name} {help}\n"));
    }
    output.push_str(&format!("# TYPE swarmtrack_{name} {metric_type}\n"));
    output.push_str(&format!("swarmtrack_{name} {value}\n"));
}
