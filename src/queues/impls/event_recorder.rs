use crossbeam::channel::TryRecvError;
use log::{error, info};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub const EVENT_LOG_FILE: &str = "announces.jsonl";

/// Appends announce-event records to the newline-delimited JSON event log.
/// Rotation is left to external tooling.
#[tracing::instrument(level = "debug", skip(tracker, terminate))]
pub async fn event_recorder(tracker: Arc<TorrentTracker>, mut terminate: watch::Receiver<bool>)
{
    let channel = tracker.queues.events.clone();
    let mut output = match OpenOptions::new().create(true).append(true).open(EVENT_LOG_FILE) {
        Ok(file) => file,
        Err(e) => {
            error!("[RECORD] Could not open {EVENT_LOG_FILE}: {e}");
            return;
        }
    };
    info!("[RECORD] Announce recorder started, writing to {EVENT_LOG_FILE}");
    loop {
        let mut recorded = 0i64;
        loop {
            match channel.receiver.try_recv() {
                Ok(buffer) => {
                    if let Err(e) = output.write_all(&buffer) {
                        error!("[RECORD] Write to {EVENT_LOG_FILE} failed: {e}");
                    } else {
                        recorded += 1;
                    }
                    tracker.queues.pool.release(buffer);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            }
        }
        if recorded > 0 {
            tracker.update_stats(StatsEvent::EventsRecorded, recorded);
            let _ = output.flush();
        }
        if *terminate.borrow() && channel.is_empty() {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(1)) => {}
            _ = terminate.changed() => {}
        }
    }
    let _ = output.flush();
    info!("[RECORD] Announce recorder stopped");
}
