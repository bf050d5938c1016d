use crossbeam::channel::TryRecvError;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use crate::queues::enums::flush_category::FlushCategory;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Drains one flush queue into batched upserts until terminated.
///
/// Every cycle snapshots the queue length and drains exactly that many
/// tuples. Draining a snapshot instead of looping until empty bounds one
/// batch and lets producers start filling the next batch concurrently.
#[tracing::instrument(level = "debug", skip(tracker, terminate))]
pub async fn flush_worker(tracker: Arc<TorrentTracker>, category: FlushCategory, mut terminate: watch::Receiver<bool>)
{
    let channel = tracker.queues.channel(category).clone();
    let flush_interval = tracker.config.intervals.flush;
    let mut query = String::with_capacity(64 * 1024);
    info!("[FLUSH] Worker for {category} started");
    loop {
        let pending = channel.len();
        if pending > 0 {
            query.clear();
            query.push_str(category.insert_prefix());
            let started = Instant::now();
            let mut rows = 0u64;
            for _ in 0..pending {
                let buffer = match channel.receiver.try_recv() {
                    Ok(buffer) => buffer,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        panic!("[FLUSH] {category} queue vanished mid-batch");
                    }
                };
                if rows > 0 {
                    query.push(',');
                }
                query.push_str(std::str::from_utf8(&buffer).expect("row tuples are always ASCII"));
                tracker.queues.pool.release(buffer);
                rows += 1;
            }
            if rows > 0 {
                query.push_str(category.upsert_suffix());
                let result = if category == FlushCategory::TransferHistory {
                    let _guard = tracker.queues.history_flush_lock.lock().await;
                    tracker.execute_with_deadlock_retry(&query).await
                } else {
                    tracker.execute_with_deadlock_retry(&query).await
                };
                match result {
                    Ok(_) => {
                        tracker.update_stats(category.rows_stat(), rows as i64);
                        if tracker.config.log_flushes {
                            info!("[FLUSH] {category}: {rows} rows in {:?}", started.elapsed());
                        } else {
                            debug!("[FLUSH] {category}: {rows} rows in {:?}", started.elapsed());
                        }
                    }
                    Err(e) => {
                        error!("[FLUSH] {category}: dropped a batch of {rows} rows: {e}");
                    }
                }
            }
        }
        if *terminate.borrow() {
            if channel.is_empty() {
                break;
            }
            continue;
        }
        let sleep = if pending < channel.capacity / 2 { flush_interval } else { 1 };
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(sleep)) => {}
            _ = terminate.changed() => {}
        }
    }
    info!("[FLUSH] Worker for {category} drained and stopped");
}
