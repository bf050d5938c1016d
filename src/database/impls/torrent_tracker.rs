use log::{error, warn};
use std::time::Duration;
use crate::database::impls::database_connector::is_deadlock;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Executes one statement with linear-backoff retries on MySQL deadlock
    /// or lock-wait timeout. Other SQL errors are counted and returned; the
    /// caller decides whether the batch is droppable.
    ///
    /// A tracker without a database connection (in-memory test mode) reports
    /// success without executing.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn execute_with_deadlock_retry(&self, query: &str) -> Result<u64, sqlx::Error>
    {
        let Some(connector) = &self.sqlx else {
            return Ok(0);
        };
        let retries = self.config.database.deadlock_retries;
        let pause = self.config.database.deadlock_pause;
        let mut attempt = 1u64;
        loop {
            match connector.execute_raw(query).await {
                Ok(rows) => return Ok(rows),
                Err(e) if is_deadlock(&e) => {
                    self.update_stats(StatsEvent::DeadlocksObserved, 1);
                    if attempt >= retries {
                        error!("[MySQL] Deadlock persisted through {retries} retries");
                        self.update_stats(StatsEvent::SqlErrors, 1);
                        return Err(e);
                    }
                    warn!("[MySQL] Deadlock on attempt {attempt}, backing off {}s", pause * attempt);
                    tokio::time::sleep(Duration::from_secs(pause * attempt)).await;
                    attempt += 1;
                }
                Err(e) => {
                    self.update_stats(StatsEvent::SqlErrors, 1);
                    error!("[MySQL] Error: {e}");
                    return Err(e);
                }
            }
        }
    }
}
