use crossbeam::channel::TrySendError;
use log::debug;
use crate::queues::structs::announce_event_record::AnnounceEventRecord;
use crate::queues::structs::flush_channel::FlushChannel;
use crate::queues::structs::snatch_row::SnatchRow;
use crate::queues::structs::torrent_row::TorrentRow;
use crate::queues::structs::transfer_history_row::TransferHistoryRow;
use crate::queues::structs::transfer_ip_row::TransferIpRow;
use crate::queues::structs::user_row::UserRow;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Hands a formatted tuple to a queue without ever blocking the caller.
    /// On back-pressure the send is parked on the blocking pool instead;
    /// once enqueued, a tuple is commit-semantic.
    fn enqueue(&self, channel: &FlushChannel, buffer: Vec<u8>) {
        match channel.sender.try_send(buffer) {
            Ok(_) => {}
            Err(TrySendError::Full(buffer)) => {
                let sender = channel.sender.clone();
                tokio::task::spawn_blocking(move || {
                    let _ = sender.send(buffer);
                });
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("[QUEUE] dropped a tuple on a closed queue during shutdown");
            }
        }
    }

    pub fn queue_torrent_row(&self, row: TorrentRow) {
        let mut buffer = self.queues.pool.lease();
        row.encode(&mut buffer);
        self.enqueue(&self.queues.torrents, buffer);
    }

    pub fn queue_user_row(&self, row: UserRow) {
        let mut buffer = self.queues.pool.lease();
        row.encode(&mut buffer);
        self.enqueue(&self.queues.users, buffer);
    }

    pub fn queue_transfer_history_row(&self, row: TransferHistoryRow) {
        let mut buffer = self.queues.pool.lease();
        row.encode(&mut buffer);
        self.enqueue(&self.queues.transfer_history, buffer);
    }

    pub fn queue_transfer_ip_row(&self, row: TransferIpRow) {
        let mut buffer = self.queues.pool.lease();
        row.encode(&mut buffer);
        self.enqueue(&self.queues.transfer_ips, buffer);
    }

    pub fn queue_snatch_row(&self, row: SnatchRow) {
        let mut buffer = self.queues.pool.lease();
        row.encode(&mut buffer);
        self.enqueue(&self.queues.snatches, buffer);
    }

    /// Announce-event records are best-effort: full queue drops the record.
    pub fn queue_event_record(&self, record: &AnnounceEventRecord) {
        let mut buffer = self.queues.pool.lease();
        if serde_json::to_writer(&mut buffer, record).is_err() {
            self.queues.pool.release(buffer);
            return;
        }
        buffer.push(b'\n');
        match self.queues.events.sender.try_send(buffer) {
            Ok(_) => {}
            Err(TrySendError::Full(buffer)) | Err(TrySendError::Disconnected(buffer)) => {
                self.update_stats(StatsEvent::EventsDropped, 1);
                self.queues.pool.release(buffer);
            }
        }
    }
}
