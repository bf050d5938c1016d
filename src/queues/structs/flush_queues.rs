use tokio::sync::Mutex;
use crate::config::structs::channels_config::ChannelsConfig;
use crate::queues::structs::buffer_pool::BufferPool;
use crate::queues::structs::flush_channel::FlushChannel;

/// The five bounded flush queues, the optional announce-event queue, the
/// shared buffer pool, and the transfer-history writer lock.
#[derive(Debug)]
pub struct FlushQueues {
    pub torrents: FlushChannel,
    pub users: FlushChannel,
    pub transfer_history: FlushChannel,
    pub transfer_ips: FlushChannel,
    pub snatches: FlushChannel,
    /// JSON announce-event records for the recorder task.
    pub events: FlushChannel,
    pub pool: BufferPool,
    /// Serializes transfer_history writes between the flush worker and the
    /// purger's stale-peer sweep, so a peer's latest announce cannot land in
    /// the database after the sweep already marked it inactive.
    pub history_flush_lock: Mutex<()>,
}

impl FlushQueues {
    const EVENTS_CAPACITY: usize = 8192;

    pub fn from_config(channels: &ChannelsConfig) -> FlushQueues {
        FlushQueues {
            torrents: FlushChannel::new(channels.torrents),
            users: FlushChannel::new(channels.users),
            transfer_history: FlushChannel::new(channels.transfer_history),
            transfer_ips: FlushChannel::new(channels.transfer_ips),
            snatches: FlushChannel::new(channels.snatches),
            events: FlushChannel::new(Self::EVENTS_CAPACITY),
            pool: BufferPool::new(),
            history_flush_lock: Mutex::new(()),
        }
    }
}
