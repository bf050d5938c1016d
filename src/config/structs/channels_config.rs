use serde::{Deserialize, Serialize};

/// Bounded capacities of the five flush queues.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChannelsConfig {
    pub torrents: usize,
    pub users: usize,
    pub transfer_history: usize,
    pub transfer_ips: usize,
    pub snatches: usize,
}
