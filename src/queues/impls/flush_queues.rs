use crate::queues::enums::flush_category::FlushCategory;
use crate::queues::structs::flush_channel::FlushChannel;
use crate::queues::structs::flush_queues::FlushQueues;

impl FlushQueues {
    pub fn channel(&self, category: FlushCategory) -> &FlushChannel {
        match category {
            FlushCategory::Torrents => &self.torrents,
            FlushCategory::Users => &self.users,
            FlushCategory::TransferHistory => &self.transfer_history,
            FlushCategory::TransferIps => &self.transfer_ips,
            FlushCategory::Snatches => &self.snatches,
        }
    }

    pub fn pending_total(&self) -> usize {
        FlushCategory::ALL.iter().map(|category| self.channel(*category).len()).sum()
    }
}
