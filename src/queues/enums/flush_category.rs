/// The five batched write categories, one flush worker each.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FlushCategory {
    Torrents,
    Users,
    TransferHistory,
    TransferIps,
    Snatches,
}
