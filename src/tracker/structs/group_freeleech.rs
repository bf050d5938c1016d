/// Multiplier override applied to every torrent of a group, in addition to
/// the per-torrent and per-user multipliers.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GroupFreeleech {
    pub up_multiplier: f64,
    pub down_multiplier: f64,
}
