use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnnounceConfig {
    /// Reject client ports below 1024.
    pub strict_port: bool,
    /// Default number of peers returned when the client does not ask.
    pub numwant: u16,
    /// Hard ceiling on the number of peers returned.
    pub max_numwant: u16,
}
