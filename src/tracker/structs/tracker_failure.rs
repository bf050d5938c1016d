/// A protocol failure reported to the client.
///
/// Rendered as a bencoded dictionary under HTTP 200, because BitTorrent
/// clients only read the body of a 200 response. The interval is a retry
/// hint: long for authorization problems, short for transient conditions.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TrackerFailure {
    pub reason: String,
    pub interval: u64,
}
