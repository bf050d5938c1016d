/// The `event` parameter of an announce request.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AnnounceEvent {
    Started,
    Stopped,
    Completed,
    /// Periodic announce without an explicit event.
    None,
}

impl AnnounceEvent {
    pub fn from_wire(value: &str) -> AnnounceEvent {
        match value {
            "started" => AnnounceEvent::Started,
            "stopped" => AnnounceEvent::Stopped,
            "completed" => AnnounceEvent::Completed,
            _ => AnnounceEvent::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::None => "",
        }
    }
}
