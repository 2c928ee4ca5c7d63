use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Lifecycle events published by the control so embedding hosts can observe
/// the session and surface without polling internal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    EndpointChanged { endpoint: String },
    TokenFetchFailed { endpoint: String },
    SessionStarted,
    SessionEnded,
    SurfaceMounted { mount_id: String },
    SurfaceRemoved { mount_id: String },
    SurfaceResized { width: u32, height: u32 },
    Destroyed,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
