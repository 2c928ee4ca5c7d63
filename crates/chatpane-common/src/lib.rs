pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ChatpaneError, ConfigError, HostError};
pub use events::{Event, EventBus};
pub use id::{new_id, SessionId};
pub use types::{ControlState, PixelSize};

pub type Result<T> = std::result::Result<T, ChatpaneError>;
