//! Transport boundary for the external chat library.
//!
//! The chat transport and renderer are owned by an external SDK; this crate
//! defines the trait seams the control drives them through:
//! - `ChatConnector` builds a session handle from a connection token
//! - `ChatSession` is the opaque conversation handle (post activities, end)
//! - `ChatRenderer` mounts the widget UI onto a surface
//! - `TokenSource` fetches connection tokens from the token endpoint

pub mod activity;
pub mod style;
pub mod token;

use std::sync::Arc;

use async_trait::async_trait;

pub use activity::{Activity, ActivityKind, ChannelAccount, WELCOME_EVENT};
pub use style::{AvatarOptions, StyleSet};
pub use token::{HttpTokenClient, TokenSource};

/// Opaque handle to an active conversation channel.
///
/// Supplied by the external chat library; the control never looks inside it.
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Post an activity over the channel. Returns the assigned activity id.
    async fn post_activity(&self, activity: Activity) -> Result<String, TransportError>;

    /// Terminate the conversation. Idempotent; posting after `end` fails
    /// with `TransportError::SessionEnded`.
    fn end(&self);
}

/// Factory that establishes a conversation channel from a token.
#[async_trait]
pub trait ChatConnector: Send + Sync {
    async fn connect(&self, token: &str) -> Result<Arc<dyn ChatSession>, TransportError>;
}

/// Parameters for the library's render entry point.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Element id of the mounted surface to bind to.
    pub mount_id: String,
    /// Identity shown as the local user.
    pub user: ChannelAccount,
    /// BCP 47 locale tag for the widget UI.
    pub locale: String,
    pub style: StyleSet,
    pub avatar: AvatarOptions,
}

/// Render entry point of the external chat library.
pub trait ChatRenderer: Send + Sync {
    fn render(
        &self,
        session: Arc<dyn ChatSession>,
        request: &RenderRequest,
    ) -> Result<(), TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Session ended")]
    SessionEnded,
    #[error("Timeout")]
    Timeout,
}
