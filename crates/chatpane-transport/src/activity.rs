//! Activity types posted over a conversation channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chatpane_common::new_id;

/// Event name requesting the bot's welcome dialog at conversation start.
pub const WELCOME_EVENT: &str = "requestWelcomeDialog";

/// A party on the channel (the fixed local user, or the bot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAccount {
    pub id: String,
    pub name: String,
}

impl ChannelAccount {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Event,
    Message,
}

/// A single activity on the wire.
///
/// `local_id` is minted client-side for correlation; the transport assigns
/// its own id when the post is acknowledged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub from: ChannelAccount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub value: serde_json::Value,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "localId")]
    pub local_id: String,
}

impl Activity {
    /// A named event activity with an empty value payload.
    pub fn event(name: impl Into<String>, from: ChannelAccount) -> Self {
        Self {
            kind: ActivityKind::Event,
            from,
            name: Some(name.into()),
            text: None,
            value: serde_json::Value::String(String::new()),
            timestamp: Utc::now(),
            local_id: new_id(),
        }
    }

    /// A plain text message activity.
    pub fn message(text: impl Into<String>, from: ChannelAccount) -> Self {
        Self {
            kind: ActivityKind::Message,
            from,
            name: None,
            text: Some(text.into()),
            value: serde_json::Value::Null,
            timestamp: Utc::now(),
            local_id: new_id(),
        }
    }

    /// Attach a value payload to the activity.
    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = value;
        self
    }
}
