//! Conversation start/end signaling.
//!
//! Start posts the welcome-dialog request over the session handle and logs
//! the outcome from a detached task; there is no backpressure and no replay.

use std::sync::Arc;

use tracing::{debug, warn};

use chatpane_transport::{Activity, ChannelAccount, ChatSession, WELCOME_EVENT};

/// Post the start-conversation event, attributed to the fixed user identity.
/// Fire-and-forget: the activity id or error is only logged.
pub fn start_conversation(session: Arc<dyn ChatSession>, identity: ChannelAccount) {
    let activity = Activity::event(WELCOME_EVENT, identity);
    tokio::spawn(async move {
        match session.post_activity(activity).await {
            Ok(id) => debug!(activity_id = %id, "posted welcome activity"),
            Err(e) => warn!("error posting welcome activity: {e}"),
        }
    });
}

/// Terminate the conversation if a session handle exists; no-op otherwise.
pub fn end_conversation(session: Option<&Arc<dyn ChatSession>>) {
    if let Some(session) = session {
        session.end();
        debug!("conversation ended");
    }
}
