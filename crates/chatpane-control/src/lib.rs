//! Embeddable chat pane control.
//!
//! Bridges a host framework's lifecycle callbacks to an external chat
//! library and a token-issuing backend:
//! - On endpoint change: tear down the old session and surface, fetch a
//!   fresh token, connect, mount the surface, render, post the welcome
//!   event.
//! - On layout change: reconcile the mounted surface's size with the
//!   host's allocation.
//!
//! The host drives everything through the four-method [`HostControl`]
//! lifecycle; the external chat library is reached through the trait seams
//! in `chatpane-transport`. Token fetches run in spawned tasks and are
//! generation-tagged, so overlapping endpoint changes never install a
//! stale session.

pub mod control;
pub mod host;
pub mod lifecycle;
pub mod logging;
pub mod reconciler;
pub mod signaling;

pub use control::ChatControl;
pub use host::{HostContext, HostControl, NotifyOutputsChanged, Outputs, Parameters};
pub use lifecycle::{SessionDeps, SessionLifecycle};
pub use reconciler::SizeReconciler;
