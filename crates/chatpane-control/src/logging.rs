//! Logging bootstrap for embedding hosts.
//!
//! The control itself only emits `tracing` events; hosts that want the
//! stock subscriber call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Default filter directive when none is given or the given one is invalid.
pub const DEFAULT_DIRECTIVE: &str = "chatpane=info";

/// Initialize the global tracing subscriber with an env-filter directive,
/// e.g. `chatpane=debug`. `RUST_LOG` still applies on top. Safe to call
/// when a subscriber is already installed; the call is then a no-op.
pub fn init(directive: &str) {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .try_init();
}
