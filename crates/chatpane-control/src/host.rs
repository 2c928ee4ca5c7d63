//! Host framework boundary.
//!
//! The embedding host drives the control through a fixed four-method
//! lifecycle: initialize once, update on every configuration/layout change,
//! read outputs, destroy. This module defines that inbound contract and the
//! context the host supplies per call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use chatpane_common::PixelSize;
use chatpane_surface::MountHost;

/// Host-supplied parameters read on each update. Replaced wholesale every
/// call; the control keeps no parameter history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    /// Token endpoint URL. `None` means "no change", not "clear".
    pub token_endpoint: Option<String>,
    /// BCP 47 locale tag for the widget UI.
    pub locale: Option<String>,
}

/// Snapshot of host state for one lifecycle call.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    pub parameters: Parameters,
    /// Dimensions the host has allocated to the control.
    pub allocated: PixelSize,
}

impl HostContext {
    pub fn new(parameters: Parameters, allocated: PixelSize) -> Self {
        Self {
            parameters,
            allocated,
        }
    }
}

/// The control produces no outputs; the host contract still requires the
/// accessor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Outputs {}

/// Callback the host hands over at initialize; invoked if the control ever
/// wants its outputs re-read.
pub type NotifyOutputsChanged = Arc<dyn Fn() + Send + Sync>;

/// The fixed lifecycle surface an embedding host drives.
pub trait HostControl {
    /// Called once before any update. Hands over the mount point and the
    /// output-change callback.
    fn initialize(
        &mut self,
        context: &HostContext,
        notify_output_changed: NotifyOutputsChanged,
        mount: Arc<dyn MountHost>,
    );

    /// Called on every configuration or layout change.
    fn on_update(&mut self, context: &HostContext);

    /// Current outputs. Always empty for this control.
    fn outputs(&self) -> Outputs;

    /// Called when the host removes the control.
    fn on_destroy(&mut self);
}
