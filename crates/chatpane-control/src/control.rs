//! The embeddable chat control.
//!
//! `ChatControl` wires the session lifecycle and the sizing reconciler
//! behind the host's four-method lifecycle. The host owns scheduling: it
//! calls `on_update` on every configuration/layout change, and the control
//! never blocks inside it. Token fetches complete in spawned tasks and are
//! applied on the next update (or via [`ChatControl::settle`]).

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use chatpane_common::{ControlState, Event, EventBus};
use chatpane_config::ChatpaneConfig;
use chatpane_surface::{MountHost, SurfaceManager};

use crate::host::{HostContext, HostControl, NotifyOutputsChanged, Outputs};
use crate::lifecycle::{SessionDeps, SessionLifecycle};
use crate::reconciler::SizeReconciler;

pub struct ChatControl {
    bus: Arc<EventBus>,
    lifecycle: SessionLifecycle,
    /// Present between `initialize` and `on_destroy`.
    surfaces: Option<SurfaceManager>,
    last_context: Option<HostContext>,
    /// Held for the host contract; the control produces no outputs.
    #[allow(dead_code)]
    notify_output_changed: Option<NotifyOutputsChanged>,
}

impl ChatControl {
    pub fn new(config: ChatpaneConfig, deps: SessionDeps) -> Self {
        let bus = Arc::new(EventBus::new(64));
        let lifecycle = SessionLifecycle::new(config, deps, Arc::clone(&bus));
        Self {
            bus,
            lifecycle,
            surfaces: None,
            last_context: None,
            notify_output_changed: None,
        }
    }

    /// Subscribe to lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    pub fn state(&self) -> ControlState {
        if self.surfaces.is_none() {
            return ControlState::Detached;
        }
        self.lifecycle.state()
    }

    /// Await in-flight connect attempts and apply their results. Hosts that
    /// need deterministic sequencing (shutdown paths, tests) call this;
    /// otherwise results are applied on the next `on_update`.
    pub async fn settle(&mut self) {
        self.lifecycle.await_in_flight().await;
        let Some(ctx) = self.last_context.clone() else {
            return;
        };
        if let Some(surfaces) = self.surfaces.as_mut() {
            self.lifecycle.apply_completions(&ctx, surfaces);
        }
    }
}

impl HostControl for ChatControl {
    fn initialize(
        &mut self,
        context: &HostContext,
        notify_output_changed: NotifyOutputsChanged,
        mount: Arc<dyn MountHost>,
    ) {
        debug!("initialize");
        self.surfaces = Some(SurfaceManager::new(mount));
        self.notify_output_changed = Some(notify_output_changed);
        self.last_context = Some(context.clone());
    }

    fn on_update(&mut self, context: &HostContext) {
        let Some(surfaces) = self.surfaces.as_mut() else {
            // Host contract violation; nothing to drive yet.
            return;
        };
        self.last_context = Some(context.clone());

        self.lifecycle.handle_update(context, surfaces);

        match SizeReconciler::reconcile(surfaces, context.allocated) {
            Ok(true) => {
                self.bus.publish(Event::SurfaceResized {
                    width: context.allocated.width,
                    height: context.allocated.height,
                });
            }
            Ok(false) => {}
            Err(e) => warn!("resize failed: {e}"),
        }
    }

    fn outputs(&self) -> Outputs {
        Outputs::default()
    }

    fn on_destroy(&mut self) {
        if let Some(surfaces) = self.surfaces.as_mut() {
            self.lifecycle.shutdown(surfaces);
        }
        self.surfaces = None;
        self.bus.publish(Event::Destroyed);
        debug!("destroyed");
    }
}
