//! Session lifecycle controller.
//!
//! Watches the token endpoint across host updates. On a change it tears the
//! old session and surface down, then fetches a token and connects in a
//! spawned task. Every attempt is tagged with a generation number; a
//! completion whose generation no longer matches the controller's is
//! discarded, so overlapping endpoint changes cannot install a stale
//! session. Completions are drained at the start of every update.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use chatpane_common::{ControlState, Event, EventBus};
use chatpane_config::schema::{AvatarConfig, StyleConfig};
use chatpane_config::ChatpaneConfig;
use chatpane_surface::{SurfaceManager, SurfaceOptions};
use chatpane_transport::{
    AvatarOptions, ChannelAccount, ChatConnector, ChatRenderer, ChatSession, RenderRequest,
    StyleSet, TokenSource, TransportError,
};

use crate::host::HostContext;
use crate::signaling;

/// External collaborators the lifecycle drives.
#[derive(Clone)]
pub struct SessionDeps {
    pub tokens: Arc<dyn TokenSource>,
    pub connector: Arc<dyn ChatConnector>,
    pub renderer: Arc<dyn ChatRenderer>,
}

/// Result of one generation-tagged connect attempt.
struct ConnectOutcome {
    generation: u64,
    endpoint: String,
    result: Result<Arc<dyn ChatSession>, TransportError>,
}

pub struct SessionLifecycle {
    deps: SessionDeps,
    config: ChatpaneConfig,
    bus: Arc<EventBus>,
    /// Last-seen endpoint; compared by raw string equality.
    endpoint: Option<String>,
    /// Bumped on every endpoint change; stamps in-flight connects.
    generation: u64,
    session: Option<Arc<dyn ChatSession>>,
    state: ControlState,
    completions: Arc<Mutex<Vec<ConnectOutcome>>>,
    in_flight: Vec<JoinHandle<()>>,
}

impl SessionLifecycle {
    pub fn new(config: ChatpaneConfig, deps: SessionDeps, bus: Arc<EventBus>) -> Self {
        Self {
            deps,
            config,
            bus,
            endpoint: None,
            generation: 0,
            session: None,
            state: ControlState::Idle,
            completions: Arc::new(Mutex::new(Vec::new())),
            in_flight: Vec::new(),
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Drive the controller for one host update.
    pub fn handle_update(&mut self, ctx: &HostContext, surfaces: &mut SurfaceManager) {
        self.apply_completions(ctx, surfaces);

        // An unset endpoint means "no change", not "clear".
        let Some(endpoint) = ctx.parameters.token_endpoint.as_deref() else {
            return;
        };
        if self.endpoint.as_deref() == Some(endpoint) {
            return;
        }

        debug!(endpoint = %endpoint, "token endpoint changed");
        self.endpoint = Some(endpoint.to_string());
        self.generation += 1;
        self.bus.publish(Event::EndpointChanged {
            endpoint: endpoint.to_string(),
        });

        // Old session and surface go away before anything new is attempted.
        self.invalidate(surfaces);
        self.spawn_connect(endpoint.to_string());
    }

    /// Drain finished connect attempts and install the one matching the
    /// current generation, if any.
    pub fn apply_completions(&mut self, ctx: &HostContext, surfaces: &mut SurfaceManager) {
        let outcomes = match self.completions.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };

        for outcome in outcomes {
            if outcome.generation != self.generation {
                debug!(endpoint = %outcome.endpoint, "discarding stale connect result");
                if let Ok(session) = outcome.result {
                    session.end();
                }
                continue;
            }

            match outcome.result {
                Ok(session) => self.install(session, ctx, surfaces),
                Err(e) => {
                    warn!(endpoint = %outcome.endpoint, "session establishment failed: {e}");
                    self.bus.publish(Event::TokenFetchFailed {
                        endpoint: outcome.endpoint,
                    });
                    self.state = ControlState::Idle;
                }
            }
        }
    }

    /// End the session and detach the surface ahead of control removal.
    /// Any in-flight connect becomes stale.
    pub fn shutdown(&mut self, surfaces: &mut SurfaceManager) {
        self.generation += 1;
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        self.invalidate(surfaces);
    }

    /// Await outstanding connect tasks. Hosts (and tests) that need
    /// deterministic sequencing call this, then apply completions via the
    /// next update.
    pub async fn await_in_flight(&mut self) {
        for handle in self.in_flight.drain(..) {
            let _ = handle.await;
        }
    }

    fn spawn_connect(&mut self, endpoint: String) {
        let generation = self.generation;
        let tokens = Arc::clone(&self.deps.tokens);
        let connector = Arc::clone(&self.deps.connector);
        let sink = Arc::clone(&self.completions);
        self.state = ControlState::Connecting;

        let handle = tokio::spawn(async move {
            let result = connect(tokens, connector, &endpoint).await;
            if let Ok(mut pending) = sink.lock() {
                pending.push(ConnectOutcome {
                    generation,
                    endpoint,
                    result,
                });
            }
        });
        self.in_flight.push(handle);
    }

    fn install(
        &mut self,
        session: Arc<dyn ChatSession>,
        ctx: &HostContext,
        surfaces: &mut SurfaceManager,
    ) {
        let mount_id = self.config.surface.mount_id.clone();

        match surfaces.create(SurfaceOptions::with_mount_id(mount_id.as_str()), ctx.allocated) {
            Ok(true) => {
                self.bus.publish(Event::SurfaceMounted {
                    mount_id: mount_id.clone(),
                });
            }
            Ok(false) => {}
            Err(e) => {
                // No mounted surface, no session: keep the invariant.
                warn!("failed to attach surface: {e}");
                session.end();
                self.state = ControlState::Idle;
                return;
            }
        }

        self.session = Some(Arc::clone(&session));

        let request = self.render_request(ctx);
        if let Err(e) = self.deps.renderer.render(Arc::clone(&session), &request) {
            warn!(mount_id = %mount_id, "render entry point failed: {e}");
        }

        signaling::start_conversation(session, self.identity());
        self.bus.publish(Event::SessionStarted);
        self.state = ControlState::Active;
    }

    fn invalidate(&mut self, surfaces: &mut SurfaceManager) {
        let session = self.session.take();
        if session.is_some() {
            signaling::end_conversation(session.as_ref());
            self.bus.publish(Event::SessionEnded);
        }

        match surfaces.detach() {
            Ok(true) => {
                self.bus.publish(Event::SurfaceRemoved {
                    mount_id: self.config.surface.mount_id.clone(),
                });
            }
            Ok(false) => {}
            Err(e) => warn!("failed to detach surface: {e}"),
        }
        self.state = ControlState::Idle;
    }

    fn render_request(&self, ctx: &HostContext) -> RenderRequest {
        let locale = ctx
            .parameters
            .locale
            .clone()
            .unwrap_or_else(|| self.config.locale.fallback.clone());

        RenderRequest {
            mount_id: self.config.surface.mount_id.clone(),
            user: self.identity(),
            locale,
            style: style_set(&self.config.style),
            avatar: avatar_options(&self.config.avatar),
        }
    }

    fn identity(&self) -> ChannelAccount {
        ChannelAccount::new(
            self.config.identity.user_id.clone(),
            self.config.identity.display_name.clone(),
        )
    }
}

/// Fetch a token and establish the session. An empty token is a failure:
/// no session is created from it.
async fn connect(
    tokens: Arc<dyn TokenSource>,
    connector: Arc<dyn ChatConnector>,
    endpoint: &str,
) -> Result<Arc<dyn ChatSession>, TransportError> {
    let token = tokens.fetch_token(endpoint).await?;
    if token.is_empty() {
        return Err(TransportError::ApiError(
            "token endpoint returned an empty token".into(),
        ));
    }
    connector.connect(&token).await
}

fn style_set(config: &StyleConfig) -> StyleSet {
    StyleSet {
        accent: config.accent.clone(),
        background_color: config.background_color.clone(),
        bubble_border_color: config.bubble_border_color.clone(),
        send_box_button_color: config.send_box_button_color.clone(),
        timestamp_color: config.timestamp_color.clone(),
        transcript_terminator_font_size: config.transcript_terminator_font_size.clone(),
        root_width: config.root_width.clone(),
        root_height: config.root_height.clone(),
        hide_upload_button: config.hide_upload_button,
    }
}

fn avatar_options(config: &AvatarConfig) -> AvatarOptions {
    AvatarOptions {
        bot_image: config.bot_image.clone(),
        bot_initials: config.bot_initials.clone(),
        user_image: config.user_image.clone(),
        user_initials: config.user_initials.clone(),
    }
}
