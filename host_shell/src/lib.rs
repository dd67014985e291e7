//! # Host Shell
//!
//! The Caddis host shell: the native wrapper around an embedded
//! web-rendering surface. It initializes the push session, configures
//! the surface, installs the native bridge, keeps every navigation
//! inside the surface, and hands the hardware back button to page
//! script.
//!
//! ## Philosophy
//!
//! - **The page decides, the shell applies**: Back-button policy lives
//!   in page script; bridge handlers return directives instead of
//!   reaching into the shell
//! - **One-way lifecycle**: `Created` → `Running` → `Finished`, never
//!   backwards; `finish` is idempotent
//! - **Deterministic**: Logical time only; every externally visible step
//!   lands in the host event log
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A web engine host process (the surface is behind a trait)
//! - A push delivery pipeline (the session is init-and-forget here)
//! - A router for the hosted application (pages own their routes)

pub mod events;
pub mod splash;

pub use events::{FinishReason, HostEvent, HostEventLog};
pub use splash::SplashController;

use input_types::{KeyCode, KeyDisposition, KeyEvent};
use push_session::PushSession;
use script_bridge::{
    back_probe, standard_bridge, BridgeError, HostDirective, OpContext, ScriptBridge, OP_GO_BACK,
};
use shell_config::ShellConfig;
use std::fmt;
use surface_api::{NavigationDisposition, NavigationRequest, RenderSurface, SurfaceError};

/// Shell lifecycle state
///
/// Strictly one-way. A finished shell stays finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Constructed, not yet created by the platform
    Created,
    /// `on_create` completed; the shell is serving its surface
    Running,
    /// The shell finished; nothing runs after this
    Finished,
}

impl fmt::Display for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Running => write!(f, "running"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// The host shell
///
/// Owns the surface, the bridge table, the push session, and the event
/// log. Drives everything from explicit calls; holds no threads and no
/// wall-clock time.
pub struct HostShell<S: RenderSurface> {
    config: ShellConfig,
    surface: S,
    bridge: ScriptBridge,
    push: PushSession,
    state: ShellState,
    events: HostEventLog,
    splash: SplashController,
    time_ns: u64,
}

impl<S: RenderSurface> HostShell<S> {
    /// Creates a shell over a surface with the standard bridge
    ///
    /// Nothing touches the surface until [`on_create`](Self::on_create).
    pub fn new(config: ShellConfig, surface: S) -> Self {
        Self {
            config,
            surface,
            bridge: standard_bridge(),
            push: PushSession::new(),
            state: ShellState::Created,
            events: HostEventLog::new(),
            splash: SplashController::hidden(),
            time_ns: 0,
        }
    }

    /// Brings the shell up
    ///
    /// In order: push session init (fire-and-forget; failure is logged
    /// and startup continues), surface settings, bridge installation,
    /// splash, start URL. Navigation interception needs no installation
    /// step; every request drained from the surface is answered
    /// in-surface from the first one on.
    ///
    /// Creation is single-shot; calling again is a no-op.
    pub fn on_create(&mut self) -> Result<(), SurfaceError> {
        if self.state != ShellState::Created {
            return Ok(());
        }

        match self.push.init(self.config.push.app_key.as_str()) {
            Ok(()) => self.events.record(HostEvent::PushInitSucceeded {
                timestamp_ns: self.time_ns,
            }),
            Err(error) => self.events.record(HostEvent::PushInitFailed {
                timestamp_ns: self.time_ns,
                error: error.to_string(),
            }),
        }

        self.surface.apply_settings(&self.config.surface)?;
        self.events.record(HostEvent::SettingsApplied {
            timestamp_ns: self.time_ns,
        });

        let operations = self.bridge.operation_names();
        self.surface
            .install_bridge(self.bridge.namespace(), &operations)?;
        self.events.record(HostEvent::BridgeInstalled {
            timestamp_ns: self.time_ns,
            namespace: self.bridge.namespace().to_string(),
            operations,
        });

        self.splash
            .show(self.time_ns, self.config.splash.duration_ns());
        self.events.record(HostEvent::SplashShown {
            timestamp_ns: self.time_ns,
        });

        self.surface.load_url(&self.config.server.start_url)?;
        self.events.record(HostEvent::StartUrlLoaded {
            timestamp_ns: self.time_ns,
            url: self.config.server.start_url.clone(),
        });

        self.state = ShellState::Running;
        Ok(())
    }

    /// Handles a hardware key event
    ///
    /// Back key-down (press or auto-repeat) evaluates the back probe in
    /// the page and is always consumed, even when evaluation fails.
    /// Every other event is unhandled and falls through to the
    /// platform's default handling.
    pub fn on_key_event(&mut self, event: KeyEvent) -> KeyDisposition {
        if event.code != KeyCode::Back || !event.is_down() {
            return KeyDisposition::Unhandled;
        }

        match self.surface.evaluate_script(&back_probe()) {
            Ok(()) => self.events.record(HostEvent::BackProbeDispatched {
                timestamp_ns: self.time_ns,
            }),
            Err(error) => self.events.record(HostEvent::BackProbeFailed {
                timestamp_ns: self.time_ns,
                error: error.to_string(),
            }),
        }
        KeyDisposition::Consumed
    }

    /// Answers one navigation request
    ///
    /// The answer is always [`NavigationDisposition::LoadInSurface`]:
    /// typed and legacy requests alike are re-issued to this surface,
    /// never handed to the platform.
    pub fn on_navigation_request(&mut self, request: &NavigationRequest) -> NavigationDisposition {
        match self.surface.load_url(request.url()) {
            Ok(()) => self.events.record(HostEvent::NavigationReissued {
                timestamp_ns: self.time_ns,
                url: request.url().to_string(),
            }),
            Err(error) => self.events.record(HostEvent::NavigationRejected {
                timestamp_ns: self.time_ns,
                url: request.url().to_string(),
                error: error.to_string(),
            }),
        }
        NavigationDisposition::LoadInSurface
    }

    /// Drains and answers every pending navigation request
    ///
    /// Returns how many requests were answered.
    pub fn pump_navigation(&mut self) -> usize {
        let requests = self.surface.take_navigation_requests();
        let count = requests.len();
        for request in &requests {
            self.on_navigation_request(request);
        }
        count
    }

    /// Invokes a bridge operation, as page script would
    ///
    /// Builds the operation context from current surface state, runs the
    /// handler, and applies the returned directive.
    pub fn invoke_bridge(&mut self, operation: &str) -> Result<(), BridgeError> {
        let context = OpContext::new(self.surface.can_go_back());
        let directive = self.bridge.invoke(operation, &context)?;

        match directive {
            HostDirective::None => {}
            HostDirective::NavigateBack => {
                // The context said we can; the surface cannot have moved since
                let _ = self.surface.go_back();
            }
            HostDirective::Finish => {
                let reason = if operation == OP_GO_BACK {
                    FinishReason::BridgeBackExhausted
                } else {
                    FinishReason::BridgeExit
                };
                self.finish(reason);
            }
        }
        Ok(())
    }

    /// Tears the shell down
    ///
    /// Records the teardown and finishes the shell. Finishing is
    /// idempotent, so destroying an already-finished shell records the
    /// teardown but no second finish.
    pub fn on_destroy(&mut self) {
        self.events.record(HostEvent::Destroyed {
            timestamp_ns: self.time_ns,
        });
        self.finish(FinishReason::Destroyed);
    }

    /// Advances logical time
    ///
    /// Hides the splash when its deadline is reached.
    pub fn advance_time(&mut self, delta_ns: u64) {
        self.time_ns += delta_ns;
        if self.splash.tick(self.time_ns) {
            self.events.record(HostEvent::SplashHidden {
                timestamp_ns: self.time_ns,
            });
        }
    }

    /// Dismisses the splash ahead of its deadline
    pub fn dismiss_splash(&mut self) {
        if self.splash.is_visible() {
            self.splash.dismiss();
            self.events.record(HostEvent::SplashHidden {
                timestamp_ns: self.time_ns,
            });
        }
    }

    fn finish(&mut self, reason: FinishReason) {
        if self.state == ShellState::Finished {
            return;
        }
        self.state = ShellState::Finished;
        self.events.record(HostEvent::Finished {
            timestamp_ns: self.time_ns,
            reason,
        });
    }

    /// Returns the lifecycle state
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Returns true while the shell serves its surface
    pub fn is_running(&self) -> bool {
        self.state == ShellState::Running
    }

    /// Returns true once the shell has finished
    pub fn is_finished(&self) -> bool {
        self.state == ShellState::Finished
    }

    /// Returns the configuration the shell was built with
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Returns the surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably
    ///
    /// Tests and the demo daemon drive page-side behavior through this.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the bridge table
    pub fn bridge(&self) -> &ScriptBridge {
        &self.bridge
    }

    /// Returns the push session
    pub fn push(&self) -> &PushSession {
        &self.push
    }

    /// Returns the push session mutably
    pub fn push_mut(&mut self) -> &mut PushSession {
        &mut self.push
    }

    /// Returns the recorded host events
    pub fn events(&self) -> &[HostEvent] {
        self.events.events()
    }

    /// Returns the current logical time
    pub fn current_time_ns(&self) -> u64 {
        self.time_ns
    }

    /// Returns true while the splash is up
    pub fn splash_visible(&self) -> bool {
        self.splash.is_visible()
    }
}
