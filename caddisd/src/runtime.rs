//! # Demo Runtime
//!
//! Boots a host shell over a simulated surface and drives it from a
//! scripted session.

use crate::session_script::{SessionScript, SessionStep};
use host_shell::HostShell;
use input_types::{KeyCode, KeyEvent};
use script_bridge::BACK_HANDLER_GLOBAL;
use shell_config::{load_config_from_path, ShellConfig};
use sim_surface::SimSurface;
use std::fmt::Write as _;
use std::path::PathBuf;
use surface_api::{NavigationInitiator, NavigationRequest, SurfaceError};
use thiserror::Error;

/// Demo runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Demo runtime configuration
#[derive(Debug, Clone)]
pub struct HostRuntimeConfig {
    /// Optional shell config file; defaults apply when absent
    pub config_path: Option<PathBuf>,
    /// Optional session script text
    pub script: Option<String>,
    /// Maximum script steps to run (0 = unlimited)
    pub max_steps: usize,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            script: None,
            max_steps: 0,
        }
    }
}

/// Demo runtime
///
/// Owns a created shell and replays a session script against it, one
/// step at a time. Navigations a step raises are answered within the
/// same step.
pub struct HostRuntime {
    config: HostRuntimeConfig,
    shell: HostShell<SimSurface>,
    script: Option<SessionScript>,
    steps: usize,
}

impl HostRuntime {
    /// Creates a runtime with a created shell
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let shell_config = match &config.config_path {
            Some(path) => {
                let data = load_config_from_path(path)
                    .map_err(|e| HostRuntimeError::Config(e.to_string()))?;
                data.config
                    .validate()
                    .map_err(|e| HostRuntimeError::Config(e.to_string()))?;
                data.config
            }
            None => ShellConfig::default(),
        };

        let script = match &config.script {
            Some(text) => Some(
                SessionScript::from_text(text)
                    .map_err(|e| HostRuntimeError::Script(e.to_string()))?,
            ),
            None => None,
        };

        let mut shell = HostShell::new(shell_config, SimSurface::new());
        shell.on_create()?;

        Ok(Self {
            config,
            shell,
            script,
            steps: 0,
        })
    }

    /// Runs the scripted session
    ///
    /// Returns when:
    /// - The script is exhausted (or there is none)
    /// - The shell finished
    /// - Max steps reached (if configured)
    pub fn run(&mut self) -> Result<(), HostRuntimeError> {
        loop {
            if self.shell.is_finished() {
                break;
            }

            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                break;
            }

            let has_more = self.script.as_ref().map(SessionScript::has_more);
            if has_more != Some(true) {
                break;
            }

            self.step()?;
            self.steps += 1;
        }

        Ok(())
    }

    /// Executes one session step
    pub fn step(&mut self) -> Result<(), HostRuntimeError> {
        let step = match self.script.as_mut().and_then(SessionScript::next_step) {
            Some(step) => step,
            None => return Ok(()),
        };

        match step {
            SessionStep::BackPress => {
                self.shell.on_key_event(KeyEvent::down(KeyCode::Back));
            }
            SessionStep::Navigate(url) => {
                self.shell
                    .surface_mut()
                    .raise_navigation(NavigationRequest::typed(
                        url,
                        NavigationInitiator::LinkActivation,
                    ));
            }
            SessionStep::NavigateLegacy(url) => {
                self.shell
                    .surface_mut()
                    .raise_navigation(NavigationRequest::legacy(url));
            }
            SessionStep::HandlerOn => {
                self.shell
                    .surface_mut()
                    .define_page_global(BACK_HANDLER_GLOBAL);
            }
            SessionStep::HandlerOff => {
                self.shell
                    .surface_mut()
                    .remove_page_global(BACK_HANDLER_GLOBAL);
            }
            SessionStep::Bridge(operation) => {
                self.shell
                    .invoke_bridge(&operation)
                    .map_err(|e| HostRuntimeError::Bridge(e.to_string()))?;
            }
            SessionStep::Wait(millis) => {
                self.shell.advance_time(millis.saturating_mul(1_000_000));
            }
            SessionStep::Destroy => {
                self.shell.on_destroy();
            }
        }

        // Navigations the step raised are answered before the next step
        self.shell.pump_navigation();
        Ok(())
    }

    /// Formats the recorded session, one event per line
    pub fn event_report(&self) -> String {
        let mut report = String::new();
        for event in self.shell.events() {
            let _ = writeln!(report, "[{:>12}ns] {}", event.timestamp_ns(), event);
        }
        let _ = writeln!(report, "shell state: {}", self.shell.state());
        report
    }

    /// Returns the step count
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Returns the shell (for testing)
    pub fn shell(&self) -> &HostShell<SimSurface> {
        &self.shell
    }

    /// Returns the shell mutably (for testing)
    pub fn shell_mut(&mut self) -> &mut HostShell<SimSurface> {
        &mut self.shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_creation() {
        let runtime = HostRuntime::new(HostRuntimeConfig::default()).unwrap();

        assert_eq!(runtime.step_count(), 0);
        assert!(runtime.shell().is_running());
    }

    #[test]
    fn test_runtime_with_script() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("back\nwait 100ms".to_string()),
            max_steps: 10,
        };

        let runtime = HostRuntime::new(config);
        assert!(runtime.is_ok());
    }

    #[test]
    fn test_runtime_rejects_malformed_script() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("teleport home".to_string()),
            max_steps: 0,
        };

        let result = HostRuntime::new(config);
        assert!(matches!(result, Err(HostRuntimeError::Script(_))));
    }

    #[test]
    fn test_runtime_rejects_missing_config_file() {
        let config = HostRuntimeConfig {
            config_path: Some(PathBuf::from("/nonexistent/shell.json")),
            script: None,
            max_steps: 0,
        };

        let result = HostRuntime::new(config);
        assert!(matches!(result, Err(HostRuntimeError::Config(_))));
    }

    #[test]
    fn test_run_without_script_returns_immediately() {
        let mut runtime = HostRuntime::new(HostRuntimeConfig::default()).unwrap();

        runtime.run().unwrap();
        assert_eq!(runtime.step_count(), 0);
    }

    #[test]
    fn test_run_consumes_script() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("back\nback\nback".to_string()),
            max_steps: 0,
        };

        let mut runtime = HostRuntime::new(config).unwrap();
        runtime.run().unwrap();

        assert_eq!(runtime.step_count(), 3);
    }

    #[test]
    fn test_run_respects_max_steps() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("back\nback\nback\nback".to_string()),
            max_steps: 2,
        };

        let mut runtime = HostRuntime::new(config).unwrap();
        runtime.run().unwrap();

        assert_eq!(runtime.step_count(), 2);
    }

    #[test]
    fn test_run_stops_when_shell_finishes() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("bridge exitApp\nback\nback".to_string()),
            max_steps: 0,
        };

        let mut runtime = HostRuntime::new(config).unwrap();
        runtime.run().unwrap();

        assert!(runtime.shell().is_finished());
        assert_eq!(runtime.step_count(), 1);
    }

    #[test]
    fn test_unknown_bridge_operation_is_runtime_error() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("bridge selfDestruct".to_string()),
            max_steps: 0,
        };

        let mut runtime = HostRuntime::new(config).unwrap();
        let result = runtime.run();

        assert!(matches!(result, Err(HostRuntimeError::Bridge(_))));
    }

    #[test]
    fn test_event_report_lists_session() {
        let config = HostRuntimeConfig {
            config_path: None,
            script: Some("bridge exitApp".to_string()),
            max_steps: 0,
        };

        let mut runtime = HostRuntime::new(config).unwrap();
        runtime.run().unwrap();

        let report = runtime.event_report();
        assert!(report.contains("start url loaded"));
        assert!(report.contains("finished: bridge-exit"));
        assert!(report.contains("shell state: finished"));
    }
}
