//! # Simulated Surface
//!
//! This crate provides a simulated implementation of the surface API.
//!
//! ## Purpose
//!
//! The simulated surface allows testing shell behavior without a web
//! engine:
//! - Runs under `cargo test`
//! - Deterministic (no real rendering, no platform callbacks)
//! - Inspectable (history, settings, evaluations, installed bridges)
//!
//! ## Philosophy
//!
//! **Testability is a first-class design constraint.**
//!
//! This is not a "toy" or "mock" - it's a full implementation of the
//! surface API with a modeled page context: a history stack, the page's
//! registered globals, and a script evaluation log. It does not execute
//! script; it recognizes the one expression shape the shell itself
//! evaluates (the back-button probe) and applies its documented effect.
//! Everything else is recorded verbatim as an opaque evaluation.

use serde::{Deserialize, Serialize};
use shell_types::SurfaceId;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use surface_api::{NavigationRequest, RenderSurface, SurfaceError, SurfaceSettings};

/// What a recorded script evaluation did to the page model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptOutcome {
    /// The probe found its handler global registered and invoked it
    HandlerInvoked(String),
    /// The probe's fallback stepped page history back one entry
    HistorySteppedBack,
    /// The probe's fallback ran at the top of history; nothing moved
    HistoryBackNoOp,
    /// Not a recognized probe shape; recorded without effect
    Opaque,
}

/// A script evaluation recorded by the surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedScript {
    /// The script text as handed to the surface
    pub script: String,
    /// What the evaluation did
    pub outcome: ScriptOutcome,
}

/// Recognizes the back-button probe shape and extracts the global name
///
/// The shape is exactly
/// `if (window.NAME) { window.NAME(); } else { window.history.back(); }`
/// for an identifier NAME. Anything else is not a probe.
fn parse_handler_probe(script: &str) -> Option<&str> {
    let rest = script.trim().strip_prefix("if (window.")?;
    let paren = rest.find(')')?;
    let name = &rest[..paren];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let expected_tail = format!(
        " {{ window.{}(); }} else {{ window.history.back(); }}",
        name
    );
    if &rest[paren + 1..] == expected_tail.as_str() {
        Some(name)
    } else {
        None
    }
}

/// Simulated render surface state
///
/// All state a real surface would hide is directly accessible for
/// testing: applied settings, the history stack, registered page
/// globals, installed bridge namespaces, and the evaluation log.
pub struct SimSurface {
    id: SurfaceId,
    /// Whether the surface can host content and script right now
    ready: bool,
    /// Settings last applied, None until the shell configures us
    settings: Option<SurfaceSettings>,
    /// History stack; `position` indexes the current entry
    history: Vec<String>,
    position: usize,
    /// Zero-argument globals the page has registered
    page_globals: BTreeSet<String>,
    /// Installed bridge namespaces and their operation names
    bridges: BTreeMap<String, Vec<String>>,
    /// Navigation requests page content has raised, oldest first
    pending_navigations: VecDeque<NavigationRequest>,
    /// Every URL handed to `load_url`, in order
    loads: Vec<String>,
    /// Every script evaluation, in order
    evaluations: Vec<EvaluatedScript>,
}

impl SimSurface {
    /// Creates a ready surface with empty history
    pub fn new() -> Self {
        Self {
            id: SurfaceId::new(),
            ready: true,
            settings: None,
            history: Vec::new(),
            position: 0,
            page_globals: BTreeSet::new(),
            bridges: BTreeMap::new(),
            pending_navigations: VecDeque::new(),
            loads: Vec::new(),
            evaluations: Vec::new(),
        }
    }

    /// Returns the surface identifier
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Marks the surface ready or torn down
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Returns true if the surface can host content
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the settings the shell applied, if any
    pub fn settings(&self) -> Option<&SurfaceSettings> {
        self.settings.as_ref()
    }

    /// Returns the URL of the current history entry
    pub fn current_url(&self) -> Option<&str> {
        self.history.get(self.position).map(String::as_str)
    }

    /// Returns the number of history entries
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Registers a zero-argument global in the page context
    ///
    /// Models page script assigning `window.NAME = function() {...}`.
    pub fn define_page_global(&mut self, name: impl Into<String>) {
        self.page_globals.insert(name.into());
    }

    /// Removes a page global; returns true if it was registered
    ///
    /// Models page script assigning `window.NAME = undefined` on
    /// teardown.
    pub fn remove_page_global(&mut self, name: &str) -> bool {
        self.page_globals.remove(name)
    }

    /// Returns true if the page has registered this global
    pub fn has_page_global(&self, name: &str) -> bool {
        self.page_globals.contains(name)
    }

    /// Raises a navigation request from page content
    ///
    /// Models a link tap, redirect, or script location change. The
    /// request sits in the queue until the shell drains it.
    pub fn raise_navigation(&mut self, request: NavigationRequest) {
        self.pending_navigations.push_back(request);
    }

    /// Returns the number of undrained navigation requests
    pub fn pending_navigation_count(&self) -> usize {
        self.pending_navigations.len()
    }

    /// Returns the operations installed under a bridge namespace
    pub fn installed_bridge(&self, namespace: &str) -> Option<&[String]> {
        self.bridges.get(namespace).map(Vec::as_slice)
    }

    /// Returns the installed bridge namespaces, sorted
    pub fn installed_namespaces(&self) -> Vec<&str> {
        self.bridges.keys().map(String::as_str).collect()
    }

    /// Returns every URL handed to `load_url`, in order
    pub fn loads(&self) -> &[String] {
        &self.loads
    }

    /// Returns the script evaluation log, in order
    pub fn evaluations(&self) -> &[EvaluatedScript] {
        &self.evaluations
    }

    /// Returns the names of handler globals the probe has invoked
    pub fn handler_invocations(&self) -> Vec<&str> {
        self.evaluations
            .iter()
            .filter_map(|e| match &e.outcome {
                ScriptOutcome::HandlerInvoked(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Counts fallback history-back no-ops (probe at top of history)
    pub fn history_back_noops(&self) -> usize {
        self.evaluations
            .iter()
            .filter(|e| e.outcome == ScriptOutcome::HistoryBackNoOp)
            .count()
    }
}

impl Default for SimSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for SimSurface {
    fn apply_settings(&mut self, settings: &SurfaceSettings) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        self.settings = Some(settings.clone());
        Ok(())
    }

    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        if url.trim().is_empty() {
            return Err(SurfaceError::InvalidUrl(url.to_string()));
        }
        // Loading discards forward entries, like any browser history
        if !self.history.is_empty() {
            self.history.truncate(self.position + 1);
        }
        self.history.push(url.to_string());
        self.position = self.history.len() - 1;
        self.loads.push(url.to_string());
        Ok(())
    }

    fn evaluate_script(&mut self, script: &str) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        let outcome = match parse_handler_probe(script) {
            Some(name) => {
                if self.page_globals.contains(name) {
                    ScriptOutcome::HandlerInvoked(name.to_string())
                } else if self.position > 0 {
                    self.position -= 1;
                    ScriptOutcome::HistorySteppedBack
                } else {
                    // window.history.back() at the top of history
                    ScriptOutcome::HistoryBackNoOp
                }
            }
            None => ScriptOutcome::Opaque,
        };
        self.evaluations.push(EvaluatedScript {
            script: script.to_string(),
            outcome,
        });
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.position > 0
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        if self.position == 0 {
            return Err(SurfaceError::NoBackHistory);
        }
        self.position -= 1;
        Ok(())
    }

    fn install_bridge(
        &mut self,
        namespace: &str,
        operations: &[String],
    ) -> Result<(), SurfaceError> {
        if !self.ready {
            return Err(SurfaceError::NotReady);
        }
        self.bridges
            .insert(namespace.to_string(), operations.to_vec());
        Ok(())
    }

    fn take_navigation_requests(&mut self) -> Vec<NavigationRequest> {
        self.pending_navigations.drain(..).collect()
    }
}
