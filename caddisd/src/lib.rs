//! # Caddis Host Daemon
//!
//! This crate provides the demo runtime for the Caddis host shell.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The shell and surface never print
//! - **Input is explicit steps**: Scripted sessions, not stdin streams
//! - **Deterministic mode is the only mode**: Logical time, simulated surface
//! - **Output is the event log**: What the shell did, in order
//!
//! ## Responsibilities
//!
//! The demo runtime:
//! - Loads (or defaults) the shell configuration
//! - Creates the shell over a simulated surface
//! - Replays a scripted session (back presses, navigations, bridge calls)
//! - Prints the recorded host events when the session ends
//!
//! ## Non-Responsibilities
//!
//! The demo runtime does NOT:
//! - Embed a real web engine
//! - Talk to a push service
//! - Render anything beyond the event report

pub mod runtime;
pub mod session_script;

pub use runtime::{HostRuntime, HostRuntimeConfig, HostRuntimeError};
pub use session_script::{SessionScript, SessionScriptError, SessionStep};
