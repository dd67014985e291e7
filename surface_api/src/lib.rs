//! # Surface API
//!
//! This crate defines the interface between the host shell and the
//! web-rendering surface it embeds.
//!
//! ## Philosophy
//!
//! The surface provides **mechanisms**, not policies:
//! - Settings application (not a settings store)
//! - URL loading and history stepping (not navigation policy)
//! - Script evaluation (fire-and-forget, no result plumbing)
//! - Bridge installation (not bridge dispatch)
//!
//! Policy — what to load, when to go back, which navigations stay
//! in-surface — lives in the host shell.
//!
//! ## Design Goals
//!
//! 1. **Testability**: The entire API can be implemented in memory
//! 2. **Explicitness**: The surface holds no hidden host state
//! 3. **Determinism**: No wall-clock, no threads, no platform callbacks
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A web engine (no layout, no DOM, no script execution semantics)
//! - A navigation policy layer (the shell decides dispositions)
//! - A rendering abstraction (nothing here draws)

pub mod error;
pub mod navigation;
pub mod settings;
pub mod surface;

pub use error::SurfaceError;
pub use navigation::{NavigationDisposition, NavigationInitiator, NavigationRequest};
pub use settings::{MixedContentPolicy, SurfaceSettings};
pub use surface::RenderSurface;
