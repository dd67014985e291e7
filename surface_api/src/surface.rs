//! The render surface trait

use crate::{NavigationRequest, SurfaceError, SurfaceSettings};

/// The render surface interface
///
/// This defines what the host shell needs from the web-rendering surface
/// it embeds. Multiple implementations are possible:
/// - Simulated surface (for testing and the demo daemon)
/// - Platform surface (a real embedded web view)
///
/// # Design Principles
///
/// **Explicit configuration**: The surface applies exactly the settings it
/// is handed; it has no defaults of its own.
///
/// **Fire-and-forget evaluation**: Script evaluation returns without a
/// result. Nothing in the shell awaits script completion.
///
/// **Queued navigation**: The surface never navigates externally on its
/// own. It queues the requests page content raises, and the shell drains
/// and answers them.
///
/// # Example
///
/// ```
/// use surface_api::{RenderSurface, SurfaceError, SurfaceSettings};
///
/// fn configure<S: RenderSurface>(surface: &mut S) -> Result<(), SurfaceError> {
///     surface.apply_settings(&SurfaceSettings::default())?;
///     surface.load_url("https://app.example/")?;
///     Ok(())
/// }
/// ```
pub trait RenderSurface {
    /// Applies the given settings to the surface
    ///
    /// Replaces the surface's current settings wholesale; there is no
    /// per-option application.
    fn apply_settings(&mut self, settings: &SurfaceSettings) -> Result<(), SurfaceError>;

    /// Loads a URL into the surface
    ///
    /// Loading pushes a new entry onto the surface's history.
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;

    /// Evaluates a script in the page context
    ///
    /// Fire-and-forget: no result is returned and nothing awaits the
    /// script's completion. Fails only when the surface is not ready to
    /// host script at all.
    fn evaluate_script(&mut self, script: &str) -> Result<(), SurfaceError>;

    /// Returns true if the surface has backward history
    fn can_go_back(&self) -> bool;

    /// Steps the surface back one history entry
    ///
    /// # Returns
    ///
    /// `SurfaceError::NoBackHistory` when already at the oldest entry.
    fn go_back(&mut self) -> Result<(), SurfaceError>;

    /// Installs a native bridge namespace into the page script context
    ///
    /// After installation, page script can invoke the named operations on
    /// the namespace object. Re-installing a namespace replaces its
    /// operation set.
    ///
    /// # Arguments
    ///
    /// * `namespace` - The global name the bridge appears under
    /// * `operations` - The operation names the namespace exposes
    fn install_bridge(&mut self, namespace: &str, operations: &[String])
        -> Result<(), SurfaceError>;

    /// Drains the navigation requests page content has raised
    ///
    /// Requests are returned in the order they were raised and are
    /// removed from the surface's queue. The shell answers each one.
    fn take_navigation_requests(&mut self) -> Vec<NavigationRequest>;
}
