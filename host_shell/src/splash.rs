//! Splash screen controller
//!
//! Deterministic splash state driven by logical time. The shell shows
//! the splash at creation and hides it when time advances to the
//! deadline or when something dismisses it early. No timers, no
//! wall-clock.

/// Splash screen state
pub struct SplashController {
    visible: bool,
    deadline_ns: Option<u64>,
}

impl SplashController {
    /// Creates a hidden splash
    pub fn hidden() -> Self {
        Self {
            visible: false,
            deadline_ns: None,
        }
    }

    /// Shows the splash until `now_ns + duration_ns`
    pub fn show(&mut self, now_ns: u64, duration_ns: u64) {
        self.visible = true;
        self.deadline_ns = Some(now_ns.saturating_add(duration_ns));
    }

    /// Returns true while the splash is up
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the hide deadline while the splash is up
    pub fn deadline_ns(&self) -> Option<u64> {
        self.deadline_ns
    }

    /// Hides the splash immediately
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.deadline_ns = None;
    }

    /// Hides the splash once the deadline is reached
    ///
    /// Returns true on the tick that actually hid it, so the caller can
    /// record the transition exactly once.
    pub fn tick(&mut self, now_ns: u64) -> bool {
        match self.deadline_ns {
            Some(deadline) if self.visible && now_ns >= deadline => {
                self.visible = false;
                self.deadline_ns = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SplashController {
    fn default() -> Self {
        Self::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let splash = SplashController::hidden();

        assert!(!splash.is_visible());
        assert_eq!(splash.deadline_ns(), None);
    }

    #[test]
    fn test_show_sets_deadline() {
        let mut splash = SplashController::hidden();

        splash.show(1_000, 2_000_000_000);

        assert!(splash.is_visible());
        assert_eq!(splash.deadline_ns(), Some(2_000_001_000));
    }

    #[test]
    fn test_tick_before_deadline_keeps_splash() {
        let mut splash = SplashController::hidden();
        splash.show(0, 2_000);

        assert!(!splash.tick(1_999));
        assert!(splash.is_visible());
    }

    #[test]
    fn test_tick_at_deadline_hides() {
        let mut splash = SplashController::hidden();
        splash.show(0, 2_000);

        assert!(splash.tick(2_000));
        assert!(!splash.is_visible());
        assert_eq!(splash.deadline_ns(), None);
    }

    #[test]
    fn test_tick_reports_transition_once() {
        let mut splash = SplashController::hidden();
        splash.show(0, 2_000);

        assert!(splash.tick(5_000));
        assert!(!splash.tick(6_000));
    }

    #[test]
    fn test_dismiss_hides_early() {
        let mut splash = SplashController::hidden();
        splash.show(0, 2_000);

        splash.dismiss();

        assert!(!splash.is_visible());
        assert!(!splash.tick(2_000));
    }

    #[test]
    fn test_tick_when_never_shown() {
        let mut splash = SplashController::hidden();
        assert!(!splash.tick(1_000_000));
    }
}
