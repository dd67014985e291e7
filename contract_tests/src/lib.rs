//! # Shell Contract Tests
//!
//! This crate provides "golden" tests for the contracts the shell shares
//! with the platform and with page script, to ensure they don't drift
//! accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Shared names and codes are written as code
//! - **Testability first**: Contract tests fail when an interface changes
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each contract area has a module with tests that verify:
//! - Bridge namespace, operation names, and the back probe script
//! - Surface settings defaults and mixed-content platform codes
//! - Config format version and on-disk field names
//! - Platform key codes and back-key consumption

pub mod bridge;
pub mod config;
pub mod input;
pub mod surface;

/// Common test helpers for contract validation
pub mod test_helpers {
    /// Verifies a string the platform or page script depends on
    pub fn verify_stable_str(what: &str, actual: &str, expected: &str) {
        assert_eq!(
            actual, expected,
            "{} changed: expected '{}', got '{}'",
            what, expected, actual
        );
    }

    /// Verifies a numeric code shared with the platform
    pub fn verify_stable_code(what: &str, actual: u32, expected: u32) {
        assert_eq!(
            actual, expected,
            "{} changed: expected {}, got {}",
            what, expected, actual
        );
    }
}
