//! Platform key contract tests
//!
//! These tests define the stable key-code mapping shared with the host
//! platform and the back-key consumption behavior the platform's default
//! handling relies on.

use input_types::KeyCode;

// ===== Platform Key Codes =====
const PLATFORM_CODE_TABLE: [(u16, KeyCode); 7] = [
    (3, KeyCode::Home),
    (4, KeyCode::Back),
    (24, KeyCode::VolumeUp),
    (25, KeyCode::VolumeDown),
    (26, KeyCode::Power),
    (82, KeyCode::Menu),
    (187, KeyCode::AppSwitch),
];

// ===== Contract Tests =====
