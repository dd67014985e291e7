//! Config format contract tests
//!
//! These tests define the stable on-disk configuration format: the
//! format version and the field names a deployed config file carries.

// ===== Format Version =====
const CONFIG_FORMAT_VERSION: u32 = 1;

// ===== On-Disk Field Names =====
const TOP_LEVEL_FIELDS: [&str; 5] = ["app", "server", "surface", "splash", "push"];
const SPLASH_FIELDS: [&str; 4] = [
    "duration_ms",
    "background_color",
    "show_spinner",
    "fullscreen",
];

// ===== Contract Tests =====
