//! Surface settings contract tests
//!
//! These tests define the stable startup configuration of the rendering
//! surface and the platform codes behind the mixed-content policy.

// ===== Mixed-Content Platform Codes =====
const CODE_ALWAYS_ALLOW: u32 = 0;
const CODE_NEVER_ALLOW: u32 = 1;
const CODE_COMPATIBILITY: u32 = 2;

// ===== On-Disk Field Names =====
const SETTINGS_FIELDS: [&str; 6] = [
    "local_storage",
    "script_execution",
    "local_file_access",
    "local_content_access",
    "auto_load_images",
    "mixed_content",
];

// ===== Contract Tests =====
