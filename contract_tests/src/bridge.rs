//! Script bridge contract tests
//!
//! These tests define the stable contract between the shell and page
//! script. Deployed pages call these names; none of them may change
//! without breaking every page already in the field.

// ===== Bridge Surface =====
const BRIDGE_NAMESPACE: &str = "Android";
const OP_EXIT_APP: &str = "exitApp";
const OP_GO_BACK: &str = "goBack";

// ===== Page-Side Names =====
const BACK_HANDLER_GLOBAL: &str = "handleAndroidBackButton";
const BACK_PROBE: &str = "if (window.handleAndroidBackButton) { window.handleAndroidBackButton(); } else { window.history.back(); }";

// ===== Contract Tests =====
