//! # Script Bridge
//!
//! This crate implements the web-to-native capability surface: the small
//! set of native operations page script may invoke, and the probe the
//! native side evaluates in the page.
//!
//! ## Philosophy
//!
//! Unlike host-object scanning (where every public method of a native
//! object leaks into script), the bridge is an explicit registration
//! table:
//! - Operations are registered by name, one closure each
//! - The installed surface is enumerable — what you registered is all
//!   there is
//! - Handlers decide, the shell acts: a handler returns a directive, it
//!   never mutates the shell directly
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A general RPC layer (no arguments, no return values to script)
//! - A script engine (evaluation happens in the surface)

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The global name the native bridge is installed under
pub const BRIDGE_NAMESPACE: &str = "Android";

/// Operation name: finish the host shell unconditionally
pub const OP_EXIT_APP: &str = "exitApp";

/// Operation name: step surface history back, or finish when exhausted
pub const OP_GO_BACK: &str = "goBack";

/// The page global the back-button probe looks for
pub const BACK_HANDLER_GLOBAL: &str = "handleAndroidBackButton";

/// Returns the expression evaluated in the page on hardware back
///
/// If the page registered [`BACK_HANDLER_GLOBAL`], that handler runs;
/// otherwise the page's own history is stepped back. The fallback branch
/// is unconditional: at the top of page history it is a no-op, not a
/// shell exit.
pub fn back_probe() -> String {
    format!(
        "if (window.{g}) {{ window.{g}(); }} else {{ window.history.back(); }}",
        g = BACK_HANDLER_GLOBAL
    )
}

/// Errors that can occur registering or invoking bridge operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// No operation registered under this name
    #[error("Unknown bridge operation: {0}")]
    UnknownOperation(String),

    /// An operation is already registered under this name
    #[error("Bridge operation already registered: {0}")]
    DuplicateOperation(String),

    /// Operation names must be non-empty
    #[error("Bridge operation name is empty")]
    EmptyOperationName,
}

/// Context handed to an operation handler at invocation time
///
/// Carries the host facts a handler may branch on. Handlers receive
/// facts and return directives; they hold no shell references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpContext {
    /// Whether the surface has backward history right now
    pub can_go_back: bool,
}

impl OpContext {
    /// Creates an operation context
    pub fn new(can_go_back: bool) -> Self {
        Self { can_go_back }
    }
}

/// What the shell should do after a bridge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostDirective {
    /// Nothing to do
    None,
    /// Step the surface back one history entry
    NavigateBack,
    /// Finish the host shell
    Finish,
}

impl fmt::Display for HostDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::NavigateBack => write!(f, "navigate-back"),
            Self::Finish => write!(f, "finish"),
        }
    }
}

/// Operation handler function signature
pub type OpHandler = Box<dyn Fn(&OpContext) -> HostDirective + Send + Sync>;

/// Registered operation with its handler
struct RegisteredOp {
    name: String,
    handler: OpHandler,
}

/// The web-to-native registration table
///
/// Maps operation names to native handlers under a single namespace.
/// Invocation order is irrelevant; registration order is preserved for
/// enumeration.
pub struct ScriptBridge {
    namespace: String,
    operations: Vec<RegisteredOp>,
}

impl ScriptBridge {
    /// Creates an empty bridge under the given namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            operations: Vec::new(),
        }
    }

    /// Returns the namespace the bridge installs under
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registers an operation handler
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: OpHandler,
    ) -> Result<(), BridgeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BridgeError::EmptyOperationName);
        }
        if self.operations.iter().any(|op| op.name == name) {
            return Err(BridgeError::DuplicateOperation(name));
        }
        self.operations.push(RegisteredOp { name, handler });
        Ok(())
    }

    /// Invokes an operation by name
    pub fn invoke(&self, name: &str, context: &OpContext) -> Result<HostDirective, BridgeError> {
        match self.operations.iter().find(|op| op.name == name) {
            Some(op) => Ok((op.handler)(context)),
            None => Err(BridgeError::UnknownOperation(name.to_string())),
        }
    }

    /// Returns true if an operation is registered under this name
    pub fn contains(&self, name: &str) -> bool {
        self.operations.iter().any(|op| op.name == name)
    }

    /// Returns the registered operation names, in registration order
    pub fn operation_names(&self) -> Vec<String> {
        self.operations.iter().map(|op| op.name.clone()).collect()
    }
}

/// Builds the standard host bridge
///
/// Namespace [`BRIDGE_NAMESPACE`] with exactly two operations:
///
/// | Operation | Directive |
/// |---|---|
/// | `exitApp` | `Finish`, always |
/// | `goBack` | `NavigateBack` when the surface has backward history, else `Finish` |
///
/// Neither operation can fail.
pub fn standard_bridge() -> ScriptBridge {
    let mut bridge = ScriptBridge::new(BRIDGE_NAMESPACE);
    bridge
        .register(OP_EXIT_APP, Box::new(|_| HostDirective::Finish))
        .expect("exitApp registers on an empty bridge");
    bridge
        .register(
            OP_GO_BACK,
            Box::new(|context| {
                if context.can_go_back {
                    HostDirective::NavigateBack
                } else {
                    HostDirective::Finish
                }
            }),
        )
        .expect("goBack registers once");
    bridge
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_invoke() {
        let mut bridge = ScriptBridge::new("Test");
        bridge
            .register("noop", Box::new(|_| HostDirective::None))
            .unwrap();

        let directive = bridge.invoke("noop", &OpContext::new(false)).unwrap();
        assert_eq!(directive, HostDirective::None);
    }

    #[test]
    fn test_invoke_unknown_operation() {
        let bridge = ScriptBridge::new("Test");
        let result = bridge.invoke("missing", &OpContext::new(false));

        assert_eq!(
            result,
            Err(BridgeError::UnknownOperation("missing".to_string()))
        );
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut bridge = ScriptBridge::new("Test");
        bridge
            .register("op", Box::new(|_| HostDirective::None))
            .unwrap();

        let result = bridge.register("op", Box::new(|_| HostDirective::Finish));
        assert_eq!(result, Err(BridgeError::DuplicateOperation("op".to_string())));
    }

    #[test]
    fn test_register_empty_name_rejected() {
        let mut bridge = ScriptBridge::new("Test");
        let result = bridge.register("", Box::new(|_| HostDirective::None));

        assert_eq!(result, Err(BridgeError::EmptyOperationName));
    }

    #[test]
    fn test_operation_names_in_registration_order() {
        let bridge = standard_bridge();
        assert_eq!(bridge.operation_names(), vec!["exitApp", "goBack"]);
    }

    #[test]
    fn test_standard_bridge_namespace() {
        let bridge = standard_bridge();
        assert_eq!(bridge.namespace(), "Android");
        assert!(bridge.contains(OP_EXIT_APP));
        assert!(bridge.contains(OP_GO_BACK));
    }

    #[test]
    fn test_exit_app_always_finishes() {
        let bridge = standard_bridge();

        let with_history = bridge.invoke(OP_EXIT_APP, &OpContext::new(true)).unwrap();
        let without_history = bridge.invoke(OP_EXIT_APP, &OpContext::new(false)).unwrap();

        assert_eq!(with_history, HostDirective::Finish);
        assert_eq!(without_history, HostDirective::Finish);
    }

    #[test]
    fn test_go_back_with_history_navigates() {
        let bridge = standard_bridge();
        let directive = bridge.invoke(OP_GO_BACK, &OpContext::new(true)).unwrap();

        assert_eq!(directive, HostDirective::NavigateBack);
    }

    #[test]
    fn test_go_back_without_history_finishes() {
        let bridge = standard_bridge();
        let directive = bridge.invoke(OP_GO_BACK, &OpContext::new(false)).unwrap();

        assert_eq!(directive, HostDirective::Finish);
    }

    #[test]
    fn test_back_probe_expression() {
        assert_eq!(
            back_probe(),
            "if (window.handleAndroidBackButton) { window.handleAndroidBackButton(); } \
             else { window.history.back(); }"
        );
    }

    #[test]
    fn test_back_probe_prefers_handler() {
        // Handler branch comes first: a page that registered the global
        // must win over history fallback.
        let probe = back_probe();
        let handler_pos = probe.find("handleAndroidBackButton()").unwrap();
        let fallback_pos = probe.find("history.back()").unwrap();

        assert!(handler_pos < fallback_pos);
    }
}
