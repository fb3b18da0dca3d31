//! Sandbox policy for the preview rendering context
//!
//! The preview document runs inside an iframe-style sandbox that permits
//! script execution and form submission but denies top-level navigation
//! escape. Same-origin access may be granted for iframe-internal
//! scripting needs, never for communicating secrets.

use serde::{Deserialize, Serialize};

/// Capabilities granted to the sandboxed preview context
///
/// There is intentionally no field for top-level navigation: the sandbox
/// never grants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxPolicy {
    pub allow_scripts: bool,
    pub allow_same_origin: bool,
    pub allow_modals: bool,
    pub allow_forms: bool,
    pub allow_popups: bool,
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self {
            allow_scripts: true,
            allow_same_origin: true,
            allow_modals: true,
            allow_forms: true,
            allow_popups: true,
        }
    }
}

impl SandboxPolicy {
    /// A fully locked-down sandbox (no capabilities at all)
    pub fn locked_down() -> Self {
        Self {
            allow_scripts: false,
            allow_same_origin: false,
            allow_modals: false,
            allow_forms: false,
            allow_popups: false,
        }
    }

    /// Value for the iframe `sandbox` attribute
    pub fn attribute_value(&self) -> String {
        let mut tokens = Vec::new();
        if self.allow_scripts {
            tokens.push("allow-scripts");
        }
        if self.allow_same_origin {
            tokens.push("allow-same-origin");
        }
        if self.allow_modals {
            tokens.push("allow-modals");
        }
        if self.allow_forms {
            tokens.push("allow-forms");
        }
        if self.allow_popups {
            tokens.push("allow-popups");
        }
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_attribute() {
        let attr = SandboxPolicy::default().attribute_value();
        assert_eq!(
            attr,
            "allow-scripts allow-same-origin allow-modals allow-forms allow-popups"
        );
    }

    #[test]
    fn test_no_policy_ever_grants_top_navigation() {
        let attr = SandboxPolicy::default().attribute_value();
        assert!(!attr.contains("allow-top-navigation"));
    }

    #[test]
    fn test_locked_down_is_empty() {
        assert_eq!(SandboxPolicy::locked_down().attribute_value(), "");
    }
}
