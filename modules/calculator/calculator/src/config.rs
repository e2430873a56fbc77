//! Configuration for the Calculator module.

use serde::Deserialize;

/// How `add`, `subtract` and `multiply` behave when the exact result does not fit in `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's-complement wrapping. The integer operations never fail.
    #[default]
    Wrapping,
    /// Overflow is reported as an error.
    Checked,
}

/// Configuration for the Calculator module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Integer overflow behavior.
    /// Default: `wrapping`
    pub overflow: OverflowPolicy,
}

impl CalculatorConfig {
    /// Returns a config using the given overflow policy.
    #[must_use]
    pub const fn with_overflow(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CalculatorConfig::default();
        assert_eq!(cfg.overflow, OverflowPolicy::Wrapping);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let cfg: CalculatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.overflow, OverflowPolicy::Wrapping);
    }

    #[test]
    fn test_deserialize_checked() {
        let cfg: CalculatorConfig = serde_json::from_str(r#"{"overflow": "checked"}"#).unwrap();
        assert_eq!(cfg.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<CalculatorConfig>(r#"{"precision": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = serde_json::from_str::<CalculatorConfig>(r#"{"overflow": "saturating"}"#);
        assert!(result.is_err());
    }
}
