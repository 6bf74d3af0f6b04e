//! Evaluator configuration
//!
//! The default configuration reproduces the reference program exactly:
//! naive double recursion, `n <= 1` returns `n` (negative indices included),
//! and silent two's-complement wraparound on overflow.
//!
//! Every field can be set from TOML:
//!
//! ```toml
//! strategy = "iterative"
//! negative = "reject"
//! overflow = "checked"
//! ```

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How terms are computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Double recursion with no caching. Exponential time.
    #[default]
    Naive,
    /// Loop carrying the last two terms. Linear time, constant space.
    Iterative,
}

/// What to do with an index below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePolicy {
    /// Apply the `n <= 1` base case literally, so `F(-5) = -5`
    #[default]
    Passthrough,
    /// Fail with `EvalError::NegativeIndex`
    Reject,
}

/// What to do when a term exceeds `i64::MAX`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Wrap around silently
    #[default]
    Wrapping,
    /// Fail with `EvalError::Overflow`
    Checked,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Naive => write!(f, "naive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Strategy::Naive),
            "iterative" => Ok(Strategy::Iterative),
            other => Err(format!(
                "Unknown strategy '{}' (expected 'naive' or 'iterative')",
                other
            )),
        }
    }
}

/// Configuration for an [`Evaluator`](crate::Evaluator)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorConfig {
    pub strategy: Strategy,
    pub negative: NegativePolicy,
    pub overflow: OverflowPolicy,
}

impl EvaluatorConfig {
    /// Create the reference configuration
    pub fn new() -> Self {
        EvaluatorConfig::default()
    }

    /// Parse configuration from a TOML string
    ///
    /// Missing fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Set the strategy (builder pattern)
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the negative index policy
    pub fn with_negative_policy(mut self, negative: NegativePolicy) -> Self {
        self.negative = negative;
        self
    }

    /// Set the overflow policy
    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_behavior() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.strategy, Strategy::Naive);
        assert_eq!(config.negative, NegativePolicy::Passthrough);
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = EvaluatorConfig::from_toml("").unwrap();
        assert_eq!(config, EvaluatorConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = EvaluatorConfig::from_toml(
            r#"
strategy = "iterative"
negative = "reject"
overflow = "checked"
"#,
        )
        .unwrap();
        assert_eq!(config.strategy, Strategy::Iterative);
        assert_eq!(config.negative, NegativePolicy::Reject);
        assert_eq!(config.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = EvaluatorConfig::from_toml(r#"overflow = "checked""#).unwrap();
        assert_eq!(config.strategy, Strategy::Naive);
        assert_eq!(config.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn test_unknown_strategy_is_error() {
        let err = EvaluatorConfig::from_toml(r#"strategy = "memoized""#).unwrap_err();
        assert!(err.starts_with("Failed to parse config:"), "got: {}", err);
    }

    #[test]
    fn test_unknown_field_is_error() {
        assert!(EvaluatorConfig::from_toml("cache = true").is_err());
    }

    #[test]
    fn test_builder() {
        let config = EvaluatorConfig::new()
            .with_strategy(Strategy::Iterative)
            .with_negative_policy(NegativePolicy::Reject)
            .with_overflow_policy(OverflowPolicy::Checked);
        assert_eq!(config.strategy, Strategy::Iterative);
        assert_eq!(config.negative, NegativePolicy::Reject);
        assert_eq!(config.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("naive".parse::<Strategy>(), Ok(Strategy::Naive));
        assert_eq!("iterative".parse::<Strategy>(), Ok(Strategy::Iterative));
        assert!("fast".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Iterative.to_string(), "iterative");
    }
}
