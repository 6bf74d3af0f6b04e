//! Run configuration loaded from a TOML file
//!
//! Same keys as [`EvaluatorConfig`] plus the index to evaluate:
//!
//! ```toml
//! index = 30
//! strategy = "iterative"
//! negative = "reject"
//! overflow = "checked"
//! ```

use fibcore::{EvaluatorConfig, NegativePolicy, OverflowPolicy, Strategy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Index to evaluate when none is given on the command line
    pub index: Option<i64>,
    pub strategy: Strategy,
    pub negative: NegativePolicy,
    pub overflow: OverflowPolicy,
}

impl RunConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading config {}: {}", path.display(), e))?;
        Self::from_toml(&content)
    }

    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig::new()
            .with_strategy(self.strategy)
            .with_negative_policy(self.negative)
            .with_overflow_policy(self.overflow)
    }
}
