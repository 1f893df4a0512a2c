//! Composer configuration

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Default empty-state text for listings without resolvable products
pub const DEFAULT_EMPTY_STATE_MESSAGE: &str = "No products linked to this selection";

fn default_max_sections() -> usize {
    50
}

fn default_empty_state_message() -> String {
    DEFAULT_EMPTY_STATE_MESSAGE.to_string()
}

fn default_true() -> bool {
    true
}

/// Composer settings; every field falls back to its default when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerConfig {
    /// Upper bound on sections in one layout
    #[serde(default = "default_max_sections")]
    pub max_sections: usize,

    /// Text rendered when a listing resolves to nothing
    #[serde(default = "default_empty_state_message")]
    pub empty_state_message: String,

    /// Run required-field validation on draft saves too (publish always validates)
    #[serde(default = "default_true")]
    pub validate_drafts: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_sections: default_max_sections(),
            empty_state_message: default_empty_state_message(),
            validate_drafts: true,
        }
    }
}

impl ComposerConfig {
    /// Parse configuration from JSON
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_sections == 0 {
            return Err(CoreError::ConfigError(
                "maxSections must be at least 1".to_string(),
            ));
        }
        if self.empty_state_message.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "emptyStateMessage cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
