pub mod loader;

use serde::{Deserialize, Serialize};

/// Signatures of the spaced-out garbage that marks where corruption begins.
pub const DEFAULT_MARKERS: [&str; 2] = ["/ *   - - -   U n i q u e", ". b t n -"];

pub const DEFAULT_RANGE_START: usize = 7120;
pub const DEFAULT_RANGE_END: usize = 7154;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigData {
    pub truncate: TruncateConfig,
    pub remove_range: RangeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TruncateConfig {
    pub markers: Vec<String>,
    /// Written between the retained prefix and the replacement block
    pub separator: String,
}

/// Zero-based, `start` inclusive, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    pub start: usize,
    pub end: usize,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            separator: "\n".to_string(),
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_RANGE_START,
            end: DEFAULT_RANGE_END,
        }
    }
}
