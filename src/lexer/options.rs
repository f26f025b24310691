use serde::{Deserialize, Serialize};

/// How digits at the start of a run become number tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericMode {
    /// One digit per number token: `42` scans as `4` then `2`
    #[default]
    Legacy,
    /// The whole leading digit run, with an optional `.digits` fraction
    Extended,
}

/// Scanner options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Numeric literal handling (default: Legacy)
    #[serde(default)]
    pub numeric_mode: NumericMode,
}

impl ScanOptions {
    /// Returns options with the given numeric mode
    pub fn with_numeric_mode(mut self, mode: NumericMode) -> Self {
        self.numeric_mode = mode;
        self
    }
}
