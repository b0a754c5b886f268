//! Passcode machine configuration.

use crate::builder::BuildError;
use crate::core::{MAX_PASSCODE_LENGTH, PASSCODE_LENGTH};
use serde::{Deserialize, Serialize};

/// Settings for a passcode machine.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Example
///
/// ```rust
/// use passcode::config::PasscodeConfig;
///
/// let config = PasscodeConfig::from_json(r#"{ "length": 4 }"#).unwrap();
/// assert_eq!(config.length, 4);
///
/// let defaults = PasscodeConfig::from_json("{}").unwrap();
/// assert_eq!(defaults.length, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasscodeConfig {
    /// Digits in a complete passcode
    pub length: usize,
}

impl Default for PasscodeConfig {
    fn default() -> Self {
        Self {
            length: PASSCODE_LENGTH,
        }
    }
}

impl PasscodeConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the length is within `1..=MAX_PASSCODE_LENGTH`.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !(1..=MAX_PASSCODE_LENGTH).contains(&self.length) {
            return Err(BuildError::InvalidLength(self.length));
        }
        Ok(())
    }
}
