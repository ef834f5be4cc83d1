//! Client-wide settings.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Largest accepted `max_retries`.
pub const MAX_RETRIES: u32 = 10;

/// Settings shared by every profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// The profile used when none is named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// REST API version, `2` or `3`.
    pub api_version: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries for GET requests on 429, 5xx and network errors. Zero
    /// disables retrying.
    pub max_retries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_profile: None,
            api_version: "3".to_string(),
            timeout_secs: 30,
            max_retries: 0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.api_version.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_version cannot be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ConfigError::ValidationError(format!(
                "max_retries must be at most {}, got {}",
                MAX_RETRIES, self.max_retries
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_version, "3");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.max_retries, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let settings: Settings = toml::from_str("max_retries = 3").unwrap();
        assert_eq!(settings.max_retries, 3);
        assert_eq!(settings.api_version, "3");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let settings = Settings {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_max_retries_bounded() {
        let at_limit = Settings {
            max_retries: MAX_RETRIES,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let settings: Settings = toml::from_str("max_retries = 4294967295").unwrap();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("max_retries must be at most 10"));
    }

    #[test]
    fn test_empty_version_rejected() {
        let settings = Settings {
            api_version: String::new(),
            ..Default::default()
        };
        assert!(settings
            .validate()
            .unwrap_err()
            .to_string()
            .contains("api_version"));
    }
}
