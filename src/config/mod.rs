//! Configuration for the `jira-sdk` binary and for applications that want
//! connection profiles on disk.
//!
//! The file lives at `<config dir>/jira-sdk/config.toml`; `JIRA_SDK_CONFIG`
//! points somewhere else. API tokens never go in the file, see
//! [`crate::api::auth`].

mod profile;
mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use profile::Profile;
pub use settings::{Settings, MAX_RETRIES};

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV_VAR: &str = "JIRA_SDK_CONFIG";

const APP_DIR: &str = "jira-sdk";
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("could not create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    #[error("could not read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("could not write configuration file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("invalid configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("could not serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("{0}")]
    ValidationError(String),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// The whole configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Config {
    /// The config file path, honouring `JIRA_SDK_CONFIG`.
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default path. A missing file gives the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;

        debug!(path = %path.display(), profiles = config.profiles.len(), "Loaded config");
        Ok(config)
    }

    /// Validate and write to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteError)?;

        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Every profile must be valid and uniquely named, and the default
    /// profile, when set, must exist.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;

        let mut seen = std::collections::HashSet::new();
        for profile in &self.profiles {
            profile.validate()?;
            if !seen.insert(profile.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
        }

        if let Some(default) = &self.settings.default_profile {
            if !seen.contains(default.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "default profile '{}' does not exist",
                    default
                )));
            }
        }

        Ok(())
    }

    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))
    }

    /// The named profile, or the default one, or the only one.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<&Profile> {
        if let Some(name) = name.or(self.settings.default_profile.as_deref()) {
            return self.profile(name);
        }
        match self.profiles.as_slice() {
            [only] => Ok(only),
            [] => Err(ConfigError::ValidationError(
                "no profiles configured".to_string(),
            )),
            _ => Err(ConfigError::ValidationError(
                "several profiles configured and no default set".to_string(),
            )),
        }
    }

    /// Add a profile, making it the default when it is the first.
    pub fn add_profile(&mut self, profile: Profile) -> Result<()> {
        profile.validate()?;
        if self.profiles.iter().any(|p| p.name == profile.name) {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}' already exists",
                profile.name
            )));
        }
        if self.profiles.is_empty() {
            self.settings.default_profile = Some(profile.name.clone());
        }
        self.profiles.push(profile);
        Ok(())
    }

    /// Remove a profile, clearing the default if it pointed there.
    pub fn remove_profile(&mut self, name: &str) -> Result<Profile> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if self.settings.default_profile.as_deref() == Some(name) {
            self.settings.default_profile = None;
        }
        Ok(self.profiles.remove(index))
    }
}
