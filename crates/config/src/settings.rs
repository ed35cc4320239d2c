use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swish_models::Category;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Location of the all-time statistics record.
    #[serde(default = "default_state_file", skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
    #[serde(default)]
    pub targets: Targets,
}

/// Directory whose contents each category removes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Targets {
    #[serde(default = "default_user_cache", skip_serializing_if = "Option::is_none")]
    pub user_cache: Option<PathBuf>,
    #[serde(default = "default_system_cache")]
    pub system_cache: PathBuf,
    #[serde(default = "default_system_logs")]
    pub system_logs: PathBuf,
    #[serde(default = "default_short_term_temp")]
    pub short_term_temp: PathBuf,
    #[serde(default = "default_long_term_temp")]
    pub long_term_temp: PathBuf,
}

// Default value functions for serde
fn default_state_file() -> Option<PathBuf> {
    swish_utils::default_state_file()
}
fn default_user_cache() -> Option<PathBuf> {
    swish_utils::default_user_cache()
}
fn default_system_cache() -> PathBuf {
    PathBuf::from("/var/cache")
}
fn default_system_logs() -> PathBuf {
    PathBuf::from("/var/log")
}
fn default_short_term_temp() -> PathBuf {
    PathBuf::from("/tmp")
}
fn default_long_term_temp() -> PathBuf {
    PathBuf::from("/var/tmp")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            targets: Targets::default(),
        }
    }
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            user_cache: default_user_cache(),
            system_cache: default_system_cache(),
            system_logs: default_system_logs(),
            short_term_temp: default_short_term_temp(),
            long_term_temp: default_long_term_temp(),
        }
    }
}

impl Targets {
    /// Root directory for `category`, or `None` when it could not be
    /// determined on this system.
    #[must_use]
    pub fn path_for(&self, category: Category) -> Option<&Path> {
        match category {
            Category::UserCache => self.user_cache.as_deref(),
            Category::SystemCache => Some(&self.system_cache),
            Category::SystemLog => Some(&self.system_logs),
            Category::ShortTermTemp => Some(&self.short_term_temp),
            Category::LongTermTemp => Some(&self.long_term_temp),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `path`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly given file does not exist or cannot be read
    /// - The file is not valid TOML for [`Settings`]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = path.map(Path::to_path_buf).or_else(swish_utils::default_config_file) else {
            debug!("No config directory available, using default settings");
            return Ok(Self::default());
        };

        if path.is_none() && !config_path.exists() {
            debug!("No settings file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let settings = Self::from_file(&config_path)?;
        info!("Settings loaded from {:?}", config_path);
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read settings file {}", path.display()))?;
        toml::from_str(&content).wrap_err_with(|| format!("Invalid settings file {}", path.display()))
    }

    /// Persisted-state location after applying a command-line override.
    ///
    /// # Errors
    ///
    /// Returns an error when neither an override nor a configured location
    /// is available.
    pub fn state_file(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.state_file.clone())
            .ok_or_else(|| eyre!("Could not determine where to store statistics"))
    }
}
