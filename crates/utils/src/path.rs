use std::path::PathBuf;

const APP_NAME: &str = "swish";

/// Where the all-time statistics record lives unless configured otherwise:
/// `<config dir>/swish.cfg`.
#[must_use]
pub fn default_state_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(format!("{APP_NAME}.cfg")))
}

/// `<config dir>/swish/config.toml`
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

#[must_use]
pub fn default_user_cache() -> Option<PathBuf> {
    dirs::cache_dir()
}
