use std::path::PathBuf;

pub use drinkpass_config::{Config, ConfigError, ConfigManager, CruiseDefaults, Theme};

/// Config manager rooted at `$DRINKPASS_HOME` or `~/.drinkpass`.
pub fn default_manager() -> Result<ConfigManager, ConfigError> {
    ConfigManager::from_env()
}

pub fn manager_with_base(base: PathBuf) -> Result<ConfigManager, ConfigError> {
    ConfigManager::with_base_dir(base)
}
