use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{
    ConfigManager, DisplayConfig, FileContentProvider, GameConfig, HighScoreConfig,
    YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Manager for `path`, or for the config file next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub high_score: HighScoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.high_score.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
