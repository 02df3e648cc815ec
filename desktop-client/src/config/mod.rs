mod display_config;
mod game_config;
mod high_score_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentProvider, YamlConfigSerializer};

pub use display_config::DisplayConfig;
pub use game_config::GameConfig;
pub use high_score_config::HighScoreConfig;
pub use main_config::{default_config_path, get_config_manager, Config};
