use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub obstacle_count: usize,
    pub placement_attempts: usize,
}

impl GameConfig {
    pub fn to_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            obstacle_count: self.obstacle_count,
            placement_attempts: self.placement_attempts,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = SnakeSessionSettings::default();
        Self {
            obstacle_count: settings.obstacle_count,
            placement_attempts: settings.placement_attempts,
        }
    }
}
