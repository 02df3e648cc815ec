use common::config::Validate;
use common::defaults::HIGH_SCORE_FILE_NAME;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HighScoreConfig {
    pub location: String,
}

impl Validate for HighScoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("high score location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for HighScoreConfig {
    fn default() -> Self {
        Self {
            location: HIGH_SCORE_FILE_NAME.to_string(),
        }
    }
}
