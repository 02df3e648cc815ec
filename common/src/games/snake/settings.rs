use crate::defaults::{DEFAULT_OBSTACLE_COUNT, DEFAULT_PLACEMENT_ATTEMPTS, MAX_OBSTACLE_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub obstacle_count: usize,
    pub placement_attempts: usize,
}

impl SnakeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.obstacle_count > MAX_OBSTACLE_COUNT {
            return Err(format!(
                "Obstacle count must be at most {}, got {}",
                MAX_OBSTACLE_COUNT, self.obstacle_count
            ));
        }
        if self.placement_attempts == 0 || self.placement_attempts > 100_000 {
            return Err(format!(
                "Placement attempts must be between 1 and 100000, got {}",
                self.placement_attempts
            ));
        }
        Ok(())
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_too_many_obstacles_rejected() {
        let settings = SnakeSessionSettings {
            obstacle_count: MAX_OBSTACLE_COUNT + 1,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let settings = SnakeSessionSettings {
            placement_attempts: 0,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
