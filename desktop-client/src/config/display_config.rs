use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplayConfig {
    /// Side of one grid cell in points.
    pub cell_size: f32,
    pub show_grid: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(10.0..=60.0).contains(&self.cell_size) {
            return Err(format!(
                "Cell size must be between 10 and 60, got {}",
                self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            show_grid: true,
        }
    }
}
