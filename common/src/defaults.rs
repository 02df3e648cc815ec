use std::time::Duration;

use crate::games::snake::{Direction, Point};

pub const FIELD_WIDTH: usize = 20;
pub const FIELD_HEIGHT: usize = 20;

pub const SNAKE_CAPACITY: usize = 100;
pub const INITIAL_SNAKE: [Point; 3] = [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

pub const FOOD_SCORE: u32 = 10;

pub const DEFAULT_OBSTACLE_COUNT: usize = 5;
pub const MAX_OBSTACLE_COUNT: usize = 10;
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Ticks needed to complete one step of the snake.
pub const ANIMATION_STEPS: u32 = 5;
pub const TICK_INTERVAL: Duration = Duration::from_millis(100 / ANIMATION_STEPS as u64);

pub const HIGH_SCORE_FILE_NAME: &str = "highscore.txt";
