pub const EVENT_LOG_SIZE: usize = 8;
pub const WINDOW_TITLE: &str = "Snake Game";
