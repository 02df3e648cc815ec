mod occupancy;
mod placement;
mod session;
mod settings;
mod snake;
mod types;

pub use occupancy::OccupancyGrid;
pub use placement::find_empty_cell;
pub use session::{GameSession, SessionSnapshot, TickResult};
pub use settings::SnakeSessionSettings;
pub use snake::{Snake, SnakeState};
pub use types::{
    CollisionKind, Direction, FieldSize, GameOverReason, MoveOutcome, PlacementError, Point,
    RunState,
};
