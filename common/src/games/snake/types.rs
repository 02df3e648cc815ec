use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max {
            0
        } else {
            value + 1
        }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 {
            max - 1
        } else {
            value - 1
        }
    }

    /// Neighbouring cell in `direction` on a torus.
    pub fn advance(&self, from: Point, direction: Direction) -> Point {
        match direction {
            Direction::Up => Point::new(from.x, Self::wrapping_dec(from.y, self.height)),
            Direction::Down => Point::new(from.x, Self::wrapping_inc(from.y, self.height)),
            Direction::Left => Point::new(Self::wrapping_dec(from.x, self.width), from.y),
            Direction::Right => Point::new(Self::wrapping_inc(from.x, self.width), from.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    SelfBody,
    Obstacle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Grew,
    Collided(CollisionKind),
    /// Food was reached but the body has no room left to grow.
    CapacityReached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Collision(CollisionKind),
    PlacementExhausted,
    CapacityReached,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Collision(CollisionKind::SelfBody) => write!(f, "snake bit itself"),
            GameOverReason::Collision(CollisionKind::Obstacle) => write!(f, "snake hit an obstacle"),
            GameOverReason::PlacementExhausted => write!(f, "no free cell left for food"),
            GameOverReason::CapacityReached => write!(f, "snake reached its maximum length"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    Exhausted,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Exhausted => write!(f, "no empty cell available"),
        }
    }
}

impl std::error::Error for PlacementError {}
