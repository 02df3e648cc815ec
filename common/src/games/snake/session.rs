use crate::defaults::{
    ANIMATION_STEPS, FIELD_HEIGHT, FIELD_WIDTH, FOOD_SCORE, INITIAL_DIRECTION, INITIAL_SNAKE,
    SNAKE_CAPACITY,
};
use crate::games::SessionRng;
use crate::high_score::HighScoreStore;
use crate::{log, warn};
use super::occupancy::OccupancyGrid;
use super::placement::find_empty_cell;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{
    Direction, FieldSize, GameOverReason, MoveOutcome, PlacementError, Point, RunState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Paused or over; nothing changed.
    Idle,
    /// Animation advanced without moving the snake.
    Advanced,
    /// The snake moved or grew.
    Stepped(MoveOutcome),
    GameOver(GameOverReason),
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub field_size: FieldSize,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub obstacles: Vec<Point>,
    pub score: u32,
    pub high_score: u32,
    pub run_state: RunState,
    pub game_over_reason: Option<GameOverReason>,
    pub heading: Direction,
    pub animation_progress: f32,
}

/// Owns all mutable game state. The tick driver and the input handlers are the
/// only callers that change it.
pub struct GameSession {
    field_size: FieldSize,
    settings: SnakeSessionSettings,
    snake_capacity: usize,
    snake: Snake,
    food: Option<Point>,
    obstacles: Vec<Point>,
    grid: OccupancyGrid,
    score: u32,
    high_score: u32,
    run_state: RunState,
    game_over_reason: Option<GameOverReason>,
    progress: u32,
    rng: SessionRng,
    store: Box<dyn HighScoreStore>,
}

impl GameSession {
    pub fn new(
        settings: SnakeSessionSettings,
        rng: SessionRng,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let field_size = FieldSize {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        };
        Self::with_layout(field_size, SNAKE_CAPACITY, settings, rng, store)
    }

    /// The initial snake must fit inside `field_size` and `snake_capacity`.
    fn with_layout(
        field_size: FieldSize,
        snake_capacity: usize,
        settings: SnakeSessionSettings,
        rng: SessionRng,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let mut session = Self {
            field_size,
            settings,
            snake_capacity,
            snake: Snake::new(&INITIAL_SNAKE, INITIAL_DIRECTION, snake_capacity),
            food: None,
            obstacles: Vec::with_capacity(settings.obstacle_count),
            grid: OccupancyGrid::new(field_size),
            score: 0,
            high_score: 0,
            run_state: RunState::Running,
            game_over_reason: None,
            progress: 0,
            rng,
            store,
        };
        session.reset();
        session
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(&INITIAL_SNAKE, INITIAL_DIRECTION, self.snake_capacity);
        self.grid.clear();
        self.snake.occupy(&mut self.grid);
        self.obstacles.clear();
        self.food = None;
        self.score = 0;
        self.progress = 0;
        self.game_over_reason = None;
        self.high_score = self.store.load();
        self.run_state = RunState::Running;

        log!(
            "New session (seed {}, {} obstacles, high score {})",
            self.rng.seed(),
            self.settings.obstacle_count,
            self.high_score
        );

        if let Err(e) = self.place_obstacles().and_then(|_| self.place_food()) {
            warn!("Session could not be laid out: {}", e);
            self.end_game(GameOverReason::PlacementExhausted);
        }
    }

    fn place_obstacles(&mut self) -> Result<(), PlacementError> {
        for _ in 0..self.settings.obstacle_count {
            let obstacle =
                find_empty_cell(&self.grid, &[], &mut self.rng, self.settings.placement_attempts)?;
            self.grid.set_occupied(obstacle, true);
            self.obstacles.push(obstacle);
        }
        Ok(())
    }

    fn place_food(&mut self) -> Result<(), PlacementError> {
        let food = find_empty_cell(
            &self.grid,
            &self.obstacles,
            &mut self.rng,
            self.settings.placement_attempts,
        )?;
        self.food = Some(food);
        Ok(())
    }

    pub fn tick(&mut self) -> TickResult {
        if self.run_state != RunState::Running {
            return TickResult::Idle;
        }

        self.progress += 1;
        if self.progress < ANIMATION_STEPS {
            return TickResult::Advanced;
        }
        self.progress = 0;

        self.step()
    }

    fn step(&mut self) -> TickResult {
        let outcome = self.snake.step(&mut self.grid, &self.obstacles, self.food);
        match outcome {
            MoveOutcome::Moved => TickResult::Stepped(outcome),
            MoveOutcome::Grew => {
                self.score += FOOD_SCORE;
                log!("Ate food at {}. Score: {}", self.snake.head(), self.score);
                self.update_high_score();

                self.food = None;
                match self.place_food() {
                    Ok(()) => TickResult::Stepped(outcome),
                    Err(e) => {
                        warn!("No room for new food: {}", e);
                        self.end_game(GameOverReason::PlacementExhausted);
                        TickResult::GameOver(GameOverReason::PlacementExhausted)
                    }
                }
            }
            MoveOutcome::Collided(kind) => {
                self.end_game(GameOverReason::Collision(kind));
                TickResult::GameOver(GameOverReason::Collision(kind))
            }
            MoveOutcome::CapacityReached => {
                self.end_game(GameOverReason::CapacityReached);
                TickResult::GameOver(GameOverReason::CapacityReached)
            }
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.run_state = RunState::GameOver;
        self.game_over_reason = Some(reason);
        log!("Game over: {}. Final score: {}", reason, self.score);
        self.update_high_score();
    }

    /// Saves the current score when it beats the stored one. Returns true on a new record.
    pub fn update_high_score(&mut self) -> bool {
        let stored = self.store.load();
        if self.score > stored {
            self.store.save(self.score);
            self.high_score = self.score;
            log!("New high score: {}", self.score);
            true
        } else {
            self.high_score = stored;
            false
        }
    }

    /// Switches between running and paused; a finished game stays over.
    pub fn toggle_run(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::GameOver => RunState::GameOver,
        };
        self.run_state
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.run_state != RunState::Running {
            return false;
        }
        self.snake.set_direction(direction)
    }

    pub fn request_restart(&mut self) -> bool {
        if self.run_state != RunState::GameOver {
            return false;
        }
        self.reset();
        true
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Fraction of the current step already animated, in `[0, 1)`.
    pub fn animation_progress(&self) -> f32 {
        self.progress as f32 / ANIMATION_STEPS as f32
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            field_size: self.field_size,
            snake: self.snake.cells().collect(),
            food: self.food,
            obstacles: self.obstacles.clone(),
            score: self.score,
            high_score: self.high_score,
            run_state: self.run_state,
            game_over_reason: self.game_over_reason,
            heading: self.snake.heading(),
            animation_progress: self.animation_progress(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = Some(food);
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }
}
