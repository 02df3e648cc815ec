use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::occupancy::OccupancyGrid;
use super::types::{CollisionKind, Direction, MoveOutcome, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeState {
    Alive,
    Collided(CollisionKind),
}

/// The snake body lives in a ring buffer sized once for the session:
/// the tail is the oldest entry, the head the newest.
#[derive(Debug)]
pub struct Snake {
    body: AllocRingBuffer<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    state: SnakeState,
}

impl Snake {
    /// `cells` are given head first.
    pub fn new(cells: &[Point], direction: Direction, capacity: usize) -> Self {
        debug_assert!(!cells.is_empty() && cells.len() <= capacity);

        let mut body = AllocRingBuffer::new(capacity);
        for &cell in cells.iter().rev() {
            body.enqueue(cell);
        }

        Self {
            body,
            direction,
            pending_direction: None,
            state: SnakeState::Alive,
        }
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == SnakeState::Alive
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.body.capacity()
    }

    pub fn head(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    /// Body cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().rev().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next step will take.
    pub fn heading(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    /// Queues a turn for the next step. A reversal onto the neck is ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_alive() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Marks every body cell in `grid`.
    pub fn occupy(&self, grid: &mut OccupancyGrid) {
        for cell in self.body.iter() {
            grid.set_occupied(*cell, true);
        }
    }

    pub fn step(
        &mut self,
        grid: &mut OccupancyGrid,
        obstacles: &[Point],
        food: Option<Point>,
    ) -> MoveOutcome {
        if let SnakeState::Collided(kind) = self.state {
            return MoveOutcome::Collided(kind);
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = grid.field_size().advance(self.head(), self.direction);
        let grows = food == Some(next_head);
        let tail = self.tail();

        if obstacles.contains(&next_head) {
            self.state = SnakeState::Collided(CollisionKind::Obstacle);
            return MoveOutcome::Collided(CollisionKind::Obstacle);
        }

        // The tail cell is free by the time the head gets there, unless we grow.
        let tail_vacates = !grows && next_head == tail;
        if grid.is_occupied(next_head) && !tail_vacates {
            self.state = SnakeState::Collided(CollisionKind::SelfBody);
            return MoveOutcome::Collided(CollisionKind::SelfBody);
        }

        if grows {
            if self.body.is_full() {
                return MoveOutcome::CapacityReached;
            }
            self.body.enqueue(next_head);
            grid.set_occupied(next_head, true);
            return MoveOutcome::Grew;
        }

        if let Some(old_tail) = self.body.dequeue() {
            grid.set_occupied(old_tail, false);
        }
        self.body.enqueue(next_head);
        grid.set_occupied(next_head, true);
        MoveOutcome::Moved
    }

    #[cfg(test)]
    pub(crate) fn force_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::FieldSize;

    const FIELD: FieldSize = FieldSize { width: 20, height: 20 };

    fn create_snake(cells: &[Point], direction: Direction, capacity: usize) -> (Snake, OccupancyGrid) {
        let snake = Snake::new(cells, direction, capacity);
        let mut grid = OccupancyGrid::new(FIELD);
        snake.occupy(&mut grid);
        (snake, grid)
    }

    fn start_cells() -> [Point; 3] {
        [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]
    }

    fn assert_grid_matches(snake: &Snake, grid: &OccupancyGrid, obstacles: &[Point]) {
        let mut expected: Vec<Point> = snake.cells().chain(obstacles.iter().copied()).collect();
        expected.sort_by_key(|p| (p.y, p.x));
        let actual: Vec<Point> = grid.occupied_points().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_new_keeps_head_first_order() {
        let (snake, _) = create_snake(&start_cells(), Direction::Right, 100);
        assert_eq!(snake.head(), Point::new(5, 5));
        assert_eq!(snake.tail(), Point::new(3, 5));
        assert_eq!(snake.cells().collect::<Vec<_>>(), start_cells().to_vec());
        assert_eq!(snake.capacity(), 100);
    }

    #[test]
    fn test_set_direction_rejects_only_opposite() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let (mut snake, _) = create_snake(&start_cells(), current, 100);
                let accepted = snake.set_direction(requested);
                assert_eq!(accepted, !requested.is_opposite(&current));
                let expected = if accepted { requested } else { current };
                assert_eq!(snake.heading(), expected);
            }
        }
    }

    #[test]
    fn test_last_accepted_turn_wins() {
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 100);
        assert!(snake.set_direction(Direction::Up));
        // still moving right, so left is a reversal
        assert!(!snake.set_direction(Direction::Left));
        assert!(snake.set_direction(Direction::Down));
        assert_eq!(snake.step(&mut grid, &[], None), MoveOutcome::Moved);
        assert_eq!(snake.head(), Point::new(5, 6));
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_move_frees_tail_and_occupies_head() {
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 100);
        let old_tail = snake.tail();

        assert_eq!(snake.step(&mut grid, &[], None), MoveOutcome::Moved);

        assert_eq!(snake.len(), 3);
        assert!(!grid.is_occupied(old_tail));
        assert!(grid.is_occupied(Point::new(6, 5)));
        assert_grid_matches(&snake, &grid, &[]);
    }

    #[test]
    fn test_grow_keeps_tail() {
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 100);
        let old_tail = snake.tail();

        assert_eq!(snake.step(&mut grid, &[], Some(Point::new(6, 5))), MoveOutcome::Grew);

        assert_eq!(snake.len(), 4);
        assert!(grid.is_occupied(old_tail));
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            vec![Point::new(6, 5), Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]
        );
        assert_grid_matches(&snake, &grid, &[]);
    }

    #[test]
    fn test_wraps_around_right_edge() {
        let cells = [Point::new(19, 7), Point::new(18, 7), Point::new(17, 7)];
        let (mut snake, mut grid) = create_snake(&cells, Direction::Right, 100);
        assert_eq!(snake.step(&mut grid, &[], None), MoveOutcome::Moved);
        assert_eq!(snake.head(), Point::new(0, 7));
        assert_grid_matches(&snake, &grid, &[]);
    }

    #[test]
    fn test_wraps_around_top_edge() {
        let cells = [Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)];
        let (mut snake, mut grid) = create_snake(&cells, Direction::Up, 100);
        assert_eq!(snake.step(&mut grid, &[], None), MoveOutcome::Moved);
        assert_eq!(snake.head(), Point::new(2, 19));
    }

    #[test]
    fn test_reversal_into_neck_collides_without_mutation() {
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 100);
        snake.force_direction(Direction::Left);
        let before: Vec<Point> = grid.occupied_points().collect();

        assert_eq!(
            snake.step(&mut grid, &[], None),
            MoveOutcome::Collided(CollisionKind::SelfBody)
        );

        assert_eq!(grid.occupied_points().collect::<Vec<_>>(), before);
        assert_eq!(snake.cells().collect::<Vec<_>>(), start_cells().to_vec());
        assert_eq!(snake.state(), SnakeState::Collided(CollisionKind::SelfBody));
        assert!(!snake.set_direction(Direction::Up));

        // collided is terminal
        assert_eq!(
            snake.step(&mut grid, &[], None),
            MoveOutcome::Collided(CollisionKind::SelfBody)
        );
        assert_eq!(grid.occupied_points().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_head_may_enter_cell_the_tail_leaves() {
        // a 2x2 loop: head (1,0), body (0,0), (0,1), tail (1,1); moving down reaches the tail
        let cells = [Point::new(1, 0), Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        let (mut snake, mut grid) = create_snake(&cells, Direction::Right, 100);
        snake.force_direction(Direction::Down);

        assert_eq!(snake.step(&mut grid, &[], None), MoveOutcome::Moved);
        assert_eq!(snake.head(), Point::new(1, 1));
        assert_eq!(snake.len(), 4);
        assert_grid_matches(&snake, &grid, &[]);
    }

    #[test]
    fn test_obstacle_collision() {
        let obstacle = Point::new(6, 5);
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 100);
        grid.set_occupied(obstacle, true);

        assert_eq!(
            snake.step(&mut grid, &[obstacle], None),
            MoveOutcome::Collided(CollisionKind::Obstacle)
        );
        assert_grid_matches(&snake, &grid, &[obstacle]);
    }

    #[test]
    fn test_growth_at_capacity_is_reported() {
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 3);
        let before: Vec<Point> = snake.cells().collect();

        assert_eq!(
            snake.step(&mut grid, &[], Some(Point::new(6, 5))),
            MoveOutcome::CapacityReached
        );
        assert_eq!(snake.cells().collect::<Vec<_>>(), before);
        assert!(!grid.is_occupied(Point::new(6, 5)));
    }

    #[test]
    fn test_full_body_still_moves() {
        let (mut snake, mut grid) = create_snake(&start_cells(), Direction::Right, 3);
        for _ in 0..30 {
            assert_eq!(snake.step(&mut grid, &[], None), MoveOutcome::Moved);
            assert_eq!(snake.len(), 3);
            assert_grid_matches(&snake, &grid, &[]);
        }
    }
}
