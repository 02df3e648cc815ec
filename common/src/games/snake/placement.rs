use crate::games::SessionRng;
use crate::log;
use super::occupancy::OccupancyGrid;
use super::types::{PlacementError, Point};

/// Finds a cell that is neither occupied nor listed in `exclude`.
///
/// Random cells are drawn first, up to `max_attempts` of them. When the grid is
/// so crowded that sampling keeps missing, every empty cell is collected and one
/// is picked at random, so this only fails on a completely full grid.
pub fn find_empty_cell(
    grid: &OccupancyGrid,
    exclude: &[Point],
    rng: &mut SessionRng,
    max_attempts: usize,
) -> Result<Point, PlacementError> {
    let field_size = grid.field_size();
    let is_free = |point: Point| !grid.is_occupied(point) && !exclude.contains(&point);

    for _ in 0..max_attempts {
        let x = rng.random_range(0..field_size.width);
        let y = rng.random_range(0..field_size.height);
        let point = Point::new(x, y);
        if is_free(point) {
            return Ok(point);
        }
    }

    let empty_cells: Vec<Point> = (0..field_size.height)
        .flat_map(|y| (0..field_size.width).map(move |x| Point::new(x, y)))
        .filter(|&point| is_free(point))
        .collect();

    log!(
        "Random placement missed {} times, scanning: {} empty cells",
        max_attempts,
        empty_cells.len()
    );

    rng.choose(&empty_cells).ok_or(PlacementError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::FieldSize;

    fn create_grid(width: usize, height: usize) -> OccupancyGrid {
        OccupancyGrid::new(FieldSize { width, height })
    }

    fn fill(grid: &mut OccupancyGrid) {
        let size = grid.field_size();
        for y in 0..size.height {
            for x in 0..size.width {
                grid.set_occupied(Point::new(x, y), true);
            }
        }
    }

    #[test]
    fn test_finds_cell_on_empty_grid() {
        let grid = create_grid(20, 20);
        let mut rng = SessionRng::new(42);
        let point = find_empty_cell(&grid, &[], &mut rng, 1000).unwrap();
        assert!(point.x < 20 && point.y < 20);
    }

    #[test]
    fn test_never_returns_occupied_or_excluded_cell() {
        let mut grid = create_grid(5, 5);
        for x in 0..5 {
            grid.set_occupied(Point::new(x, 0), true);
            grid.set_occupied(Point::new(x, 1), true);
        }
        let exclude = [Point::new(0, 2), Point::new(1, 2)];
        let mut rng = SessionRng::new(42);
        for _ in 0..200 {
            let point = find_empty_cell(&grid, &exclude, &mut rng, 1000).unwrap();
            assert!(!grid.is_occupied(point));
            assert!(!exclude.contains(&point));
        }
    }

    #[test]
    fn test_scan_finds_last_free_cell() {
        let mut grid = create_grid(20, 20);
        fill(&mut grid);
        grid.set_occupied(Point::new(13, 17), false);
        let mut rng = SessionRng::new(42);
        // a zero budget goes straight to the scan
        assert_eq!(find_empty_cell(&grid, &[], &mut rng, 0), Ok(Point::new(13, 17)));
        assert_eq!(find_empty_cell(&grid, &[], &mut rng, 3), Ok(Point::new(13, 17)));
    }

    #[test]
    fn test_full_grid_is_exhausted() {
        let mut grid = create_grid(4, 4);
        fill(&mut grid);
        let mut rng = SessionRng::new(42);
        assert_eq!(
            find_empty_cell(&grid, &[], &mut rng, 1000),
            Err(PlacementError::Exhausted)
        );
    }

    #[test]
    fn test_excluded_last_cell_is_exhausted() {
        let mut grid = create_grid(3, 3);
        fill(&mut grid);
        grid.set_occupied(Point::new(1, 1), false);
        let mut rng = SessionRng::new(42);
        assert_eq!(
            find_empty_cell(&grid, &[Point::new(1, 1)], &mut rng, 50),
            Err(PlacementError::Exhausted)
        );
    }
}
