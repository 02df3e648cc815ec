use super::types::{FieldSize, Point};

/// One flag per cell: set while the cell is covered by the snake or an obstacle.
///
/// Callers keep points in range; the grid does not wrap or clamp.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    field_size: FieldSize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            cells: vec![false; field_size.cell_count()],
            field_size,
        }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    fn index(&self, point: Point) -> usize {
        debug_assert!(
            point.x < self.field_size.width && point.y < self.field_size.height,
            "point {} outside of {}x{} grid",
            point,
            self.field_size.width,
            self.field_size.height
        );
        point.y * self.field_size.width + point.x
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.cells[self.index(point)]
    }

    pub fn set_occupied(&mut self, point: Point, occupied: bool) {
        let index = self.index(point);
        self.cells[index] = occupied;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Occupied cells in row-major order.
    pub fn occupied_points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.field_size.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .map(move |(index, _)| Point::new(index % width, index / width))
    }
}
