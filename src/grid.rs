use crate::basic::{GridDim, GridPoint};
use crate::error::{ErrorType, Result};
use log::warn;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    /// Whether the snake may occupy this cell
    pub pathable: bool,
}

impl Cell {
    pub const FLOOR: Self = Self { pathable: true };
    pub const WALL: Self = Self { pathable: false };
}

/// The board, its dimensions never change after construction
pub struct Grid {
    dim: GridDim,
    // row-major
    cells: Vec<Cell>,
}

impl Grid {
    /// A board made entirely of floor
    pub fn new(dim: GridDim) -> Self {
        assert!(dim.x > 0 && dim.y > 0, "empty grid {:?}", dim);
        Self {
            dim,
            cells: vec![Cell::FLOOR; dim.area()],
        }
    }

    /// Floor everywhere except for the given walls, walls outside
    /// of the board are ignored
    pub fn with_walls(dim: GridDim, walls: &[GridPoint]) -> Self {
        let mut grid = Self::new(dim);
        for &wall in walls {
            match grid.index(wall) {
                Some(idx) => grid.cells[idx] = Cell::WALL,
                None => warn!("ignoring wall outside of the board at {:?}", wall),
            }
        }
        grid
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.dim.contains(point)
    }

    fn index(&self, point: GridPoint) -> Option<usize> {
        self.contains(point)
            .then(|| (point.y * self.dim.x + point.x) as usize)
    }

    pub fn cell(&self, point: GridPoint) -> Result<Cell> {
        match self.index(point) {
            Some(idx) => Ok(self.cells[idx]),
            None => Err(ErrorType::OutOfRange { point, dim: self.dim }.into()),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn pathable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.pathable).count()
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPoint, Cell)> + '_ {
        let width = self.dim.x;
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            let idx = idx as isize;
            (GridPoint { x: idx % width, y: idx / width }, *cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let grid = Grid::with_walls(GridDim::new(16, 9), &[GridPoint::new(3, 4)]);
        assert_eq!(grid.cell_count(), 144);
        assert_eq!(grid.pathable_count(), 143);
        assert!(grid.cell(GridPoint::new(0, 0)).unwrap().pathable);
        assert!(!grid.cell(GridPoint::new(3, 4)).unwrap().pathable);
        assert!(grid.cell(GridPoint::new(15, 8)).unwrap().pathable);
    }

    #[test]
    fn test_out_of_range() {
        let grid = Grid::new(GridDim::new(16, 9));
        for point in [
            GridPoint::new(16, 0),
            GridPoint::new(0, 9),
            GridPoint::new(-1, 0),
            GridPoint::new(0, -1),
        ] {
            let error = grid.cell(point).unwrap_err();
            assert!(matches!(
                error.error_type(),
                ErrorType::OutOfRange { point: p, .. } if *p == point
            ));
        }
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::new(GridDim::new(3, 2));
        let points: Vec<_> = grid.iter().map(|(p, _)| p).collect();
        let mut sorted = points.clone();
        sorted.sort();
        assert_eq!(points, sorted);
        assert_eq!(points[4], GridPoint::new(1, 1));
    }

    #[test]
    fn test_walls_outside_are_ignored() {
        let grid = Grid::with_walls(GridDim::new(4, 4), &[GridPoint::new(7, 7)]);
        assert_eq!(grid.pathable_count(), 16);
    }
}
