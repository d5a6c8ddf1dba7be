use std::collections::HashSet;
use std::time::Duration;

use log::debug;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng};

use crate::basic::GridPoint;
use crate::error::{ErrorType, Result};
use crate::grid::Grid;
pub use flavor::{Animation, Flavor};

mod flavor;

/// Where a piece of food was eaten, handed to the particle system
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Burst {
    pub pos: GridPoint,
    pub flavor: Flavor,
}

/// The single piece of food on the board, shown as one of several
/// interchangeable flavors
pub struct Food {
    pos: Option<GridPoint>,
    flavors: Vec<(Flavor, Animation)>,
    active: usize,
    rng: SmallRng,
}

impl Food {
    pub fn new(flavors: &[Flavor], rng: SmallRng) -> Self {
        assert!(!flavors.is_empty(), "No food flavors specified");
        Self {
            pos: None,
            flavors: flavors
                .iter()
                .map(|&flavor| (flavor, Animation::default()))
                .collect(),
            active: 0,
            rng,
        }
    }

    /// Put the food on a random free cell with a random flavor
    pub fn place(&mut self, grid: &Grid, occupied: &[GridPoint]) -> Result<GridPoint> {
        let occupied: HashSet<_> = occupied.iter().copied().collect();
        let free: Vec<_> = grid
            .iter()
            .filter(|(pos, cell)| cell.pathable && !occupied.contains(pos))
            .map(|(pos, _)| pos)
            .collect();

        let pos = match free.choose(&mut self.rng) {
            Some(pos) => *pos,
            None => {
                self.pos = None;
                return Err(ErrorType::NoSpace.into());
            }
        };

        self.active = self.rng.gen_range(0..self.flavors.len());
        self.flavors[self.active].1.restart();
        self.pos = Some(pos);

        debug!("placed {} at {:?}", self.flavor().name(), pos);
        Ok(pos)
    }

    /// Eat the current food and place a new one, `occupied` must
    /// already include the cell the head moved into this tick
    pub fn consume(&mut self, grid: &Grid, occupied: &[GridPoint]) -> Result<Option<Burst>> {
        let burst = self.take();
        self.place(grid, occupied)?;
        Ok(burst)
    }

    /// Remove the food from the board
    pub fn take(&mut self) -> Option<Burst> {
        let flavor = self.flavor();
        self.pos.take().map(|pos| Burst { pos, flavor })
    }

    pub fn update(&mut self, dt: Duration) {
        if self.pos.is_some() {
            self.flavors[self.active].1.update(dt);
        }
    }

    pub fn pos(&self) -> Option<GridPoint> {
        self.pos
    }

    pub fn flavor(&self) -> Flavor {
        self.flavors[self.active].0
    }

    pub fn animation(&self) -> &Animation {
        &self.flavors[self.active].1
    }
}

#[cfg(test)]
impl Food {
    pub fn is_active(&self) -> bool {
        self.pos.is_some()
    }

    /// Put the food on a fixed cell, keeping the current flavor
    pub fn place_at(&mut self, pos: GridPoint) {
        self.pos = Some(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::GridDim;
    use rand::SeedableRng;

    fn food(seed: u64) -> Food {
        Food::new(&Flavor::ALL, SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn test_never_placed_on_occupied_cell() {
        let grid = Grid::new(GridDim::new(16, 9));
        let mut rng = SmallRng::seed_from_u64(7);

        for seed in 0..200 {
            let mut food = food(seed);
            let mut cells: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();
            cells.shuffle(&mut rng);
            let occupied = &cells[..rng.gen_range(0..grid.cell_count())];

            let pos = food.place(&grid, occupied).unwrap();
            assert!(!occupied.contains(&pos));
            assert!(grid.contains(pos));
            assert_eq!(food.pos(), Some(pos));
        }
    }

    #[test]
    fn test_last_free_cell() {
        let grid = Grid::new(GridDim::new(16, 9));
        let free = GridPoint::new(11, 3);
        let occupied: Vec<_> = grid.iter().map(|(pos, _)| pos).filter(|&pos| pos != free).collect();

        let mut food = food(1);
        assert_eq!(food.place(&grid, &occupied).unwrap(), free);
    }

    #[test]
    fn test_full_board() {
        let grid = Grid::new(GridDim::new(4, 4));
        let occupied: Vec<_> = grid.iter().map(|(pos, _)| pos).collect();

        let mut food = food(1);
        let error = food.place(&grid, &occupied).unwrap_err();
        assert!(matches!(error.error_type(), ErrorType::NoSpace));
        assert!(!food.is_active());
    }

    #[test]
    fn test_walls_are_never_chosen() {
        let walls: Vec<_> = (0..4).map(|x| GridPoint::new(x, 0)).collect();
        let grid = Grid::with_walls(GridDim::new(4, 2), &walls);

        for seed in 0..50 {
            let pos = food(seed).place(&grid, &[]).unwrap();
            assert_eq!(pos.y, 1);
        }
    }

    #[test]
    fn test_consume_moves_food() {
        let grid = Grid::new(GridDim::new(16, 9));
        let mut food = food(3);
        let first = food.place(&grid, &[]).unwrap();
        let flavor = food.flavor();

        let burst = food.consume(&grid, &[first]).unwrap();
        assert_eq!(burst, Some(Burst { pos: first, flavor }));
        assert_ne!(food.pos(), Some(first));
        assert!(food.is_active());
    }

    #[test]
    fn test_same_seed_same_placement() {
        let grid = Grid::new(GridDim::new(16, 9));
        let a: Vec<_> = {
            let mut food = food(42);
            (0..10).map(|_| food.place(&grid, &[]).unwrap()).collect()
        };
        let b: Vec<_> = {
            let mut food = food(42);
            (0..10).map(|_| food.place(&grid, &[]).unwrap()).collect()
        };
        assert_eq!(a, b);
    }
}
