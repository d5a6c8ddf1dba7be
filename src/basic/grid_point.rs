use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};

use super::dir::Dir;

/// A cell on the tile grid, (0, 0) is the top-left corner
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

/// Width and height of a grid in cells
pub type GridDim = GridPoint;

impl GridPoint {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let (dx, dy) = dir.delta();
        let dist = dist as isize;
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    /// None unless `other` is exactly one step away along an axis
    pub fn dir_to(self, other: Self) -> Option<Dir> {
        Dir::iter().find(|dir| self.translate(*dir, 1) == other)
    }
}

impl GridDim {
    /// Whether a point lies within a grid of these dimensions
    pub fn contains(self, point: GridPoint) -> bool {
        (0..self.x).contains(&point.x) && (0..self.y).contains(&point.y)
    }

    pub fn area(self) -> usize {
        (self.x.max(0) * self.y.max(0)) as usize
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major, matches the order in which a grid is iterated
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dir::*;

    #[test]
    fn test_translate() {
        let p = GridPoint::new(5, 5);
        assert_eq!(p.translate(U, 1), GridPoint::new(5, 4));
        assert_eq!(p.translate(D, 1), GridPoint::new(5, 6));
        assert_eq!(p.translate(L, 1), GridPoint::new(4, 5));
        assert_eq!(p.translate(R, 3), GridPoint::new(8, 5));
    }

    #[test]
    fn test_dir_to() {
        let p = GridPoint::new(2, 2);
        for dir in Dir::iter() {
            assert_eq!(p.dir_to(p.translate(dir, 1)), Some(dir));
        }
        assert_eq!(p.dir_to(p), None);
        assert_eq!(p.dir_to(GridPoint::new(3, 3)), None);
        assert_eq!(p.dir_to(GridPoint::new(4, 2)), None);
    }

    #[test]
    fn test_contains() {
        let dim = GridDim::new(16, 9);
        assert!(dim.contains(GridPoint::new(0, 0)));
        assert!(dim.contains(GridPoint::new(15, 8)));
        assert!(!dim.contains(GridPoint::new(16, 0)));
        assert!(!dim.contains(GridPoint::new(0, 9)));
        assert!(!dim.contains(GridPoint::new(-1, 4)));
        assert_eq!(dim.area(), 144);
    }
}
