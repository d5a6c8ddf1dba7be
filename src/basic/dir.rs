use std::ops::Neg;

use crate::basic::Rotation;
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    pub const ALL: [Dir; 4] = [U, R, D, L];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied()
    }

    /// Unit step on the grid, y grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            D => (0, 1),
            L => (-1, 0),
            R => (1, 0),
        }
    }

    /// A snake may not reverse into itself in a single step
    pub fn is_opposite(self, other: Self) -> bool {
        -self == other
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, U | D)
    }

    /// Rotation of a sprite drawn facing up so that it faces `self`
    pub fn rotation(self) -> Rotation {
        match self {
            U => Rotation::R0,
            R => Rotation::R90,
            D => Rotation::R180,
            L => Rotation::R270,
        }
    }
}

#[test]
fn test_dir_math() {
    let opposites = [(U, D), (D, U), (L, R), (R, L)];
    for &(a, b) in &opposites {
        assert_eq!(-a, b);
        assert!(a.is_opposite(b));
    }

    assert!(!U.is_opposite(L));
    assert!(!U.is_opposite(R));
    assert!(!U.is_opposite(U));
}

#[test]
fn test_dir_delta() {
    assert_eq!(U.delta(), (0, -1));
    assert_eq!(D.delta(), (0, 1));
    assert_eq!(L.delta(), (-1, 0));
    assert_eq!(R.delta(), (1, 0));
}
