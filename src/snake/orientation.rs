//! Works out which body sprite each segment uses and how it is rotated.
//!
//! Every sprite is drawn facing up and rotated clockwise:
//! - a straight piece runs vertically
//! - a corner piece connects the cell above with the cell to the right
//! - the tail points away from its neighbor, which is above it
//! - the head faces up
//!
//! Everything here is a pure function of the cells involved.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::basic::{Dir, GridPoint, Rotation};
use crate::snake::Snake;
use Dir::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GeometryError {
    /// Two consecutive segments are not one axis-aligned step apart
    NotAdjacent { from: GridPoint, to: GridPoint },
    /// Both neighbors of a segment lie on the same side of it
    Folded { at: GridPoint },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent { from, to } => {
                write!(f, "segments {:?} and {:?} are not adjacent", from, to)
            }
            Self::Folded { at } => write!(f, "snake folds back onto itself at {:?}", at),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SegmentKind {
    Head,
    Straight,
    Corner,
    Tail,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Orientation {
    pub kind: SegmentKind,
    pub rotation: Rotation,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OrientedSegment {
    pub pos: GridPoint,
    pub orientation: Orientation,
}

fn dir_between(from: GridPoint, to: GridPoint) -> Result<Dir, GeometryError> {
    from.dir_to(to)
        .ok_or(GeometryError::NotAdjacent { from, to })
}

pub fn is_corner(prev: GridPoint, current: GridPoint, next: GridPoint) -> bool {
    let same_x = prev.x == current.x && current.x == next.x;
    let same_y = prev.y == current.y && current.y == next.y;
    !same_x && !same_y
}

/// Orientation of an interior segment given its neighbor towards
/// the head (`prev`) and towards the tail (`next`)
pub fn classify_and_rotate(
    prev: GridPoint,
    current: GridPoint,
    next: GridPoint,
) -> Result<Orientation, GeometryError> {
    let to_prev = dir_between(current, prev)?;
    let to_next = dir_between(current, next)?;

    if to_prev == to_next {
        return Err(GeometryError::Folded { at: current });
    }

    if !is_corner(prev, current, next) {
        // traversal direction doesn't matter for a straight piece
        let rotation = if to_prev.is_vertical() {
            Rotation::R0
        } else {
            Rotation::R90
        };
        return Ok(Orientation { kind: SegmentKind::Straight, rotation });
    }

    let rotation = match (to_prev, to_next) {
        (U, R) | (R, U) => Rotation::R0,
        (D, R) | (R, D) => Rotation::R90,
        (D, L) | (L, D) => Rotation::R180,
        (U, L) | (L, U) => Rotation::R270,
        _ => return Err(GeometryError::Folded { at: current }),
    };
    Ok(Orientation { kind: SegmentKind::Corner, rotation })
}

/// The tail sprite is rotated towards the segment before it
pub fn tail_rotation(tail: GridPoint, penultimate: GridPoint) -> Result<Rotation, GeometryError> {
    dir_between(tail, penultimate).map(Dir::rotation)
}

pub fn head_rotation(facing: Dir) -> Rotation {
    facing.rotation()
}

/// Orientation of every segment, head first
pub fn orient(snake: &Snake) -> Result<Vec<OrientedSegment>, GeometryError> {
    let body = snake.body();
    let len = body.len();

    let mut segments = Vec::with_capacity(len);
    segments.push(OrientedSegment {
        pos: body[0],
        orientation: Orientation {
            kind: SegmentKind::Head,
            rotation: head_rotation(snake.dir()),
        },
    });

    if len == 1 {
        return Ok(segments);
    }

    for (&prev, &current, &next) in body.iter().tuple_windows() {
        segments.push(OrientedSegment {
            pos: current,
            orientation: classify_and_rotate(prev, current, next)?,
        });
    }

    segments.push(OrientedSegment {
        pos: body[len - 1],
        orientation: Orientation {
            kind: SegmentKind::Tail,
            rotation: tail_rotation(body[len - 1], body[len - 2])?,
        },
    });

    Ok(segments)
}
