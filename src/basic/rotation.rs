use std::f32::consts::{FRAC_PI_2, PI};

/// The only four angles a sprite on an axis-aligned grid is ever drawn at,
/// measured clockwise from "facing up"
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    pub fn radians(self) -> f32 {
        match self {
            Self::R0 => 0.,
            Self::R90 => FRAC_PI_2,
            Self::R180 => PI,
            Self::R270 => 3. * FRAC_PI_2,
        }
    }
}

impl From<Rotation> for f32 {
    fn from(rotation: Rotation) -> Self {
        rotation.radians()
    }
}
