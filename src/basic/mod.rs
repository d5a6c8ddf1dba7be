pub use dir::Dir;
pub use grid_point::{GridDim, GridPoint};
pub use point::Point;
pub use rotation::Rotation;

mod dir;
mod grid_point;
mod point;
mod rotation;
