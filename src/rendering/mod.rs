//! Turns game state into draw commands. Nothing here needs a ggez
//! context, `sprites` does the actual drawing.

use ggez::graphics::Rect;

use crate::basic::{GridDim, GridPoint, Point};
use crate::error::Result;
use crate::food::{Flavor, Food};
use crate::grid::Grid;
use crate::particles::Particles;
use crate::snake::{
    orientation::{orient, SegmentKind},
    Snake,
};

pub use sprites::{grid_lines, SpriteSheet};

mod sprites;

/// A set of sprites of the same kind, one per animation frame or variant
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Sheet {
    /// Frame 0 and 1 alternate in a checker pattern
    Floor,
    Wall,
    /// Straight, corner, tail
    Body,
    /// Closed and open mouth
    Head,
    Food(Flavor),
    Particle(Flavor),
}

impl Sheet {
    pub fn frames(self) -> usize {
        match self {
            Sheet::Floor => 2,
            Sheet::Wall => 1,
            Sheet::Body => 3,
            Sheet::Head => 2,
            Sheet::Food(_) => crate::food::Animation::FRAMES,
            Sheet::Particle(_) => 1,
        }
    }

    /// The part of the sheet holding one frame, in normalized coordinates
    pub fn frame(self, frame: usize) -> Rect {
        let w = 1. / self.frames() as f32;
        Rect::new(frame as f32 * w, 0., w, 1.)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub sheet: Sheet,
    /// Where on screen, in pixels
    pub dest: Rect,
    /// Which frame of the sheet
    pub src: Rect,
    /// Clockwise, about `origin`
    pub rotation: f32,
    /// Relative to `dest`, (0.5, 0.5) is the centre
    pub origin: Point,
}

impl DrawCommand {
    const CENTRE: Point = Point { x: 0.5, y: 0.5 };

    fn new(sheet: Sheet, frame: usize, dest: Rect) -> Self {
        Self {
            sheet,
            dest,
            src: sheet.frame(frame),
            rotation: 0.,
            origin: Self::CENTRE,
        }
    }

    fn rotated(mut self, rotation: impl Into<f32>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Index of the frame `src` points to
    pub fn frame(&self) -> usize {
        (self.src.x / self.src.w).round() as usize
    }
}

/// Maps cells to pixels, the board is centred in the window with
/// square tiles as large as fit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub tile: f32,
    pub offset: Point,
}

impl Layout {
    pub fn fit(window: Point, dim: GridDim) -> Self {
        let tile = (window.x / dim.x as f32).min(window.y / dim.y as f32);
        let board = Point {
            x: tile * dim.x as f32,
            y: tile * dim.y as f32,
        };
        Self {
            tile,
            offset: (window - board) / 2.,
        }
    }

    pub fn cell_rect(&self, pos: GridPoint) -> Rect {
        Rect::new(
            self.offset.x + pos.x as f32 * self.tile,
            self.offset.y + pos.y as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }

    /// A square of `size` cells centred on a point given in cells
    fn rect_around(&self, centre: Point, size: f32) -> Rect {
        let side = size * self.tile;
        let centre = self.offset + centre * self.tile;
        Rect::new(centre.x - side / 2., centre.y - side / 2., side, side)
    }

    /// Top-left and size of the whole board
    pub fn board_rect(&self, dim: GridDim) -> Rect {
        Rect::new(
            self.offset.x,
            self.offset.y,
            self.tile * dim.x as f32,
            self.tile * dim.y as f32,
        )
    }
}

pub fn board_commands(grid: &Grid, layout: &Layout) -> Vec<DrawCommand> {
    grid.iter()
        .map(|(pos, cell)| {
            let dest = layout.cell_rect(pos);
            if cell.pathable {
                let checker = ((pos.x + pos.y) % 2) as usize;
                DrawCommand::new(Sheet::Floor, checker, dest)
            } else {
                DrawCommand::new(Sheet::Wall, 0, dest)
            }
        })
        .collect()
}

pub fn food_commands(food: &Food, layout: &Layout) -> Vec<DrawCommand> {
    food.pos()
        .map(|pos| {
            let frame = food.animation().frame();
            DrawCommand::new(Sheet::Food(food.flavor()), frame, layout.cell_rect(pos))
        })
        .into_iter()
        .collect()
}

pub fn particle_commands(particles: &Particles, layout: &Layout) -> Vec<DrawCommand> {
    particles
        .iter()
        .map(|particle| {
            let dest = layout.rect_around(particle.pos, particle.scale);
            DrawCommand::new(Sheet::Particle(particle.flavor), 0, dest).rotated(particle.rotation)
        })
        .collect()
}

pub fn snake_commands(snake: &Snake, layout: &Layout) -> Result<Vec<DrawCommand>> {
    let commands = orient(snake)?
        .into_iter()
        .map(|segment| {
            let (sheet, frame) = match segment.orientation.kind {
                SegmentKind::Head => (Sheet::Head, snake.is_eating() as usize),
                SegmentKind::Straight => (Sheet::Body, 0),
                SegmentKind::Corner => (Sheet::Body, 1),
                SegmentKind::Tail => (Sheet::Body, 2),
            };
            DrawCommand::new(sheet, frame, layout.cell_rect(segment.pos))
                .rotated(segment.orientation.rotation)
        })
        // head last so it's drawn on top
        .rev()
        .collect();
    Ok(commands)
}

/// Everything on the board, back to front
pub fn frame(
    grid: &Grid,
    snake: &Snake,
    food: &Food,
    particles: &Particles,
    layout: &Layout,
) -> Result<Vec<DrawCommand>> {
    let mut commands = board_commands(grid, layout);
    commands.extend(food_commands(food, layout));
    commands.extend(particle_commands(particles, layout));
    commands.extend(snake_commands(snake, layout)?);
    Ok(commands)
}
