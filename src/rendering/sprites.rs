use std::collections::HashMap;

use ggez::graphics::{Canvas, Color as GColor, DrawMode, DrawParam, Mesh, MeshBuilder, Rect};
use ggez::Context;
use log::warn;

use super::{DrawCommand, Layout, Sheet};
use crate::basic::{GridDim, Point};
use crate::color::Color;
use crate::error::{ErrorConversion, Result};
use crate::food::Flavor;
use crate::palette;

// sprites are built in a unit square centred on the origin
const TOLERANCE: f32 = 0.002;
const BODY_HALF_WIDTH: f32 = 0.35;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, w, h)
}

fn p(x: f32, y: f32) -> Point {
    Point { x, y }
}

fn floor(builder: &mut MeshBuilder, frame: usize) -> Result {
    let color = if frame == 0 { *palette::FLOOR } else { *palette::FLOOR_ALT };
    builder.rectangle(DrawMode::fill(), rect(-0.5, -0.5, 1., 1.), *color)?;
    Ok(())
}

fn wall(builder: &mut MeshBuilder) -> Result {
    builder
        .rectangle(DrawMode::fill(), rect(-0.5, -0.5, 1., 1.), **palette::WALL)?
        .rectangle(DrawMode::fill(), rect(-0.4, -0.4, 0.8, 0.8), *(*palette::WALL * 0.8))?;
    Ok(())
}

/// Straight and corner pieces run up, corners turn right, the tail
/// hangs from the cell above
fn body(builder: &mut MeshBuilder, frame: usize) -> Result {
    let w = BODY_HALF_WIDTH;
    let color = **palette::SNAKE_BODY;
    match frame {
        0 => {
            builder.rectangle(DrawMode::fill(), rect(-w, -0.5, 2. * w, 1.), color)?;
        }
        1 => {
            builder
                .rectangle(DrawMode::fill(), rect(-w, -0.5, 2. * w, 0.5 + w), color)?
                .rectangle(DrawMode::fill(), rect(-w, -w, 0.5 + w, 2. * w), color)?;
        }
        _ => {
            builder.polygon(
                DrawMode::fill(),
                &[p(-w, -0.5), p(w, -0.5), p(0., 0.4)],
                color,
            )?;
        }
    }
    Ok(())
}

/// Facing up, the mouth is open on frame 1
fn head(builder: &mut MeshBuilder, frame: usize) -> Result {
    let w = BODY_HALF_WIDTH;
    let color = **palette::SNAKE_HEAD;
    builder
        .rectangle(DrawMode::fill(), rect(-w, -0.1, 2. * w, 0.6), color)?
        .circle(DrawMode::fill(), p(0., -0.1), w, TOLERANCE, color)?;

    for side in [-1., 1.] {
        builder
            .circle(DrawMode::fill(), p(side * 0.17, -0.12), 0.09, TOLERANCE, **palette::SNAKE_EYE)?
            .circle(DrawMode::fill(), p(side * 0.17, -0.16), 0.045, TOLERANCE, **palette::SNAKE_PUPIL)?;
    }

    if frame == 1 {
        builder.polygon(
            DrawMode::fill(),
            &[p(-0.2, -0.47), p(0.2, -0.47), p(0., -0.25)],
            **palette::SNAKE_MOUTH,
        )?;
    }
    Ok(())
}

/// A fruit that swells and shrinks over the animation
fn food(builder: &mut MeshBuilder, flavor: Flavor, frame: usize) -> Result {
    let frames = Sheet::Food(flavor).frames() as f32;
    // 0 -> 1 -> 0 over the loop
    let t = 1. - (2. * frame as f32 / frames - 1.).abs();
    let r = 0.28 + 0.06 * ezing::sine_inout(t);

    let color = flavor.color();
    builder
        .rectangle(
            DrawMode::fill(),
            rect(-0.03, -r - 0.1, 0.06, 0.14),
            *Color::from_rgb(90, 60, 20),
        )?
        .circle(DrawMode::fill(), p(0., 0.), r, TOLERANCE, *color)?
        .circle(
            DrawMode::fill(),
            p(-r / 3., -r / 3.),
            r / 4.,
            TOLERANCE,
            *(color * 1.4).with_alpha(0.8),
        )?;
    Ok(())
}

fn particle(builder: &mut MeshBuilder, flavor: Flavor) -> Result {
    builder.rectangle(DrawMode::fill(), rect(-0.5, -0.5, 1., 1.), *flavor.color())?;
    Ok(())
}

fn build(ctx: &mut Context, sheet: Sheet, frame: usize) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    match sheet {
        Sheet::Floor => floor(&mut builder, frame),
        Sheet::Wall => wall(&mut builder),
        Sheet::Body => body(&mut builder, frame),
        Sheet::Head => head(&mut builder, frame),
        Sheet::Food(flavor) => food(&mut builder, flavor, frame),
        Sheet::Particle(flavor) => particle(&mut builder, flavor),
    }
    .with_trace_step(format!("building {:?} frame {}", sheet, frame))?;
    Ok(Mesh::from_data(ctx, builder.build()))
}

/// Every sprite the game draws, built once at startup
pub struct SpriteSheet {
    meshes: HashMap<(Sheet, usize), Mesh>,
}

impl SpriteSheet {
    pub fn new(ctx: &mut Context) -> Result<Self> {
        let mut sheets = vec![Sheet::Floor, Sheet::Wall, Sheet::Body, Sheet::Head];
        for flavor in Flavor::ALL {
            sheets.push(Sheet::Food(flavor));
            sheets.push(Sheet::Particle(flavor));
        }

        let mut meshes = HashMap::new();
        for sheet in sheets {
            for frame in 0..sheet.frames() {
                meshes.insert((sheet, frame), build(ctx, sheet, frame)?);
            }
        }
        Ok(Self { meshes })
    }

    pub fn draw(&self, canvas: &mut Canvas, command: &DrawCommand) {
        let mesh = match self.meshes.get(&(command.sheet, command.frame())) {
            Some(mesh) => mesh,
            None => {
                warn!("no sprite for {:?} frame {}", command.sheet, command.frame());
                return;
            }
        };

        let DrawCommand { dest, rotation, origin, .. } = *command;
        let anchor = p(dest.x + origin.x * dest.w, dest.y + origin.y * dest.h);
        canvas.draw(
            mesh,
            DrawParam::default()
                .dest(anchor)
                .rotation(rotation)
                .scale([dest.w, dest.h]),
        );
    }
}

/// Thin lines between cells, rebuilt whenever the layout changes
pub fn grid_lines(ctx: &mut Context, layout: &Layout, dim: GridDim) -> Result<Mesh> {
    let board = layout.board_rect(dim);
    let color: GColor = **palette::GRID_LINE;
    let width = (layout.tile / 40.).max(1.);

    let mut builder = MeshBuilder::new();
    for x in 1..dim.x {
        let x = board.x + x as f32 * layout.tile;
        builder.line(&[p(x, board.y), p(x, board.y + board.h)], width, color)?;
    }
    for y in 1..dim.y {
        let y = board.y + y as f32 * layout.tile;
        builder.line(&[p(board.x, y), p(board.x + board.w, y)], width, color)?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}
