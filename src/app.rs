use std::time::Duration;

use ggez::event::EventHandler;
use ggez::graphics::{
    Canvas, DrawMode, DrawParam, Mesh, PxScale, Rect, Text, TextFragment, TextLayout,
};
use ggez::input::keyboard::KeyInput;
use ggez::input::mouse::MouseButton;
use ggez::Context;
use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};

use crate::basic::Point;
use crate::error::{Error, ErrorConversion, Result};
use crate::food::{Flavor, Food};
use crate::game::{Game, Outcome, State};
use crate::grid::Grid;
use crate::input::InputState;
use crate::palette;
use crate::particles::Particles;
use crate::prefs::{Difficulty, Prefs};
use crate::rendering::{self, grid_lines, Layout, SpriteSheet};
use crate::screen::{EndGame, Paused, PausedAction, ScreenId, ScreenManager};

pub struct App {
    prefs: Prefs,
    game: Game,
    particles: Particles,
    screens: ScreenManager,
    input: InputState,

    sprites: SpriteSheet,
    layout: Layout,
    grid_lines: Option<Mesh>,

    last_update: Duration,
}

impl App {
    /// Particles move in fixed steps
    const PARTICLE_FPS: u32 = 60;

    pub fn new(ctx: &mut Context, prefs: Prefs) -> Result<Self> {
        // separate streams for food and particles
        let rng = |stream: u64| match prefs.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(stream)),
            None => SmallRng::from_entropy(),
        };

        let grid = Grid::with_walls(prefs.board_dim, &prefs.walls);
        let food = Food::new(&Flavor::ALL, rng(0));
        let game = Game::new(grid, prefs.initial_len, prefs.difficulty.speed(), food)
            .with_trace_step("App::new")?;
        let particles = Particles::new(prefs.particles_per_burst, rng(1));

        let (width, height) = ctx.gfx.drawable_size();
        let layout = Layout::fit(Point { x: width, y: height }, prefs.board_dim);

        info!(
            "{}x{} board, {:?} difficulty",
            prefs.board_dim.x, prefs.board_dim.y, prefs.difficulty
        );

        let mut screens = ScreenManager::new();
        screens.activate(Self::opening_screen(&game));

        Ok(Self {
            game,
            particles,
            screens,
            input: InputState::default(),
            sprites: SpriteSheet::new(ctx)?,
            layout,
            grid_lines: None,
            last_update: ctx.time.time_since_start(),
            prefs,
        })
    }

    fn new_round(&mut self, now: Duration) -> Result {
        self.game.reset(now).with_trace_step("App::new_round")?;
        self.particles.clear();
        self.screens.activate(Self::opening_screen(&self.game));
        Ok(())
    }

    /// A round whose snake already covers the board is over before it starts
    fn opening_screen(game: &Game) -> ScreenId {
        match game.state() {
            State::Won => ScreenId::EndGame,
            _ => ScreenId::Game,
        }
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.prefs.difficulty = difficulty;
        self.game.set_speed(difficulty.speed());
    }

    fn update_game(&mut self, now: Duration, dt: Duration) -> Result {
        match self.game.update(&self.input, now)? {
            Outcome::Idle | Outcome::Moved => {}
            Outcome::Ate(burst) => self.particles.burst(burst),
            Outcome::Won(burst) => {
                if let Some(burst) = burst {
                    self.particles.burst(burst);
                }
                self.screens.activate(ScreenId::EndGame);
            }
            Outcome::Lost(_) => self.screens.activate(ScreenId::EndGame),
            Outcome::Paused => self.screens.activate(ScreenId::Paused),
        }
        self.game.animate(dt);
        Ok(())
    }

    fn update_paused(&mut self, now: Duration) -> Result {
        match Paused::handle(&self.input) {
            Some(PausedAction::Resume) => {
                self.game.resume(now);
                self.screens.activate(ScreenId::Game);
            }
            Some(PausedAction::NewRound) => self.new_round(now)?,
            Some(PausedAction::Difficulty(difficulty)) => self.set_difficulty(difficulty),
            None => {}
        }
        Ok(())
    }

    fn draw_board(&mut self, ctx: &mut Context, canvas: &mut Canvas) -> Result {
        let commands = rendering::frame(
            self.game.grid(),
            self.game.snake(),
            self.game.food(),
            &self.particles,
            &self.layout,
        )
        .with_trace_step("App::draw_board")?;

        let (tiles, rest) = commands.split_at(self.game.grid().cell_count());
        for command in tiles {
            self.sprites.draw(canvas, command);
        }

        if self.prefs.draw_grid {
            if self.grid_lines.is_none() {
                self.grid_lines = Some(grid_lines(ctx, &self.layout, self.game.grid().dim())?);
            }
            if let Some(lines) = &self.grid_lines {
                canvas.draw(lines, DrawParam::default());
            }
        }

        for command in rest {
            self.sprites.draw(canvas, command);
        }
        Ok(())
    }

    fn draw_overlay(&self, ctx: &mut Context, canvas: &mut Canvas) -> Result {
        if !self.screens.active().is_overlay() {
            return Ok(());
        }

        let (text, color) = match self.screens.active() {
            ScreenId::Game => return Ok(()),
            ScreenId::Paused => (
                format!(
                    "{}\n{:?} difficulty\n\n{}",
                    Paused::TITLE,
                    self.prefs.difficulty,
                    Paused::HINT
                ),
                *palette::TEXT,
            ),
            ScreenId::EndGame => {
                let state = self.game.state();
                let color = if state == State::Won {
                    *palette::WON_TEXT
                } else {
                    *palette::LOST_TEXT
                };
                let message = EndGame::message(state, self.game.score());
                (format!("{}\n\n{}", message, EndGame::HINT), color)
            }
        };

        let (width, height) = ctx.gfx.drawable_size();
        let shade = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(0., 0., width, height),
            **palette::OVERLAY,
        )?;
        canvas.draw(&shade, DrawParam::default());

        let mut text = Text::new(
            TextFragment::new(text)
                .color(*color)
                .scale(PxScale::from(self.layout.tile * 0.6)),
        );
        text.set_layout(TextLayout::center());
        canvas.draw(&text, DrawParam::default().dest(Point { x: width / 2., y: height / 2. }));
        Ok(())
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        let now = ctx.time.time_since_start();
        let dt = now.saturating_sub(self.last_update);
        self.last_update = now;

        if self.input.was_clicked(MouseButton::Left) {
            debug!("click at {:?}", self.input.pointer());
        }

        let result = match self.screens.active() {
            ScreenId::Game => self.update_game(now, dt),
            ScreenId::Paused => self.update_paused(now),
            ScreenId::EndGame if EndGame::handle(&self.input) => self.new_round(now),
            ScreenId::EndGame => Ok(()),
        };
        self.input.clear();

        let frozen = self.screens.is_active(ScreenId::Paused);
        while ctx.time.check_update_time(Self::PARTICLE_FPS) {
            if !frozen {
                self.particles.update();
            }
        }

        result.with_trace_step("App::update")
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, **palette::BACKGROUND);
        self.draw_board(ctx, &mut canvas)?;
        self.draw_overlay(ctx, &mut canvas)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> Result {
        self.input.button_pressed(button, Point { x, y });
        Ok(())
    }

    fn mouse_motion_event(&mut self, _ctx: &mut Context, x: f32, y: f32, _dx: f32, _dy: f32) -> Result {
        self.input.pointer_moved(Point { x, y });
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        if repeated {
            return Ok(());
        }
        if let Some(key) = input.keycode {
            self.input.key_pressed(key);
        }
        Ok(())
    }

    fn resize_event(&mut self, _ctx: &mut Context, width: f32, height: f32) -> Result {
        self.layout = Layout::fit(Point { x: width, y: height }, self.prefs.board_dim);
        self.grid_lines = None;
        Ok(())
    }
}
