use std::time::Duration;

use log::{debug, info};

use crate::basic::Dir;
use crate::error::{ErrorConversion, ErrorType, Result};
use crate::food::{Burst, Food};
use crate::grid::Grid;
use crate::input::InputState;
use crate::snake::Snake;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    Won,
    Lost,
}

/// What ended a round
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    /// The head left the board
    Wall,
    /// The head entered a non-pathable cell
    Tile,
    SelfCollision,
}

/// Result of one call to [`Game::update`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Not playing, or not yet time to move
    Idle,
    Moved,
    Ate(Burst),
    /// The last piece of food was eaten, if there was one on the board
    Won(Option<Burst>),
    Lost(Collision),
    Paused,
}

/// Owns the board, the snake and the food, and decides when a round
/// is won or lost
pub struct Game {
    grid: Grid,
    snake: Snake,
    food: Food,
    state: State,
    score: usize,
    initial_len: usize,
}

impl Game {
    pub fn new(grid: Grid, initial_len: usize, speed: Duration, food: Food) -> Result<Self> {
        let mut game = Self {
            grid,
            snake: Snake::new(initial_len, speed),
            food,
            state: State::Playing,
            score: 0,
            initial_len,
        };
        game.reset(Duration::ZERO).with_trace_step("Game::new")?;
        Ok(game)
    }

    /// Start a new round on the same board, `now` is the game time at
    /// which the round starts
    pub fn reset(&mut self, now: Duration) -> Result {
        self.snake.reset(self.initial_len);
        for &segment in self.snake.body() {
            if !self.grid.contains(segment) {
                return Err(ErrorType::OutOfRange {
                    point: segment,
                    dim: self.grid.dim(),
                }
                .into());
            }
            if !self.grid.cell(segment)?.pathable {
                return Err(ErrorType::Blocked { point: segment }.into());
            }
        }

        self.snake.rebase_clock(now);
        self.score = 0;

        // a snake that already covers the board leaves no room for food
        if self.snake.len() >= self.grid.pathable_count() {
            info!("new round, snake length {} already fills the board", self.initial_len);
            self.food.take();
            self.state = State::Won;
            return Ok(());
        }

        self.food
            .place(&self.grid, &self.snake.occupied_cells())
            .with_trace_step("Game::reset")?;
        self.state = State::Playing;

        info!("new round, snake length {}", self.initial_len);
        Ok(())
    }

    /// Request a turn, reversing onto the body is ignored
    pub fn steer(&mut self, dir: Dir) {
        if dir.is_opposite(self.snake.dir()) {
            debug!("ignoring reversal {:?} -> {:?}", self.snake.dir(), dir);
            return;
        }
        self.snake.set_pending_dir(dir);
    }

    /// One logic step, may or may not move the snake depending on
    /// how much time passed since the last move
    pub fn update(&mut self, input: &InputState, now: Duration) -> Result<Outcome> {
        if self.state != State::Playing {
            return Ok(Outcome::Idle);
        }

        if input.pause() {
            self.pause();
            return Ok(Outcome::Paused);
        }

        if let Some(dir) = input.dir() {
            self.steer(dir);
        }

        if !self.snake.advance(now) {
            return Ok(Outcome::Idle);
        }

        if let Some(collision) = self.find_collision()? {
            info!(
                "game over ({:?}) at {:?}, length {}, score {}",
                collision,
                self.snake.head(),
                self.snake.visible_len(),
                self.score
            );
            self.state = State::Lost;
            return Ok(Outcome::Lost(collision));
        }

        if self.food.pos() != Some(self.snake.head()) {
            return Ok(Outcome::Moved);
        }

        self.snake.grow();
        self.score += 1;

        // checked before placing new food, a full board has no free cell
        if self.snake.len() >= self.grid.pathable_count() {
            info!("board filled, won with a score of {}", self.score);
            self.state = State::Won;
            return Ok(Outcome::Won(self.food.take()));
        }

        let burst = self
            .food
            .consume(&self.grid, &self.snake.occupied_cells())
            .with_trace_step("Game::update")?;
        Ok(burst.map(Outcome::Ate).unwrap_or(Outcome::Moved))
    }

    /// Wall, tile, then self, the first one found ends the round
    fn find_collision(&self) -> Result<Option<Collision>> {
        let head = self.snake.head();
        if !self.grid.contains(head) {
            return Ok(Some(Collision::Wall));
        }
        if !self.grid.cell(head)?.pathable {
            return Ok(Some(Collision::Tile));
        }
        if self.snake.hits_itself() {
            return Ok(Some(Collision::SelfCollision));
        }
        Ok(None)
    }

    pub fn pause(&mut self) {
        if self.state == State::Playing {
            info!("paused");
            self.state = State::Paused;
        }
    }

    /// The movement clock restarts at `now`, no move fires on resume
    pub fn resume(&mut self, now: Duration) {
        if self.state == State::Paused {
            info!("resumed");
            self.snake.rebase_clock(now);
            self.state = State::Playing;
        }
    }

    pub fn set_speed(&mut self, speed: Duration) {
        info!(
            "speed changed from {}ms to {}ms per move",
            self.snake.speed().as_millis(),
            speed.as_millis()
        );
        self.snake.set_speed(speed);
    }

    /// Advance animations, independent of the movement clock
    pub fn animate(&mut self, dt: Duration) {
        self.food.update(dt);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }
}
