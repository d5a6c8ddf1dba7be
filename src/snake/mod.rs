use std::collections::VecDeque;
use std::time::Duration;

use crate::basic::{Dir, GridPoint};

pub mod orientation;

/// The player's snake, moves one cell at a time at most once every
/// `speed`, independently of how often it is drawn
pub struct Snake {
    /// Occupied cells, the head is at index 0
    body: VecDeque<GridPoint>,

    /// Direction the snake is currently going
    dir: Dir,
    /// Direction requested by the player, committed on the next move
    pending_dir: Option<Dir>,

    /// Minimum time between two moves
    speed: Duration,
    /// Game time at which the snake last moved
    last_move: Duration,

    /// Target length, one more than the body while a meal
    /// is being digested
    len: usize,
    /// When set, the next move keeps the tail
    eating: bool,
}

impl Snake {
    pub fn new(initial_len: usize, speed: Duration) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(initial_len),
            dir: Dir::R,
            pending_dir: None,
            speed,
            last_move: Duration::ZERO,
            len: initial_len,
            eating: false,
        };
        snake.reset(initial_len);
        snake
    }

    /// Lay the snake out along the top row, tail at the origin,
    /// facing right
    pub fn reset(&mut self, initial_len: usize) {
        assert!(initial_len > 0, "a snake needs at least one segment");

        self.body.clear();
        self.body
            .extend((0..initial_len).rev().map(|x| GridPoint::new(x as isize, 0)));
        self.len = initial_len;
        self.dir = Dir::R;
        self.pending_dir = None;
        self.eating = false;
    }

    /// The caller is responsible for rejecting reversals
    pub fn set_pending_dir(&mut self, dir: Dir) {
        self.pending_dir = Some(dir);
    }

    /// Move one cell if at least `speed` has passed since the last move,
    /// returns whether the snake moved
    pub fn advance(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_move) < self.speed {
            return false;
        }

        if let Some(dir) = self.pending_dir.take() {
            self.dir = dir;
        }

        let new_head = self.head().translate(self.dir, 1);
        self.body.push_front(new_head);

        if self.eating {
            self.eating = false;
        } else {
            self.body.pop_back();
        }

        self.last_move = now;
        true
    }

    /// The body grows lazily, on the next move
    pub fn grow(&mut self) {
        self.eating = true;
        self.len += 1;
    }

    /// Pretend the snake has just moved, used when resuming a paused
    /// game so that no move fires immediately
    pub fn rebase_clock(&mut self, now: Duration) {
        self.last_move = now;
    }

    pub fn head(&self) -> GridPoint {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<GridPoint> {
        &self.body
    }

    /// Number of cells currently occupied
    pub fn visible_len(&self) -> usize {
        self.body.len()
    }

    /// Length including a pending meal
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    pub fn is_eating(&self) -> bool {
        self.eating
    }

    /// Whether the head shares a cell with any other segment
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    pub fn occupied_cells(&self) -> Vec<GridPoint> {
        self.body.iter().copied().collect()
    }
}

#[cfg(test)]
impl Snake {
    pub fn tail(&self) -> GridPoint {
        self.body[self.body.len() - 1]
    }

    pub fn pending_dir(&self) -> Option<Dir> {
        self.pending_dir
    }

    pub fn last_move(&self) -> Duration {
        self.last_move
    }

    /// Build a snake from explicit cells, head first
    pub fn from_cells(cells: &[GridPoint], dir: Dir, speed: Duration) -> Self {
        assert!(!cells.is_empty());
        Self {
            body: cells.iter().copied().collect(),
            dir,
            pending_dir: None,
            speed,
            last_move: Duration::ZERO,
            len: cells.len(),
            eating: false,
        }
    }
}
