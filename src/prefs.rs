use std::env;
use std::str::FromStr;
use std::time::Duration;

use ggez::conf::{WindowMode, WindowSetup};
use log::{warn, LevelFilter};

use crate::basic::{GridDim, GridPoint};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Time between two moves of the snake
    pub fn speed(self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(800),
            Self::Normal => Duration::from_millis(500),
            Self::Hard => Duration::from_millis(300),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

pub struct Prefs {
    pub board_dim: GridDim,
    pub walls: Vec<GridPoint>,
    pub initial_len: usize,
    pub difficulty: Difficulty,

    pub window_width: f32,
    pub window_height: f32,
    pub draw_grid: bool,
    pub particles_per_burst: usize,

    /// Fixed seed for food placement and particles, random if None
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_dim: GridDim { x: 16, y: 9 },
            walls: vec![],
            initial_len: 5,
            difficulty: Difficulty::Normal,

            window_width: 1280.,
            window_height: 720.,
            draw_grid: true,
            particles_per_burst: 7,

            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

// builder
impl Prefs {
    pub fn board_dim(mut self, board_dim: GridDim) -> Self {
        self.board_dim = board_dim;
        self
    }

    pub fn walls(mut self, walls: Vec<GridPoint>) -> Self {
        self.walls = walls;
        self
    }

    pub fn initial_len(mut self, initial_len: usize) -> Self {
        self.initial_len = initial_len;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Prefs {
    /// Defaults overridden by `TILE_SNAKE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
            let value = lookup(name)?;
            let parsed = value.parse().ok();
            if parsed.is_none() {
                warn!("ignoring invalid value '{}' for {}", value, name);
            }
            parsed
        }

        let mut prefs = Self::default();
        if let Some(width) = parse::<isize>(&lookup, "TILE_SNAKE_WIDTH").filter(|w| *w > 0) {
            prefs.board_dim.x = width;
        }
        if let Some(height) = parse::<isize>(&lookup, "TILE_SNAKE_HEIGHT").filter(|h| *h > 0) {
            prefs.board_dim.y = height;
        }
        if let Some(len) = parse::<usize>(&lookup, "TILE_SNAKE_LENGTH").filter(|l| *l > 0) {
            prefs.initial_len = len;
        }
        if let Some(difficulty) = parse(&lookup, "TILE_SNAKE_DIFFICULTY") {
            prefs.difficulty = difficulty;
        }
        prefs.seed = parse(&lookup, "TILE_SNAKE_SEED");
        if let Some(level) = parse(&lookup, "TILE_SNAKE_LOG") {
            prefs.log_level = level;
        }

        // the snake is laid out along the top row
        if prefs.initial_len as isize > prefs.board_dim.x {
            warn!(
                "initial length {} doesn't fit on a board {} cells wide",
                prefs.initial_len, prefs.board_dim.x
            );
            prefs.initial_len = prefs.board_dim.x as usize;
        }
        prefs
    }

    pub fn window_mode(&self) -> WindowMode {
        WindowMode::default()
            .dimensions(self.window_width, self.window_height)
            .resizable(true)
    }

    pub fn window_setup(&self) -> WindowSetup {
        WindowSetup::default().title("Tile Snake").vsync(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let prefs = Prefs::from_lookup(lookup(&[]));
        assert_eq!(prefs.board_dim, GridDim::new(16, 9));
        assert_eq!(prefs.initial_len, 5);
        assert_eq!(prefs.difficulty.speed(), Duration::from_millis(500));
        assert_eq!(prefs.seed, None);
    }

    #[test]
    fn test_overrides() {
        let prefs = Prefs::from_lookup(lookup(&[
            ("TILE_SNAKE_WIDTH", "20"),
            ("TILE_SNAKE_HEIGHT", "12"),
            ("TILE_SNAKE_DIFFICULTY", "Hard"),
            ("TILE_SNAKE_SEED", "99"),
            ("TILE_SNAKE_LENGTH", "oops"),
        ]));
        assert_eq!(prefs.board_dim, GridDim::new(20, 12));
        assert_eq!(prefs.difficulty, Difficulty::Hard);
        assert_eq!(prefs.seed, Some(99));
        assert_eq!(prefs.initial_len, 5);
    }

    #[test]
    fn test_initial_len_clamped_to_width() {
        let prefs = Prefs::from_lookup(lookup(&[("TILE_SNAKE_WIDTH", "4")]));
        assert_eq!(prefs.initial_len, 4);
    }

    #[test]
    fn test_builder() {
        let walls = vec![GridPoint::new(5, 5)];
        let prefs = Prefs::default()
            .board_dim(GridDim::new(10, 10))
            .walls(walls.clone())
            .initial_len(3)
            .difficulty(Difficulty::Easy)
            .seed(Some(1));
        assert_eq!(prefs.board_dim, GridDim::new(10, 10));
        assert_eq!(prefs.walls, walls);
        assert_eq!(prefs.initial_len, 3);
        assert_eq!(prefs.difficulty.speed(), Duration::from_millis(800));
        assert_eq!(prefs.seed, Some(1));
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
