use log::info;

pub use end_game::EndGame;
pub use paused::{Paused, PausedAction};

mod end_game;
mod paused;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScreenId {
    Game,
    /// Drawn over the frozen game
    Paused,
    /// Drawn over the finished game
    EndGame,
}

impl ScreenId {
    /// Whether the game board is drawn underneath
    pub fn is_overlay(self) -> bool {
        !matches!(self, Self::Game)
    }
}

/// Exactly one screen is active at a time, it alone receives updates
pub struct ScreenManager {
    active: ScreenId,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self {
            active: ScreenId::Game,
        }
    }

    /// Deactivates whichever screen was active
    pub fn activate(&mut self, screen: ScreenId) {
        if self.active != screen {
            info!("screen {:?} -> {:?}", self.active, screen);
            self.active = screen;
        }
    }

    pub fn active(&self) -> ScreenId {
        self.active
    }

    pub fn is_active(&self, screen: ScreenId) -> bool {
        self.active == screen
    }
}

impl Default for ScreenManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_active_screen() {
        let mut screens = ScreenManager::new();
        assert!(screens.is_active(ScreenId::Game));

        screens.activate(ScreenId::Paused);
        assert!(screens.is_active(ScreenId::Paused));
        assert!(!screens.is_active(ScreenId::Game));

        screens.activate(ScreenId::EndGame);
        screens.activate(ScreenId::EndGame);
        assert_eq!(screens.active(), ScreenId::EndGame);
        assert!(!screens.is_active(ScreenId::Paused));
        assert!(screens.active().is_overlay());
    }
}
