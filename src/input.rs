use std::collections::HashSet;

use ggez::input::keyboard::KeyCode::{self, *};
use ggez::input::mouse::MouseButton;

use crate::basic::{Dir, Point};

// checked in this order when several are pressed in the same frame
const DIR_KEYS: [(Dir, [KeyCode; 3]); 4] = [
    (Dir::D, [Down, S, Numpad2]),
    (Dir::R, [Right, D, Numpad6]),
    (Dir::U, [Up, W, Numpad8]),
    (Dir::L, [Left, A, Numpad4]),
];

/// Edge-triggered input collected from window events between two updates,
/// a held key counts once
#[derive(Default)]
pub struct InputState {
    keys_pressed: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    pointer: Point,
}

impl InputState {
    pub fn key_pressed(&mut self, key: KeyCode) {
        self.keys_pressed.insert(key);
    }

    pub fn button_pressed(&mut self, button: MouseButton, pos: Point) {
        self.pointer = pos;
        self.buttons_pressed.insert(button);
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        self.pointer = pos;
    }

    /// Forget everything that was pressed, called after every update
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
    }

    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn was_clicked(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Last known pointer position in window coordinates
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Direction requested this frame, if any
    pub fn dir(&self) -> Option<Dir> {
        DIR_KEYS
            .iter()
            .find(|(_, keys)| keys.iter().any(|key| self.was_pressed(*key)))
            .map(|(dir, _)| *dir)
    }

    pub fn pause(&self) -> bool {
        self.was_pressed(Escape)
    }

    pub fn confirm(&self) -> bool {
        self.was_pressed(Return) || self.was_clicked(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_keys() {
        for (key, dir) in [(Up, Dir::U), (A, Dir::L), (Numpad2, Dir::D), (Right, Dir::R)] {
            let mut input = InputState::default();
            input.key_pressed(key);
            assert_eq!(input.dir(), Some(dir));
        }
    }

    #[test]
    fn test_dir_priority() {
        let mut input = InputState::default();
        input.key_pressed(Left);
        input.key_pressed(Up);
        assert_eq!(input.dir(), Some(Dir::U));

        input.key_pressed(S);
        assert_eq!(input.dir(), Some(Dir::D));
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::default();
        input.key_pressed(Escape);
        input.button_pressed(MouseButton::Left, Point { x: 10., y: 20. });
        assert!(input.pause());
        assert!(input.confirm());

        input.clear();
        assert!(!input.pause());
        assert!(!input.confirm());
        assert_eq!(input.dir(), None);
        // the pointer is state, not an event
        assert_eq!(input.pointer(), Point { x: 10., y: 20. });
    }
}
