use ggez::input::keyboard::KeyCode;

use crate::input::InputState;
use crate::prefs::Difficulty;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PausedAction {
    Resume,
    NewRound,
    Difficulty(Difficulty),
}

const DIFFICULTY_KEYS: [(KeyCode, Difficulty); 3] = [
    (KeyCode::Key1, Difficulty::Easy),
    (KeyCode::Key2, Difficulty::Normal),
    (KeyCode::Key3, Difficulty::Hard),
];

pub struct Paused;

impl Paused {
    pub const TITLE: &'static str = "Paused";
    pub const HINT: &'static str =
        "Esc or click to resume, N for a new round\n1 easy, 2 normal, 3 hard";

    pub fn handle(input: &InputState) -> Option<PausedAction> {
        if input.pause() || input.confirm() {
            return Some(PausedAction::Resume);
        }
        if input.was_pressed(KeyCode::N) {
            return Some(PausedAction::NewRound);
        }
        DIFFICULTY_KEYS
            .iter()
            .find(|(key, _)| input.was_pressed(*key))
            .map(|(_, difficulty)| PausedAction::Difficulty(*difficulty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Point;
    use ggez::input::mouse::MouseButton;

    fn press(key: KeyCode) -> InputState {
        let mut input = InputState::default();
        input.key_pressed(key);
        input
    }

    #[test]
    fn test_actions() {
        assert_eq!(Paused::handle(&InputState::default()), None);
        assert_eq!(Paused::handle(&press(KeyCode::Escape)), Some(PausedAction::Resume));
        assert_eq!(Paused::handle(&press(KeyCode::N)), Some(PausedAction::NewRound));
        assert_eq!(
            Paused::handle(&press(KeyCode::Key3)),
            Some(PausedAction::Difficulty(Difficulty::Hard))
        );

        let mut click = InputState::default();
        click.button_pressed(MouseButton::Left, Point { x: 1., y: 1. });
        assert_eq!(Paused::handle(&click), Some(PausedAction::Resume));
    }
}
