use crate::game::State;
use crate::input::InputState;

pub struct EndGame;

impl EndGame {
    pub const HINT: &'static str = "Enter or click to play again";

    /// Whether a new round was requested
    pub fn handle(input: &InputState) -> bool {
        input.confirm()
    }

    pub fn message(state: State, score: usize) -> String {
        let title = match state {
            State::Won => "You won the game!",
            _ => "You just lost the game!",
        };
        format!("{}\nScore: {}", title, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ggez::input::keyboard::KeyCode;

    #[test]
    fn test_confirm_starts_new_round() {
        let mut input = InputState::default();
        assert!(!EndGame::handle(&input));
        input.key_pressed(KeyCode::Escape);
        assert!(!EndGame::handle(&input));
        input.key_pressed(KeyCode::Return);
        assert!(EndGame::handle(&input));
    }

    #[test]
    fn test_message() {
        assert_eq!(EndGame::message(State::Won, 139), "You won the game!\nScore: 139");
        assert_eq!(EndGame::message(State::Lost, 2), "You just lost the game!\nScore: 2");
    }
}
