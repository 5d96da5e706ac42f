pub mod controls;
pub mod events;
pub mod fighter;
pub mod input;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::fighter::{Corner, Fighter};
    use crate::input::InputState;

    /// Create the standard two-fighter lineup with sequential display names.
    pub fn make_fighters() -> [Fighter; 2] {
        [
            Fighter {
                name: "Player 1".to_string(),
                corner: Corner::Left,
            },
            Fighter {
                name: "Player 2".to_string(),
                corner: Corner::Right,
            },
        ]
    }

    /// Build an input state with the given keys held down.
    pub fn input_holding(keys: &[&str]) -> InputState {
        let mut input = InputState::default();
        for key in keys {
            input.press(key);
        }
        input
    }
}
