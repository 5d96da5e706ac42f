use serde::{Deserialize, Serialize};

/// Key bindings for one fighter's four actions. Fixed per match, not
/// remappable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlScheme {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub attack: String,
}

impl ControlScheme {
    /// Letter-key scheme, conventionally bound to the left-corner fighter.
    pub fn letters() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            jump: "w".to_string(),
            attack: "s".to_string(),
        }
    }

    /// Arrow-key scheme, conventionally bound to the right-corner fighter.
    pub fn arrows() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            jump: "ArrowUp".to_string(),
            attack: "ArrowDown".to_string(),
        }
    }
}

/// Global session keys, handled edge-triggered at the session boundary
/// rather than read from the held-key map each tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeys {
    pub pause: String,
    pub restart: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            pause: "p".to_string(),
            restart: "r".to_string(),
        }
    }
}
