use serde::{Deserialize, Serialize};

/// Which side of the arena a fighter starts on. Doubles as the fighter's
/// index into per-round state and as the winner tag in a decided outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    Left,
    Right,
}

impl Corner {
    pub fn index(self) -> usize {
        match self {
            Corner::Left => 0,
            Corner::Right => 1,
        }
    }

    pub fn opponent(self) -> Corner {
        match self {
            Corner::Left => Corner::Right,
            Corner::Right => Corner::Left,
        }
    }
}

/// A combatant's display identity, fixed for the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub corner: Corner,
}
