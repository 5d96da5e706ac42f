use serde::{Deserialize, Serialize};

use ringside_core::fighter::Corner;

/// The decided result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    Win(Corner),
}

impl Outcome {
    /// Decide a round from the two remaining health values. Equal health is
    /// a tie; otherwise the higher-health corner wins. Pure: the trigger
    /// (knockout or timer expiry) never changes the result.
    pub fn decide(left_health: u8, right_health: u8) -> Outcome {
        if left_health == right_health {
            Outcome::Tie
        } else if left_health > right_health {
            Outcome::Win(Corner::Left)
        } else {
            Outcome::Win(Corner::Right)
        }
    }
}
