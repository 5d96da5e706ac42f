use serde::{Deserialize, Serialize};

use crate::fighter::Corner;

/// Result banner states the display collaborator can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    Pause,
    Tie,
    Wins(String),
}

/// Events emitted by a duel toward the display collaborator. Fire-and-forget:
/// no return value is expected from the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelEvent {
    /// A fighter's health bar proportion changed (0–100).
    HealthChanged { corner: Corner, percent: u8 },
    /// The countdown advanced.
    TimeChanged { remaining: u32 },
    BannerShown(Banner),
    BannerCleared,
}
