use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Held state of the keyboard, keyed by key identifier.
///
/// Fed by external press/release events at the session boundary; the game
/// only ever reads it. Keys that were never pressed read as released.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_string(), false);
    }

    /// Whether the key is currently held. Unknown keys are released.
    pub fn held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }
}
