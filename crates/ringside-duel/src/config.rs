use serde::{Deserialize, Serialize};

/// Data-driven configuration for a duel, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Arena width (px).
    pub arena_width: f32,
    /// Arena height (px).
    pub arena_height: f32,
    /// Fighter bounding-box width (px).
    pub fighter_width: f32,
    /// Fighter bounding-box height (px).
    pub fighter_height: f32,
    /// Left-corner spawn x.
    pub left_spawn_x: f32,
    /// Right-corner spawn x.
    pub right_spawn_x: f32,
    /// Downward acceleration added to vertical velocity each tick.
    pub gravity: f32,
    /// Vertical velocity above which the fall-speed cap kicks in.
    pub fall_speed_threshold: f32,
    /// Vertical velocity assigned once the threshold is exceeded. Equal to
    /// the threshold this is a hard clamp; greater (the default) reproduces
    /// the jump-past-the-threshold fall behavior.
    pub fall_speed_cap: f32,
    /// Vertical velocity assigned on jump (negative is up).
    pub jump_impulse: f32,
    /// Horizontal acceleration per tick while a direction key is held.
    pub move_accel: f32,
    /// Horizontal velocity multiplier applied every tick, keys held or not.
    pub drag: f32,
    /// Health subtracted from the opponent per connecting attack tick.
    pub attack_damage: u8,
    /// Margin (px) the attacker's bounding box is expanded by when testing
    /// attack overlap. Zero means bodies must touch.
    pub attack_reach: f32,
    /// Countdown start value in seconds.
    pub round_secs: u32,
    /// Logic tick interval in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            arena_width: 1280.0,
            arena_height: 720.0,
            fighter_width: 150.0,
            fighter_height: 250.0,
            left_spawn_x: 140.0,
            right_spawn_x: 940.0,
            gravity: 5.0,
            fall_speed_threshold: 10.0,
            fall_speed_cap: 20.0,
            jump_impulse: -30.0,
            move_accel: 10.0,
            drag: 0.75,
            attack_damage: 20,
            attack_reach: 0.0,
            round_secs: 121,
            tick_interval_ms: 50,
        }
    }
}

impl DuelConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("RINGSIDE_DUEL_CONFIG") {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<Self>(&contents) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Failed to parse {path}: {e}, using defaults"),
                },
                Err(e) => tracing::warn!("Failed to read {path}: {e}, using defaults"),
            }
        }
        if let Ok(contents) = std::fs::read_to_string("config/duel.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }

    /// The y coordinate a fighter rests at on the arena floor.
    pub fn floor_y(&self) -> f32 {
        self.arena_height - self.fighter_height
    }
}
