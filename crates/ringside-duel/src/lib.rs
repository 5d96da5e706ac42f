pub mod config;
pub mod outcome;
pub mod physics;

use ringside_core::controls::ControlScheme;
use ringside_core::events::{Banner, DuelEvent};
use ringside_core::fighter::{Corner, Fighter};
use ringside_core::input::InputState;

use config::DuelConfig;
use outcome::Outcome;
use physics::{Facing, FighterState, step_fighter};

/// One round of a two-fighter duel: both fighters, the countdown, the pause
/// flag, and the decided outcome, advanced by external periodic drivers.
pub struct Duel {
    config: DuelConfig,
    profiles: [Fighter; 2],
    controls: [ControlScheme; 2],
    fighters: [FighterState; 2],
    time_remaining: u32,
    paused: bool,
    outcome: Option<Outcome>,
}

impl Duel {
    /// Create a round with the default control schemes: letter keys for the
    /// left corner, arrow keys for the right.
    pub fn new(profiles: [Fighter; 2], config: DuelConfig) -> Self {
        Self::with_controls(
            profiles,
            [ControlScheme::letters(), ControlScheme::arrows()],
            config,
        )
    }

    pub fn with_controls(
        profiles: [Fighter; 2],
        controls: [ControlScheme; 2],
        config: DuelConfig,
    ) -> Self {
        let fighters = [
            FighterState::new(config.left_spawn_x, Facing::Right, &config),
            FighterState::new(config.right_spawn_x, Facing::Left, &config),
        ];
        let time_remaining = config.round_secs;
        Self {
            config,
            profiles,
            controls,
            fighters,
            time_remaining,
            paused: false,
            outcome: None,
        }
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn fighter(&self, corner: Corner) -> &FighterState {
        &self.fighters[corner.index()]
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Advance one logic tick: run the combat step for the left fighter and
    /// then the right, each against the other. No-op while paused or after
    /// the round is decided.
    pub fn tick(&mut self, input: &InputState) -> Vec<DuelEvent> {
        if self.paused || self.outcome.is_some() {
            return Vec::new();
        }

        let mut events = Vec::new();
        for corner in [Corner::Left, Corner::Right] {
            // A knockout by the first fighter ends the round before the
            // second fighter's step; nothing mutates a decided round.
            if self.outcome.is_some() {
                break;
            }

            let (hit_percent, knockout) = {
                let [left, right] = &mut self.fighters;
                let (attacker, opponent) = match corner {
                    Corner::Left => (left, right),
                    Corner::Right => (right, left),
                };
                let controls = &self.controls[corner.index()];
                let hit = step_fighter(attacker, opponent, input, controls, &self.config);
                (hit.then_some(opponent.health), hit && opponent.health == 0)
            };

            if let Some(percent) = hit_percent {
                events.push(DuelEvent::HealthChanged {
                    corner: corner.opponent(),
                    percent,
                });
            }
            if knockout {
                events.extend(self.decide_round());
            }
        }
        events
    }

    /// Advance the countdown by one second. At zero the round is decided
    /// from the remaining health values instead of counting further.
    pub fn second(&mut self) -> Vec<DuelEvent> {
        if self.paused || self.outcome.is_some() {
            return Vec::new();
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        let mut events = vec![DuelEvent::TimeChanged {
            remaining: self.time_remaining,
        }];
        if self.time_remaining == 0 {
            events.extend(self.decide_round());
        }
        events
    }

    /// Flip the pause flag, reporting the banner change. Rejected once the
    /// round is decided.
    pub fn toggle_pause(&mut self) -> Vec<DuelEvent> {
        if self.outcome.is_some() {
            return Vec::new();
        }

        self.paused = !self.paused;
        if self.paused {
            vec![DuelEvent::BannerShown(Banner::Pause)]
        } else {
            vec![DuelEvent::BannerCleared]
        }
    }

    /// Reset the round to its initial state and report the refreshed
    /// health bars, countdown, and cleared banner.
    pub fn restart(&mut self) -> Vec<DuelEvent> {
        let [left, right] = &mut self.fighters;
        left.respawn(self.config.left_spawn_x, &self.config);
        right.respawn(self.config.right_spawn_x, &self.config);
        self.time_remaining = self.config.round_secs;
        self.paused = false;
        self.outcome = None;

        vec![
            DuelEvent::BannerCleared,
            DuelEvent::HealthChanged {
                corner: Corner::Left,
                percent: physics::FULL_HEALTH,
            },
            DuelEvent::HealthChanged {
                corner: Corner::Right,
                percent: physics::FULL_HEALTH,
            },
            DuelEvent::TimeChanged {
                remaining: self.time_remaining,
            },
        ]
    }

    /// Decide the round from current health. Idempotent: only the first
    /// trigger (knockout or timer expiry) takes effect.
    fn decide_round(&mut self) -> Vec<DuelEvent> {
        if self.outcome.is_some() {
            return Vec::new();
        }

        let decided = Outcome::decide(self.fighters[0].health, self.fighters[1].health);
        self.outcome = Some(decided);
        let banner = match decided {
            Outcome::Tie => Banner::Tie,
            Outcome::Win(corner) => Banner::Wins(self.profiles[corner.index()].name.clone()),
        };
        vec![DuelEvent::BannerShown(banner)]
    }
}
