use serde::{Deserialize, Serialize};

use ringside_core::controls::ControlScheme;
use ringside_core::input::InputState;

use crate::config::DuelConfig;

/// Health every fighter starts a round with.
pub const FULL_HEALTH: u8 = 100;
/// Tolerance below the floor resting position for the on-ground test.
const GROUND_EPSILON: f32 = 0.5;

/// Direction a fighter last moved or attacked toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Physical and combat state of one fighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterState {
    /// Top-left of the bounding box.
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub health: u8,
    pub facing: Facing,
}

impl FighterState {
    pub fn new(spawn_x: f32, facing: Facing, config: &DuelConfig) -> Self {
        Self {
            x: spawn_x,
            y: config.floor_y(),
            vx: 0.0,
            vy: 0.0,
            width: config.fighter_width,
            height: config.fighter_height,
            health: FULL_HEALTH,
            facing,
        }
    }

    /// Reset kinematics and health for a fresh round.
    pub fn respawn(&mut self, spawn_x: f32, config: &DuelConfig) {
        self.x = spawn_x;
        self.y = config.floor_y();
        self.vx = 0.0;
        self.vy = 0.0;
        self.health = FULL_HEALTH;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Whether the fighter is resting at the arena floor. The bounds clamp
    /// puts grounded fighters exactly at `arena_height - height`, so this is
    /// the jump guard.
    pub fn on_ground(&self, arena_height: f32) -> bool {
        self.y >= arena_height - self.height - GROUND_EPSILON
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    /// Grow the box by `margin` on every side.
    pub fn expand(self, margin: f32) -> Aabb {
        Aabb {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Advance one fighter by a single combat tick, resolving an attack against
/// the opponent. Returns whether an attack connected this tick.
///
/// Effect order matters and is observable: gravity, jump, vertical move,
/// horizontal acceleration, attack, drag, horizontal move, bounds clamp.
pub fn step_fighter(
    fighter: &mut FighterState,
    opponent: &mut FighterState,
    input: &InputState,
    controls: &ControlScheme,
    config: &DuelConfig,
) -> bool {
    fighter.vy += config.gravity;
    if fighter.vy > config.fall_speed_threshold {
        fighter.vy = config.fall_speed_cap;
    }

    if fighter.on_ground(config.arena_height) && input.held(&controls.jump) {
        fighter.vy = config.jump_impulse;
    }
    fighter.y += fighter.vy;

    if input.held(&controls.right) {
        fighter.vx += config.move_accel;
        fighter.facing = Facing::Right;
    }
    if input.held(&controls.left) {
        fighter.vx -= config.move_accel;
        fighter.facing = Facing::Left;
    }

    let mut hit = false;
    if input.held(&controls.attack)
        && fighter
            .aabb()
            .expand(config.attack_reach)
            .intersects(&opponent.aabb())
    {
        fighter.facing = if opponent.x >= fighter.x {
            Facing::Right
        } else {
            Facing::Left
        };
        opponent.health = opponent.health.saturating_sub(config.attack_damage);
        hit = true;
    }

    fighter.vx *= config.drag;
    fighter.x += fighter.vx;

    fighter.x = fighter.x.clamp(0.0, config.arena_width - fighter.width);
    fighter.y = fighter.y.clamp(0.0, config.arena_height - fighter.height);

    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringside_core::test_helpers::input_holding;

    fn grounded_fighter(x: f32, config: &DuelConfig) -> FighterState {
        FighterState::new(x, Facing::Right, config)
    }

    #[test]
    fn spawned_fighter_is_grounded() {
        let config = DuelConfig::default();
        let fighter = grounded_fighter(140.0, &config);
        assert!(fighter.on_ground(config.arena_height));
        assert_eq!(fighter.health, FULL_HEALTH);
    }

    #[test]
    fn jump_from_ground_applies_impulse() {
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(140.0, &config);
        let mut opponent = grounded_fighter(940.0, &config);
        let input = input_holding(&["w"]);

        step_fighter(
            &mut fighter,
            &mut opponent,
            &input,
            &ControlScheme::letters(),
            &config,
        );

        assert_eq!(fighter.vy, config.jump_impulse);
        assert!(!fighter.on_ground(config.arena_height));
    }

    #[test]
    fn airborne_jump_input_is_ignored() {
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(140.0, &config);
        fighter.y = 100.0;
        fighter.vy = 0.0;
        let mut opponent = grounded_fighter(940.0, &config);
        let input = input_holding(&["w"]);

        step_fighter(
            &mut fighter,
            &mut opponent,
            &input,
            &ControlScheme::letters(),
            &config,
        );

        // Only gravity acted on the vertical velocity
        assert_eq!(fighter.vy, config.gravity);
    }

    #[test]
    fn fall_speed_jumps_to_cap_past_threshold() {
        // Default tuning: exceeding the threshold snaps velocity to a
        // higher cap instead of clamping.
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(140.0, &config);
        fighter.y = 100.0;
        let mut opponent = grounded_fighter(940.0, &config);
        let input = InputState::default();
        let controls = ControlScheme::letters();

        step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        assert_eq!(fighter.vy, 5.0);
        step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        assert_eq!(fighter.vy, 10.0);
        step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        assert_eq!(fighter.vy, 20.0);
        step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        assert_eq!(fighter.vy, 20.0);
    }

    #[test]
    fn fall_speed_hard_clamp_variant() {
        // Setting the cap equal to the threshold gives the alternative
        // tuning: a plain clamp at the threshold.
        let config = DuelConfig {
            fall_speed_cap: 10.0,
            ..DuelConfig::default()
        };
        let mut fighter = grounded_fighter(140.0, &config);
        fighter.y = 100.0;
        let mut opponent = grounded_fighter(940.0, &config);
        let input = InputState::default();
        let controls = ControlScheme::letters();

        for _ in 0..4 {
            step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        }
        assert_eq!(fighter.vy, 10.0);
    }

    #[test]
    fn held_direction_accelerates_and_faces() {
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(140.0, &config);
        let mut opponent = grounded_fighter(940.0, &config);
        let controls = ControlScheme::letters();

        let input = input_holding(&["d"]);
        step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        assert!(fighter.vx > 0.0);
        assert_eq!(fighter.facing, Facing::Right);
        assert!(fighter.x > 140.0);

        let input = input_holding(&["a"]);
        step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);
        assert_eq!(fighter.facing, Facing::Left);
    }

    #[test]
    fn attack_out_of_range_is_harmless() {
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(140.0, &config);
        let mut opponent = grounded_fighter(940.0, &config);
        let input = input_holding(&["s"]);

        let hit = step_fighter(
            &mut fighter,
            &mut opponent,
            &input,
            &ControlScheme::letters(),
            &config,
        );

        assert!(!hit);
        assert_eq!(opponent.health, FULL_HEALTH);
    }

    #[test]
    fn attack_in_range_damages_and_faces_opponent() {
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(300.0, &config);
        fighter.facing = Facing::Left;
        let mut opponent = grounded_fighter(400.0, &config);
        let input = input_holding(&["s"]);

        let hit = step_fighter(
            &mut fighter,
            &mut opponent,
            &input,
            &ControlScheme::letters(),
            &config,
        );

        assert!(hit);
        assert_eq!(opponent.health, FULL_HEALTH - config.attack_damage);
        assert_eq!(fighter.facing, Facing::Right);
    }

    #[test]
    fn attack_reach_extends_range() {
        let config = DuelConfig {
            attack_reach: 30.0,
            ..DuelConfig::default()
        };
        // 20px gap between bodies: out of touch range, inside reach
        let mut fighter = grounded_fighter(300.0, &config);
        let mut opponent = grounded_fighter(470.0, &config);
        let input = input_holding(&["s"]);

        let hit = step_fighter(
            &mut fighter,
            &mut opponent,
            &input,
            &ControlScheme::letters(),
            &config,
        );

        assert!(hit, "reach margin should cover the 20px gap");
        assert_eq!(opponent.health, FULL_HEALTH - config.attack_damage);
    }

    #[test]
    fn damage_saturates_at_zero() {
        let config = DuelConfig::default();
        let mut fighter = grounded_fighter(300.0, &config);
        let mut opponent = grounded_fighter(400.0, &config);
        opponent.health = 10;
        let input = input_holding(&["s"]);

        step_fighter(
            &mut fighter,
            &mut opponent,
            &input,
            &ControlScheme::letters(),
            &config,
        );

        assert_eq!(opponent.health, 0);
    }

    #[test]
    fn bounds_clamp_left_and_right_edges() {
        let config = DuelConfig::default();
        let controls = ControlScheme::letters();
        let mut opponent = grounded_fighter(940.0, &config);

        let mut fighter = grounded_fighter(5.0, &config);
        fighter.vx = -500.0;
        step_fighter(
            &mut fighter,
            &mut opponent,
            &InputState::default(),
            &controls,
            &config,
        );
        assert_eq!(fighter.x, 0.0);

        let mut fighter = grounded_fighter(config.arena_width - config.fighter_width - 5.0, &config);
        fighter.vx = 500.0;
        step_fighter(
            &mut fighter,
            &mut opponent,
            &InputState::default(),
            &controls,
            &config,
        );
        assert_eq!(fighter.x, config.arena_width - config.fighter_width);
    }

    #[test]
    fn aabb_expand_grows_every_side() {
        let boxed = Aabb {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 200.0,
        };
        let grown = boxed.expand(5.0);
        assert_eq!(grown.x, 5.0);
        assert_eq!(grown.y, 15.0);
        assert_eq!(grown.width, 110.0);
        assert_eq!(grown.height, 210.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let b = Aabb {
            x: 10.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(!a.intersects(&b));
        let c = Aabb {
            x: 9.5,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(a.intersects(&c));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn position_stays_in_arena(
                x in -2000.0f32..4000.0,
                y in -2000.0f32..4000.0,
                vx in -300.0f32..300.0,
                vy in -300.0f32..300.0,
                right in proptest::bool::ANY,
                left in proptest::bool::ANY,
                jump in proptest::bool::ANY,
                attack in proptest::bool::ANY,
            ) {
                let config = DuelConfig::default();
                let mut fighter = FighterState::new(140.0, Facing::Right, &config);
                fighter.x = x;
                fighter.y = y;
                fighter.vx = vx;
                fighter.vy = vy;
                let mut opponent = FighterState::new(940.0, Facing::Left, &config);

                let mut input = InputState::default();
                let controls = ControlScheme::letters();
                if right { input.press(&controls.right); }
                if left { input.press(&controls.left); }
                if jump { input.press(&controls.jump); }
                if attack { input.press(&controls.attack); }

                step_fighter(&mut fighter, &mut opponent, &input, &controls, &config);

                prop_assert!(fighter.x >= 0.0);
                prop_assert!(fighter.x <= config.arena_width - fighter.width);
                prop_assert!(fighter.y >= 0.0);
                prop_assert!(fighter.y <= config.arena_height - fighter.height);
            }

            #[test]
            fn drag_decays_without_reversing_sign(vx in -200.0f32..200.0) {
                let config = DuelConfig::default();
                let mut fighter = FighterState::new(600.0, Facing::Right, &config);
                fighter.vx = vx;
                let mut opponent = FighterState::new(940.0, Facing::Left, &config);

                step_fighter(
                    &mut fighter,
                    &mut opponent,
                    &InputState::default(),
                    &ControlScheme::letters(),
                    &config,
                );

                prop_assert!(fighter.vx.abs() <= vx.abs());
                if vx != 0.0 {
                    prop_assert!(
                        fighter.vx == 0.0 || fighter.vx.signum() == vx.signum(),
                        "drag alone must not reverse direction: {} -> {}",
                        vx,
                        fighter.vx
                    );
                }
            }
        }
    }
}
