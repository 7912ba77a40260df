use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;

/// The player character. X is fixed at `config.character_x`; only the
/// vertical axis is simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub y: f32,
    pub velocity_y: f32,
    pub can_double_jump: bool,
    pub has_double_jumped: bool,
    /// While the clock is before this, the attack ("barking") sprite shows.
    pub barking_until_ms: u64,
}

impl Character {
    /// A grounded character at rest.
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            y: config.ground_y(),
            velocity_y: 0.0,
            can_double_jump: false,
            has_double_jumped: false,
            barking_until_ms: 0,
        }
    }

    pub fn grounded(&self, config: &RunnerConfig) -> bool {
        self.y >= config.ground_y()
    }

    /// One tick of vertical integration: gravity, then position, then the
    /// ground clamp which also re-arms jumping.
    pub fn integrate(&mut self, config: &RunnerConfig) {
        self.velocity_y += config.gravity;
        self.y += self.velocity_y;

        if self.y >= config.ground_y() {
            self.y = config.ground_y();
            self.velocity_y = 0.0;
            self.can_double_jump = false;
            self.has_double_jumped = false;
        }
    }

    /// Jump if grounded; otherwise consume the double jump if it is still
    /// available. Anything else is a no-op.
    pub fn jump(&mut self, config: &RunnerConfig) {
        if self.grounded(config) {
            self.velocity_y = config.jump_strength();
            self.can_double_jump = true;
            self.has_double_jumped = false;
        } else if self.can_double_jump && !self.has_double_jumped {
            self.velocity_y = config.jump_strength();
            self.has_double_jumped = true;
            self.can_double_jump = false;
        }
    }

    pub fn is_barking(&self, now_ms: u64) -> bool {
        now_ms < self.barking_until_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RunnerConfig {
        RunnerConfig::default()
    }

    /// Integrate until the character lands again, returning the peak rise
    /// above the ground line.
    fn peak_rise(ch: &mut Character, config: &RunnerConfig) -> f32 {
        let mut min_y = ch.y;
        for _ in 0..10_000 {
            ch.integrate(config);
            min_y = min_y.min(ch.y);
            if ch.grounded(config) {
                break;
            }
        }
        config.ground_y() - min_y
    }

    #[test]
    fn single_jump_apex_matches_configured_height() {
        let config = cfg();
        let mut ch = Character::new(&config);
        ch.jump(&config);

        let rise = peak_rise(&mut ch, &config);
        let target = config.jump_height_blocks * config.block_size;
        // Discrete integration lands within half an impulse of the
        // closed-form apex.
        let tolerance = config.jump_strength().abs() / 2.0 + config.gravity;
        assert!(
            (rise - target).abs() <= tolerance,
            "apex {rise} should be within {tolerance} of {target}"
        );
    }

    #[test]
    fn double_jump_gives_exactly_two_impulses() {
        let config = cfg();
        let mut ch = Character::new(&config);

        ch.jump(&config);
        assert!(ch.can_double_jump && !ch.has_double_jumped);

        ch.integrate(&config);
        let v_before = ch.velocity_y;
        ch.jump(&config);
        assert_eq!(ch.velocity_y, config.jump_strength());
        assert!(ch.velocity_y < v_before, "second impulse re-launched");
        assert!(ch.has_double_jumped && !ch.can_double_jump);

        // Third call mid-air is a no-op.
        ch.integrate(&config);
        let v = ch.velocity_y;
        ch.jump(&config);
        assert_eq!(ch.velocity_y, v);
    }

    #[test]
    fn landing_rearms_jump() {
        let config = cfg();
        let mut ch = Character::new(&config);
        ch.jump(&config);
        ch.integrate(&config);
        ch.jump(&config);

        for _ in 0..10_000 {
            ch.integrate(&config);
            if ch.grounded(&config) {
                break;
            }
        }
        assert!(ch.grounded(&config));
        assert!(!ch.can_double_jump && !ch.has_double_jumped);

        ch.jump(&config);
        assert_eq!(ch.velocity_y, config.jump_strength());
    }

    #[test]
    fn ground_clamp_zeroes_velocity() {
        let config = cfg();
        let mut ch = Character::new(&config);
        ch.y = config.ground_y() - 1.0;
        ch.velocity_y = 50.0;
        ch.integrate(&config);
        assert_eq!(ch.y, config.ground_y());
        assert_eq!(ch.velocity_y, 0.0);
    }

    #[test]
    fn grounded_character_stays_put_without_input() {
        let config = cfg();
        let mut ch = Character::new(&config);
        for _ in 0..100 {
            ch.integrate(&config);
        }
        assert_eq!(ch.y, config.ground_y());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The character never sinks below the ground line, whatever the
            // jump/tick interleaving.
            #[test]
            fn never_below_ground(actions in proptest::collection::vec(any::<bool>(), 1..300)) {
                let config = cfg();
                let mut ch = Character::new(&config);
                for jump in actions {
                    if jump {
                        ch.jump(&config);
                    }
                    ch.integrate(&config);
                    prop_assert!(ch.y <= config.ground_y() + 1e-3);
                }
            }

            // A double jump never rises higher than two full apexes.
            #[test]
            fn bounded_rise(second_jump_delay in 1usize..40) {
                let config = cfg();
                let mut ch = Character::new(&config);
                ch.jump(&config);
                let mut min_y = ch.y;
                for i in 0..10_000 {
                    if i == second_jump_delay {
                        ch.jump(&config);
                    }
                    ch.integrate(&config);
                    min_y = min_y.min(ch.y);
                    if ch.grounded(&config) {
                        break;
                    }
                }
                let rise = config.ground_y() - min_y;
                let single = config.jump_height_blocks * config.block_size;
                prop_assert!(rise <= 2.0 * single + config.block_size);
            }
        }
    }
}
