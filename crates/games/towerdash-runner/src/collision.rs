use crate::config::RunnerConfig;
use crate::kinematics::Character;
use crate::obstacles::Obstacle;

/// Half-open interval overlap on one axis.
fn spans_overlap(a_lo: f32, a_hi: f32, b_lo: f32, b_hi: f32) -> bool {
    a_lo < b_hi && b_lo < a_hi
}

/// Axis-aligned test between the character box and one tower.
///
/// The tower is not one monolithic box: each remaining block's vertical
/// span is tested independently, so a tower shortened by attacks shrinks
/// its hit region with it.
pub fn character_hits_obstacle(
    character: &Character,
    obstacle: &Obstacle,
    config: &RunnerConfig,
) -> bool {
    let ch_left = config.character_x;
    let ch_right = ch_left + config.character_size;
    let ch_top = character.y;
    let ch_bottom = character.y + config.character_size;

    if !spans_overlap(ch_left, ch_right, obstacle.x, obstacle.right_edge(config)) {
        return false;
    }

    obstacle
        .blocks
        .iter()
        .any(|&block_y| spans_overlap(ch_top, ch_bottom, block_y, block_y + config.block_size))
}

/// Outcome of one damage-resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// True exactly when a life should be deducted this tick.
    pub life_lost: bool,
}

/// Edge-triggered damage with a global re-arm gate.
///
/// `in_collision` suppresses repeated life loss while any overlap persists;
/// it clears only on a tick with zero overlap across the whole stream, so
/// touching two towers at once still deducts a single life. On a fresh
/// collision edge the struck tower turns mad for `mad_duration_ms`.
pub fn resolve_damage(
    obstacles: &mut [Obstacle],
    character: &Character,
    in_collision: &mut bool,
    now_ms: u64,
    config: &RunnerConfig,
) -> DamageOutcome {
    let struck = obstacles
        .iter()
        .position(|o| character_hits_obstacle(character, o, config));

    match struck {
        None => {
            *in_collision = false;
            DamageOutcome { life_lost: false }
        },
        Some(idx) => {
            if *in_collision {
                return DamageOutcome { life_lost: false };
            }
            *in_collision = true;
            obstacles[idx].mad_until_ms = now_ms + config.mad_duration_ms;
            DamageOutcome { life_lost: true }
        },
    }
}
