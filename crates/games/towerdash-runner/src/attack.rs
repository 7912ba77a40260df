use crate::config::RunnerConfig;
use crate::kinematics::Character;
use crate::obstacles::Obstacle;

/// Minimum tower height a candidate must exceed; attack never shaves a
/// tower below this many blocks.
pub const MIN_ATTACKABLE_BLOCKS: usize = 2;

/// Attack action: shave the topmost block off the nearest qualifying tower.
///
/// Candidates must have their right edge ahead of the character, sit inside
/// the horizontal viewport, and hold more than [`MIN_ATTACKABLE_BLOCKS`]
/// blocks. Returns true when a block was removed; a miss leaves everything
/// untouched.
pub fn attack(
    obstacles: &mut [Obstacle],
    character: &mut Character,
    now_ms: u64,
    config: &RunnerConfig,
) -> bool {
    let target = obstacles
        .iter_mut()
        .filter(|o| {
            o.right_edge(config) > config.character_x
                && o.x < config.viewport_width
                && o.blocks.len() > MIN_ATTACKABLE_BLOCKS
        })
        .min_by(|a, b| {
            let da = (a.x - config.character_x).abs();
            let db = (b.x - config.character_x).abs();
            da.total_cmp(&db)
        });

    match target {
        Some(tower) => {
            tower.pop_top_block();
            tower.shake_until_ms = now_ms + config.shake_duration_ms;
            character.barking_until_ms = now_ms + config.shake_duration_ms;
            true
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RunnerConfig {
        RunnerConfig::default()
    }

    #[test]
    fn pops_exactly_one_block() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers = vec![Obstacle::new(400.0, 5, None, &config)];

        assert!(attack(&mut towers, &mut ch, 0, &config));
        assert_eq!(towers[0].blocks.len(), 4);
    }

    #[test]
    fn never_reduces_below_two_blocks() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers = vec![Obstacle::new(400.0, 3, None, &config)];

        assert!(attack(&mut towers, &mut ch, 0, &config));
        assert_eq!(towers[0].blocks.len(), 2);
        for _ in 0..10 {
            assert!(!attack(&mut towers, &mut ch, 0, &config));
        }
        assert_eq!(towers[0].blocks.len(), 2, "guard holds under repeat attacks");
    }

    #[test]
    fn picks_nearest_candidate() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers = vec![
            Obstacle::new(900.0, 5, None, &config),
            Obstacle::new(400.0, 5, None, &config),
        ];

        attack(&mut towers, &mut ch, 0, &config);
        assert_eq!(towers[0].blocks.len(), 5);
        assert_eq!(towers[1].blocks.len(), 4, "closer tower takes the hit");
    }

    #[test]
    fn ignores_towers_behind_the_character() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers = vec![Obstacle::new(
            config.character_x - 2.0 * config.block_size,
            5,
            None,
            &config,
        )];
        assert!(!attack(&mut towers, &mut ch, 0, &config));
    }

    #[test]
    fn ignores_towers_beyond_the_viewport() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers = vec![Obstacle::new(config.viewport_width + 10.0, 5, None, &config)];
        assert!(!attack(&mut towers, &mut ch, 0, &config));
    }

    #[test]
    fn miss_leaves_character_quiet() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers: Vec<Obstacle> = Vec::new();
        assert!(!attack(&mut towers, &mut ch, 500, &config));
        assert!(!ch.is_barking(500));
    }

    #[test]
    fn hit_starts_shake_and_barking_windows() {
        let config = cfg();
        let mut ch = Character::new(&config);
        let mut towers = vec![Obstacle::new(400.0, 5, None, &config)];

        attack(&mut towers, &mut ch, 1000, &config);
        assert_eq!(towers[0].shake_until_ms, 1000 + config.shake_duration_ms);
        assert!(ch.is_barking(1000));
        assert!(!ch.is_barking(1000 + config.shake_duration_ms));
    }
}
