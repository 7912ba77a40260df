use serde::{Deserialize, Serialize};

/// Gravity acceleration in px/tick^2; screen y grows downward.
pub const GRAVITY: f32 = 0.5;
/// Side length of one obstacle block in px.
pub const BLOCK_SIZE: f32 = 50.0;
/// Jump apex height expressed in blocks.
pub const JUMP_HEIGHT_BLOCKS: f32 = 3.5;
/// Character bounding-box side length in px.
pub const CHARACTER_SIZE: f32 = 50.0;
/// Fixed character x offset from the left viewport edge.
pub const CHARACTER_X: f32 = 100.0;
/// Viewport width in px; obstacles spawn at this x.
pub const VIEWPORT_WIDTH: f32 = 1200.0;
/// Y coordinate of the floor line.
pub const FLOOR_Y: f32 = 550.0;
/// Obstacle scroll speed (px/tick, leftward).
pub const OBSTACLE_SPEED: f32 = 5.0;
/// Tree scroll speed (px/tick, leftward); slower than obstacles for parallax.
pub const TREE_SPEED: f32 = 2.0;

/// Configurable runner parameters, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub gravity: f32,
    pub block_size: f32,
    pub jump_height_blocks: f32,
    pub character_size: f32,
    pub character_x: f32,
    pub viewport_width: f32,
    pub floor_y: f32,
    pub obstacle_speed: f32,
    pub tree_speed: f32,
    pub starting_lives: u8,
    /// Inclusive block-count range for a freshly spawned tower.
    pub min_blocks: u32,
    pub max_blocks: u32,
    /// Spacing jitter band; actual spacing = round(base * uniform(lo, hi)).
    pub spacing_jitter: (f32, f32),
    /// Tree spawn-timer band in ticks.
    pub tree_spawn_frames: (u32, u32),
    /// Tree height band in px.
    pub tree_height: (f32, f32),
    pub tree_aspect_ratio: f32,
    /// How long a struck tower shows its alternate ("mad") sprite, in ms.
    pub mad_duration_ms: u64,
    /// Attack shake animation length, in ms.
    pub shake_duration_ms: u64,
    /// Peak shake jitter amplitude in px.
    pub shake_amplitude: f32,
    /// Death animation (character rotating 0→180°) length, in ms.
    pub death_animation_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            block_size: BLOCK_SIZE,
            jump_height_blocks: JUMP_HEIGHT_BLOCKS,
            character_size: CHARACTER_SIZE,
            character_x: CHARACTER_X,
            viewport_width: VIEWPORT_WIDTH,
            floor_y: FLOOR_Y,
            obstacle_speed: OBSTACLE_SPEED,
            tree_speed: TREE_SPEED,
            starting_lives: 3,
            min_blocks: 2,
            max_blocks: 10,
            spacing_jitter: (0.5, 1.5),
            tree_spawn_frames: (60, 240),
            tree_height: (80.0, 220.0),
            tree_aspect_ratio: 0.6,
            mad_duration_ms: 2000,
            shake_duration_ms: 2000,
            shake_amplitude: 6.0,
            death_animation_ms: 2000,
        }
    }
}

impl RunnerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("TOWERDASH_RUNNER_CONFIG")
            .unwrap_or_else(|_| "config/runner.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RunnerConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    RunnerConfig::default()
                },
            },
            Err(_) => RunnerConfig::default(),
        }
    }

    /// Initial jump velocity, derived once so a single unmodified jump apex
    /// reaches `jump_height_blocks` blocks under constant gravity:
    /// `-sqrt(2 * g * h)`.
    pub fn jump_strength(&self) -> f32 {
        -(2.0 * self.gravity * self.jump_height_blocks * self.block_size).sqrt()
    }

    /// Y coordinate the character rests at while grounded.
    pub fn ground_y(&self) -> f32 {
        self.floor_y - self.character_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_strength_is_negative() {
        let cfg = RunnerConfig::default();
        assert!(cfg.jump_strength() < 0.0, "jump moves up, y grows down");
    }

    #[test]
    fn jump_strength_closed_form() {
        let cfg = RunnerConfig::default();
        let v = cfg.jump_strength();
        let apex = v * v / (2.0 * cfg.gravity);
        assert!((apex - cfg.jump_height_blocks * cfg.block_size).abs() < 1e-3);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = RunnerConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: RunnerConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.starting_lives, cfg.starting_lives);
        assert_eq!(back.spacing_jitter, cfg.spacing_jitter);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg: RunnerConfig = toml::from_str("gravity = 1.0").unwrap();
        assert_eq!(cfg.gravity, 1.0);
        assert_eq!(cfg.block_size, BLOCK_SIZE);
    }
}
