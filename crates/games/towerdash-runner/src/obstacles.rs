use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;
use crate::sprite::{SpritePair, tower_catalog};

/// A tower of stacked blocks scrolling toward the character.
///
/// Blocks are contiguous from the floor upward; `blocks[i]` holds the top
/// y of the i-th block. Attack pops from the top, so the vector only ever
/// shrinks from the back. A tower with zero blocks stays in the stream
/// (height zero, no hit region) until it scrolls off and is retired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub blocks: Vec<f32>,
    pub sprite: Option<SpritePair>,
    /// While the clock is before this, the alternate sprite shows.
    pub mad_until_ms: u64,
    /// End of the attack shake animation; 0 when idle.
    pub shake_until_ms: u64,
}

impl Obstacle {
    /// Build a tower at `x` with `count` blocks stacked from the floor up.
    pub fn new(x: f32, count: u32, sprite: Option<SpritePair>, config: &RunnerConfig) -> Self {
        let blocks = (0..count)
            .map(|i| config.floor_y - config.block_size - i as f32 * config.block_size)
            .collect();
        Self {
            x,
            blocks,
            sprite,
            mad_until_ms: 0,
            shake_until_ms: 0,
        }
    }

    /// Collision/bounding width: bare blocks are square; sprites keep their
    /// aspect ratio against the remaining tower height.
    pub fn width(&self, config: &RunnerConfig) -> f32 {
        match &self.sprite {
            None => config.block_size,
            Some(pair) => self.blocks.len() as f32 * config.block_size * pair.aspect_ratio,
        }
    }

    pub fn right_edge(&self, config: &RunnerConfig) -> f32 {
        self.x + self.width(config)
    }

    /// Remove the topmost block. Caller enforces the minimum-height guard.
    pub fn pop_top_block(&mut self) -> Option<f32> {
        self.blocks.pop()
    }

    pub fn is_mad(&self, now_ms: u64) -> bool {
        now_ms < self.mad_until_ms
    }

    /// The sprite name to draw right now, honoring the mad window.
    pub fn displayed_sprite(&self, now_ms: u64) -> Option<&str> {
        self.sprite.as_ref().map(|pair| {
            if self.is_mad(now_ms) {
                pair.alternate.as_str()
            } else {
                pair.normal.as_str()
            }
        })
    }

    /// Current shake jitter amplitude: starts at the configured peak and
    /// decays linearly to zero over the shake window.
    pub fn shake_amplitude(&self, now_ms: u64, config: &RunnerConfig) -> f32 {
        if now_ms >= self.shake_until_ms {
            return 0.0;
        }
        let remaining = (self.shake_until_ms - now_ms) as f32;
        config.shake_amplitude * (remaining / config.shake_duration_ms as f32).min(1.0)
    }
}

/// Procedural obstacle spawner and mover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleStream {
    pub obstacles: Vec<Obstacle>,
    frames_since_spawn: u32,
    /// Ticks until the next spawn; re-randomized after every spawn.
    spacing: u32,
    base_spacing: u32,
}

impl ObstacleStream {
    /// The first spawn lands exactly at `base_spacing` ticks; jitter applies
    /// from the second spawn onward.
    pub fn new(base_spacing: u32) -> Self {
        Self {
            obstacles: Vec::new(),
            frames_since_spawn: 0,
            spacing: base_spacing,
            base_spacing,
        }
    }

    pub fn current_spacing(&self) -> u32 {
        self.spacing
    }

    /// One tick: move the active towers, then run the spawn timer. Newly
    /// spawned towers appear at the right viewport edge with their final
    /// position for this tick, so collision sees current coordinates.
    pub fn tick(&mut self, rng: &mut StdRng, config: &RunnerConfig) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= config.obstacle_speed;
        }

        self.frames_since_spawn += 1;
        if self.frames_since_spawn >= self.spacing {
            self.frames_since_spawn = 0;
            let (lo, hi) = config.spacing_jitter;
            self.spacing = (self.base_spacing as f32 * rng.random_range(lo..hi))
                .round()
                .max(1.0) as u32;
            self.spawn(rng, config);
        }
    }

    fn spawn(&mut self, rng: &mut StdRng, config: &RunnerConfig) {
        let count = rng.random_range(config.min_blocks..=config.max_blocks);
        // One slot past the catalog means "no sprite": bare blocks.
        let catalog = tower_catalog();
        let pick = rng.random_range(0..=catalog.len());
        let sprite = catalog.into_iter().nth(pick);
        self.obstacles
            .push(Obstacle::new(config.viewport_width, count, sprite, config));
    }

    /// Remove towers whose right edge has passed the left viewport boundary
    /// and return the score they yield: the block count each still has at
    /// the moment of retirement.
    pub fn retire_offscreen(&mut self, config: &RunnerConfig) -> u32 {
        let mut scored = 0u32;
        self.obstacles.retain(|o| {
            if o.right_edge(config) < 0.0 {
                scored += o.blocks.len() as u32;
                false
            } else {
                true
            }
        });
        scored
    }
}
