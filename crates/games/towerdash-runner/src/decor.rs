use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;

/// A background tree. Purely cosmetic; never collides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub x: f32,
    pub height: f32,
    pub width: f32,
}

/// Parallax tree spawner. Trees scroll slower than obstacles and keep a
/// half-viewport minimum spacing from the previously spawned tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorStream {
    pub trees: Vec<Tree>,
    frames: u32,
    target: u32,
}

impl DecorStream {
    pub fn new(rng: &mut StdRng, config: &RunnerConfig) -> Self {
        let mut stream = Self {
            trees: Vec::new(),
            frames: 0,
            target: 0,
        };
        stream.redraw_target(rng, config);
        stream
    }

    fn redraw_target(&mut self, rng: &mut StdRng, config: &RunnerConfig) {
        let (lo, hi) = config.tree_spawn_frames;
        self.target = rng.random_range(lo..=hi);
    }

    /// One tick: scroll, prune, and run the spawn timer. A spawn attempt
    /// blocked by the spacing gate still resets the timer so the stream
    /// never stalls waiting on a tree that will not move far enough.
    pub fn tick(&mut self, rng: &mut StdRng, config: &RunnerConfig) {
        for tree in &mut self.trees {
            tree.x -= config.tree_speed;
        }
        self.trees.retain(|t| t.x + t.width >= 0.0);

        self.frames += 1;
        if self.frames >= self.target {
            self.frames = 0;
            if self.spacing_allows_spawn(config) {
                let (lo, hi) = config.tree_height;
                let height = rng.random_range(lo..hi);
                self.trees.push(Tree {
                    x: config.viewport_width,
                    height,
                    width: height * config.tree_aspect_ratio,
                });
            }
            self.redraw_target(rng, config);
        }
    }

    /// Distance from the right edge to the last spawned tree must be at
    /// least half the viewport width.
    fn spacing_allows_spawn(&self, config: &RunnerConfig) -> bool {
        match self.trees.last() {
            None => true,
            Some(last) => config.viewport_width - last.x >= config.viewport_width / 2.0,
        }
    }
}
