use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use towerdash_core::difficulty::Difficulty;

use crate::attack;
use crate::collision;
use crate::config::RunnerConfig;
use crate::decor::DecorStream;
use crate::kinematics::Character;
use crate::obstacles::ObstacleStream;

/// Session phase. Transitions outside the table below are no-ops.
///
/// ```text
/// Start ──start──▶ Playing ──lives=0──▶ GameOverAnimating ──timer──▶ GameOver
///   ▲                 │quit                    │quit                    │
///   └────to_menu──────┴───────────────────────▶└───────▶ GameOver ◀─────┘
/// GameOver ──start──▶ Playing (same reset path as Start)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Playing,
    GameOverAnimating,
    GameOver,
}

impl Phase {
    /// Total display mapping; keeps the match exhaustive when variants move.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Playing => "playing",
            Phase::GameOverAnimating => "game-over-animating",
            Phase::GameOver => "game-over",
        }
    }
}

/// Events emitted by a tick, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    LifeLost { remaining: u8 },
    ScoreChanged { score: u32 },
    RunEnded { score: u32 },
}

/// One player's run: an explicit value advanced by `tick`, with no hidden
/// globals, so the whole simulation is unit-testable headless.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: RunnerConfig,
    difficulty: Difficulty,
    phase: Phase,
    score: u32,
    lives: u8,
    character: Character,
    obstacles: ObstacleStream,
    decor: DecorStream,
    /// Global damage gate; clears only on a tick with zero overlap.
    in_collision: bool,
    death_started_ms: Option<u64>,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: RunnerConfig, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let character = Character::new(&config);
        let obstacles = ObstacleStream::new(difficulty.base_spacing());
        let decor = DecorStream::new(&mut rng, &config);
        Self {
            lives: config.starting_lives,
            config,
            difficulty,
            phase: Phase::Start,
            score: 0,
            character,
            obstacles,
            decor,
            in_collision: false,
            death_started_ms: None,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        &self.obstacles
    }

    pub fn decor(&self) -> &DecorStream {
        &self.decor
    }

    /// Reinitialize every mutable field for a fresh run.
    fn reset(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.character = Character::new(&self.config);
        self.obstacles = ObstacleStream::new(self.difficulty.base_spacing());
        self.decor = DecorStream::new(&mut self.rng, &self.config);
        self.in_collision = false;
        self.death_started_ms = None;
    }

    /// Start (from the menu) or restart (after a run): resets and plays.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Start | Phase::GameOver => {
                self.reset();
                self.phase = Phase::Playing;
            },
            Phase::Playing | Phase::GameOverAnimating => {},
        }
    }

    /// Abandon the run, skipping any remaining death animation.
    pub fn quit(&mut self) {
        match self.phase {
            Phase::Playing | Phase::GameOverAnimating => {
                self.phase = Phase::GameOver;
            },
            Phase::Start | Phase::GameOver => {},
        }
    }

    /// Return to the menu after a finished run.
    pub fn to_menu(&mut self) {
        if self.phase == Phase::GameOver {
            self.phase = Phase::Start;
        }
    }

    /// Cycle difficulty with wraparound; only meaningful on the menu.
    pub fn cycle_difficulty(&mut self) {
        if self.phase == Phase::Start {
            self.difficulty = self.difficulty.cycle();
        }
    }

    /// Jump or double jump; out-of-band input, only while playing.
    pub fn jump(&mut self) {
        if self.phase == Phase::Playing {
            self.character.jump(&self.config);
        }
    }

    /// Attack the nearest qualifying tower; only while playing.
    pub fn attack(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        attack::attack(
            &mut self.obstacles.obstacles,
            &mut self.character,
            now_ms,
            &self.config,
        )
    }

    /// Advance one tick. Stage order is fixed: kinematics, obstacle
    /// spawning/movement, decoration, collision/damage, then
    /// retirement/scoring. Later stages observe this tick's positions.
    pub fn tick(&mut self, now_ms: u64) -> Vec<SessionEvent> {
        match self.phase {
            Phase::Playing => self.tick_playing(now_ms),
            Phase::GameOverAnimating => {
                if self.death_animation_progress(now_ms) >= 1.0 {
                    self.phase = Phase::GameOver;
                }
                Vec::new()
            },
            Phase::Start | Phase::GameOver => Vec::new(),
        }
    }

    fn tick_playing(&mut self, now_ms: u64) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        self.character.integrate(&self.config);
        self.obstacles.tick(&mut self.rng, &self.config);
        self.decor.tick(&mut self.rng, &self.config);

        let outcome = collision::resolve_damage(
            &mut self.obstacles.obstacles,
            &self.character,
            &mut self.in_collision,
            now_ms,
            &self.config,
        );
        if outcome.life_lost {
            self.lives = self.lives.saturating_sub(1);
            events.push(SessionEvent::LifeLost {
                remaining: self.lives,
            });
            if self.lives == 0 {
                self.phase = Phase::GameOverAnimating;
                self.death_started_ms = Some(now_ms);
                events.push(SessionEvent::RunEnded { score: self.score });
            }
        }

        let scored = self.obstacles.retire_offscreen(&self.config);
        if scored > 0 {
            self.score += scored;
            events.push(SessionEvent::ScoreChanged { score: self.score });
        }

        events
    }

    /// Death animation progress in [0, 1] (elapsed-time based).
    pub fn death_animation_progress(&self, now_ms: u64) -> f32 {
        match self.death_started_ms {
            None => 0.0,
            Some(started) => {
                let elapsed = now_ms.saturating_sub(started) as f32;
                (elapsed / self.config.death_animation_ms as f32).min(1.0)
            },
        }
    }

    /// Character rotation for the death animation: 0→180° over the window,
    /// pinned at 180° once in GameOver.
    pub fn death_rotation_deg(&self, now_ms: u64) -> f32 {
        match self.phase {
            Phase::GameOverAnimating => 180.0 * self.death_animation_progress(now_ms),
            Phase::GameOver if self.death_started_ms.is_some() => 180.0,
            _ => 0.0,
        }
    }
}
