//! Towerdash runner simulation.
//!
//! A deterministic, headless side-scroller: the character auto-runs at a
//! fixed x while towers of blocks scroll in from the right. The whole world
//! advances through [`session::GameSession::tick`] with an explicit clock
//! and a seeded RNG, so every behavior here is reproducible in tests.

pub mod attack;
pub mod collision;
pub mod config;
pub mod decor;
pub mod kinematics;
pub mod obstacles;
pub mod session;
pub mod sprite;

pub use config::RunnerConfig;
pub use kinematics::Character;
pub use obstacles::{Obstacle, ObstacleStream};
pub use session::{GameSession, Phase, SessionEvent};
