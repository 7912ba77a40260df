use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Game difficulty. Controls the base spacing between spawned obstacle
/// towers; also scopes the leaderboard (one ranking per difficulty).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in cycle order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Base obstacle spacing in ticks. The actual spacing is re-randomized
    /// per spawn as `round(base * uniform(0.5, 1.5))`.
    pub fn base_spacing(self) -> u32 {
        match self {
            Difficulty::Easy => 300,
            Difficulty::Medium => 200,
            Difficulty::Hard => 120,
        }
    }

    /// Next difficulty, wrapping Hard back to Easy.
    pub fn cycle(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(InvalidDifficulty(other.to_string())),
        }
    }
}

/// Error for an unrecognized difficulty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDifficulty(pub String);

impl std::fmt::Display for InvalidDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid difficulty: {:?} (expected easy|medium|hard)", self.0)
    }
}

impl std::error::Error for InvalidDifficulty {}
