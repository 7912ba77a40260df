use serde::{Deserialize, Serialize};

/// A sprite with its alternate ("mad") variant bound at spawn time.
///
/// Each obstacle carries its own pair, so switching appearance after a hit
/// is a timestamp check rather than a lookup keyed on the asset path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpritePair {
    pub normal: String,
    pub alternate: String,
    /// Display width divided by display height.
    pub aspect_ratio: f32,
}

impl SpritePair {
    pub fn new(normal: &str, alternate: &str, aspect_ratio: f32) -> Self {
        Self {
            normal: normal.to_string(),
            alternate: alternate.to_string(),
            aspect_ratio,
        }
    }
}

/// The built-in tower sprite catalog. A spawn picks one of these or none;
/// towers without a sprite render as bare blocks.
pub fn tower_catalog() -> Vec<SpritePair> {
    vec![
        SpritePair::new("tower_totem.png", "tower_totem_mad.png", 0.45),
        SpritePair::new("tower_crate.png", "tower_crate_mad.png", 0.60),
        SpritePair::new("tower_pillar.png", "tower_pillar_mad.png", 0.35),
    ]
}
