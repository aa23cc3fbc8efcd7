/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Manhattan distance within which enemies notice and chase the hero.
    /// Enemies farther away wander instead.
    pub perception_radius: u32,

    /// Base seed for deterministic enemy wandering.
    pub seed: u64,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Upper end of the stat scale (vitality, attack, speed) used by content
    /// and presentation bars.
    pub const STAT_SCALE: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PERCEPTION_RADIUS: u32 = 6;
    pub const DEFAULT_SEED: u64 = 0x5eed;

    pub fn new() -> Self {
        Self {
            perception_radius: Self::DEFAULT_PERCEPTION_RADIUS,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_perception_radius(mut self, perception_radius: u32) -> Self {
        self.perception_radius = perception_radius;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
