//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Settings that decide where a session's content comes from and which
/// tunables override it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `map.ron`, `roster.ron` and optionally
    /// `config.toml`. `None` selects the built-in scenario.
    pub content_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub perception_radius: Option<u32>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_CONTENT_DIR` - Content directory (default: built-in scenario)
    /// - `DUNGEON_SEED` - Seed for enemy wandering (default: from content)
    /// - `DUNGEON_PERCEPTION_RADIUS` - Enemy chase radius (default: from content)
    pub fn from_env() -> Self {
        Self {
            content_dir: env::var("DUNGEON_CONTENT_DIR").ok().map(PathBuf::from),
            seed: read_env::<u64>("DUNGEON_SEED"),
            perception_radius: read_env::<u32>("DUNGEON_PERCEPTION_RADIUS"),
        }
    }

    /// Applies the overrides on top of a content-provided config.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(radius) = self.perception_radius {
            config.perception_radius = radius;
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
