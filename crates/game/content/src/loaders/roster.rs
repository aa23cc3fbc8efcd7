//! Character roster loader.
//!
//! A roster is a RON list of [`CharacterSpec`] blueprints:
//!
//! ```text
//! [
//!     (kind: Hero, position: (row: 1, col: 1), stats: (vitality: 10, attack: 3, speed: 5)),
//!     (kind: Enemy(Gabino), position: (row: 3, col: 5), stats: (vitality: 6, attack: 2, speed: 4)),
//! ]
//! ```
//!
//! Ids are not part of the file; the state assigns them in list order.

use std::path::Path;

use game_core::{CharacterSpec, GameConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a roster from RON text.
    ///
    /// Stats must stay on the `0..=GameConfig::STAT_SCALE` scale.
    pub fn parse(content: &str) -> LoadResult<Vec<CharacterSpec>> {
        let roster: Vec<CharacterSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (index, spec) in roster.iter().enumerate() {
            let stats = spec.stats;
            let highest = stats.vitality.max(stats.attack).max(stats.speed);
            if highest > GameConfig::STAT_SCALE {
                anyhow::bail!(
                    "Roster entry {} has a stat of {} (scale is 0..={})",
                    index,
                    highest,
                    GameConfig::STAT_SCALE
                );
            }
        }

        Ok(roster)
    }
}
