//! Content factory for building a starting scenario from data files.

use std::path::{Path, PathBuf};

use game_core::{CharacterSpec, GameConfig, GameState, GridMap};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, RosterLoader};

/// Everything needed to start a session: the validated initial state and
/// the tunables that go with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub state: GameState,
    pub config: GameConfig,
}

impl Scenario {
    /// Builds a scenario from an already-parsed map and roster.
    pub fn assemble(
        map: GridMap,
        roster: Vec<CharacterSpec>,
        config: GameConfig,
    ) -> LoadResult<Self> {
        let state = GameState::new(map, roster)
            .map_err(|e| anyhow::anyhow!("Invalid scenario: {}", e))?;

        Ok(Self { state, config })
    }
}

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── map.ron
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const MAP_FILE: &'static str = "map.ron";
    pub const ROSTER_FILE: &'static str = "roster.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the map layout from `map.ron`.
    pub fn load_map(&self) -> LoadResult<GridMap> {
        MapLoader::load(&self.data_dir.join(Self::MAP_FILE))
    }

    /// Load the character roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<CharacterSpec>> {
        RosterLoader::load(&self.data_dir.join(Self::ROSTER_FILE))
    }

    /// Load map, roster and config and validate them together.
    pub fn load_scenario(&self) -> LoadResult<Scenario> {
        Scenario::assemble(self.load_map()?, self.load_roster()?, self.load_config()?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CharacterId, Position};

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_scenario_without_config() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "map.ron", r#"(rows: ["...", "...", "..."])"#);
        write(
            dir.path(),
            "roster.ron",
            r#"[
                (kind: Hero, position: (row: 1, col: 1), stats: (vitality: 10, attack: 3, speed: 5)),
                (kind: Enemy(Manu), position: (row: 0, col: 0), stats: (vitality: 5, attack: 2, speed: 3)),
            ]"#,
        );

        let scenario = ContentFactory::new(dir.path()).load_scenario().unwrap();

        assert_eq!(scenario.config, GameConfig::default());
        assert_eq!(scenario.state.character_count(), 2);
        assert_eq!(
            scenario.state.map().occupant_at(Position::new(0, 0)),
            Ok(Some(CharacterId(1)))
        );
    }

    #[test]
    fn reads_config_when_present() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "map.ron", r#"(rows: [".."])"#);
        write(
            dir.path(),
            "roster.ron",
            "[(kind: Hero, position: (row: 0, col: 0), stats: (vitality: 10, attack: 3, speed: 5))]",
        );
        write(dir.path(), "config.toml", "seed = 42\nperception_radius = 2\n");

        let scenario = ContentFactory::new(dir.path()).load_scenario().unwrap();
        assert_eq!(scenario.config, GameConfig::new().with_seed(42).with_perception_radius(2));
    }

    #[test]
    fn rejects_characters_on_walls() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "map.ron", r##"(rows: ["#."])"##);
        write(
            dir.path(),
            "roster.ron",
            "[(kind: Hero, position: (row: 0, col: 0), stats: (vitality: 10, attack: 3, speed: 5))]",
        );

        let error = ContentFactory::new(dir.path()).load_scenario().unwrap_err();
        assert!(error.to_string().contains("Invalid scenario"));
    }

    #[test]
    fn missing_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = ContentFactory::new(dir.path()).load_map().unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }
}
