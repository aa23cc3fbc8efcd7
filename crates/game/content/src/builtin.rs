//! Stock scenario compiled into the crate.
//!
//! Used when no content directory is configured. It goes through the same
//! loaders as file content.

use game_core::GameConfig;

use crate::loaders::{LoadResult, MapLoader, RosterLoader, Scenario};

pub const DEFAULT_MAP: &str = r############"(
    rows: [
        "###########",
        "#.........#",
        "#..#...#..#",
        "#..#...#..#",
        "#.........#",
        "#...###...#",
        "#.........#",
        "###########",
    ],
)"############;

pub const DEFAULT_ROSTER: &str = r#"[
    (kind: Hero,          position: (row: 1, col: 1), stats: (vitality: 10, attack: 4, speed: 6)),
    (kind: Enemy(Gabino), position: (row: 6, col: 9), stats: (vitality: 6,  attack: 2, speed: 3)),
    (kind: Enemy(Manu),   position: (row: 3, col: 5), stats: (vitality: 8,  attack: 3, speed: 2)),
    (kind: Enemy(Gloria), position: (row: 1, col: 9), stats: (vitality: 4,  attack: 2, speed: 8)),
]"#;

/// Builds the stock dungeon: one hero and three enemies.
pub fn default_scenario() -> LoadResult<Scenario> {
    Scenario::assemble(
        MapLoader::parse(DEFAULT_MAP)?,
        RosterLoader::parse(DEFAULT_ROSTER)?,
        GameConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CharacterId, EnemyKind};

    #[test]
    fn default_scenario_is_valid() {
        let scenario = default_scenario().unwrap();
        let state = &scenario.state;

        state.validate().unwrap();
        assert_eq!(state.character_count(), 4);
        assert_eq!(state.map().dimensions().rows, 8);
        assert_eq!(state.map().dimensions().cols, 11);

        let kinds: Vec<_> = [1, 2, 3]
            .into_iter()
            .filter_map(|id| state.character(CharacterId(id)))
            .filter_map(|enemy| enemy.enemy_kind())
            .collect();
        assert_eq!(kinds, vec![EnemyKind::Gabino, EnemyKind::Manu, EnemyKind::Gloria]);
    }
}
