//! Authoritative game state representation.
//!
//! This module owns the grid, the character roster, the level counter and the
//! terminal outcome. Callers read it freely but mutate it exclusively through
//! the engine.
pub mod error;
pub mod types;

use std::cmp::Reverse;

pub use error::{MapError, StateError};
pub use types::{
    CardinalDirection, Cell, CellKind, Character, CharacterId, CharacterKind, CharacterSpec,
    CharacterStats, EnemyKind, GridMap, MapDimensions, MovementVector, Position,
};

/// Terminal status of a session. Game-over and victory are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[default]
    InProgress,
    GameOver,
    Victory,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Canonical snapshot of one game: map, characters, level and outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    map: GridMap,
    hero: Character,
    /// Enemies in id order (ids 1..).
    enemies: Vec<Character>,
    /// Every character id in priority order: speed descending, then id.
    turn_order: Vec<CharacterId>,
    /// Number of turns resolved so far.
    level: u64,
    outcome: Outcome,
}

impl GameState {
    /// Builds a state from a map and a roster of blueprints.
    ///
    /// The hero receives [`CharacterId::HERO`]; enemies are numbered from 1 in
    /// the order given. Living characters are placed on the map; characters
    /// that start dead are kept in the roster but hold no cell.
    pub fn new(
        mut map: GridMap,
        roster: impl IntoIterator<Item = CharacterSpec>,
    ) -> Result<Self, StateError> {
        let mut heroes = Vec::new();
        let mut enemies = Vec::new();

        for spec in roster {
            match spec.kind {
                CharacterKind::Hero => heroes.push(Character::new(
                    CharacterId::HERO,
                    spec.kind,
                    spec.position,
                    spec.stats,
                )),
                CharacterKind::Enemy(_) => {
                    let id = CharacterId(enemies.len() as u32 + 1);
                    enemies.push(Character::new(id, spec.kind, spec.position, spec.stats));
                }
            }
        }

        if heroes.len() > 1 {
            return Err(StateError::MultipleHeroes {
                count: heroes.len(),
            });
        }
        let hero = heroes.pop().ok_or(StateError::MissingHero)?;

        for character in std::iter::once(&hero).chain(enemies.iter()) {
            if !character.is_alive() {
                continue;
            }
            map.place(character.position(), character.id())
                .map_err(|source| StateError::Placement {
                    character: character.id(),
                    position: character.position(),
                    source,
                })?;
        }

        let mut state = Self {
            map,
            hero,
            enemies,
            turn_order: Vec::new(),
            level: 0,
            outcome: Outcome::InProgress,
        };
        state.canonicalize();

        Ok(state)
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn hero(&self) -> &Character {
        &self.hero
    }

    /// Returns a character by id (hero or enemy).
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        if id.is_hero() {
            return Some(&self.hero);
        }
        self.enemies.iter().find(|character| character.id() == id)
    }

    /// Iterates every character in priority order. The roster never shrinks,
    /// so dead characters are included.
    pub fn characters(&self) -> impl Iterator<Item = &Character> + '_ {
        self.turn_order.iter().filter_map(|&id| self.character(id))
    }

    /// Iterates enemies in priority order.
    pub fn enemies(&self) -> impl Iterator<Item = &Character> + '_ {
        self.characters().filter(|character| !character.is_hero())
    }

    pub fn turn_order(&self) -> &[CharacterId] {
        &self.turn_order
    }

    pub fn character_count(&self) -> usize {
        1 + self.enemies.len()
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome == Outcome::GameOver
    }

    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::Victory
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Determines whether a cell can be entered: floor and unoccupied.
    pub fn can_enter(&self, position: Position) -> bool {
        self.map.is_enterable(position)
    }

    /// Re-sorts the priority order: speed descending, ties by id.
    pub fn canonicalize(&mut self) {
        let mut order: Vec<(u32, CharacterId)> = std::iter::once(&self.hero)
            .chain(self.enemies.iter())
            .map(|character| (character.speed(), character.id()))
            .collect();
        order.sort_by_key(|&(speed, id)| (Reverse(speed), id));
        self.turn_order = order.into_iter().map(|(_, id)| id).collect();
    }

    /// Checks the occupancy invariants.
    ///
    /// - no wall has an occupant
    /// - every occupant is a living character standing on that cell
    /// - every living character is referenced by the cell at its position
    pub fn validate(&self) -> Result<(), StateError> {
        for (position, cell) in self.map.cells() {
            let Some(occupant) = cell.occupant() else {
                continue;
            };
            if cell.is_wall() {
                return Err(StateError::OccupiedWall { position, occupant });
            }
            let standing_here = self
                .character(occupant)
                .is_some_and(|character| character.is_alive() && character.position() == position);
            if !standing_here {
                return Err(StateError::StaleOccupant { position, occupant });
            }
        }

        for character in self.characters().filter(|character| character.is_alive()) {
            let position = character.position();
            if self.map.occupant_at(position) != Ok(Some(character.id())) {
                return Err(StateError::MissingOccupant {
                    character: character.id(),
                    position,
                });
            }
        }

        Ok(())
    }
}

// Engine-facing mutators. Everything outside the crate goes through `GameEngine`.
impl GameState {
    pub(crate) fn map_mut(&mut self) -> &mut GridMap {
        &mut self.map
    }

    pub(crate) fn hero_mut(&mut self) -> &mut Character {
        &mut self.hero
    }

    pub(crate) fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        if id.is_hero() {
            return Some(&mut self.hero);
        }
        self.enemies.iter_mut().find(|character| character.id() == id)
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    pub(crate) fn advance_level(&mut self) {
        self.level += 1;
    }
}
