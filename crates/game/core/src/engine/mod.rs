//! Turn resolution.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. A turn runs in a
//! fixed order:
//!
//! 1. validate the movement vector (rejections happen before any mutation)
//! 2. ignore the request if the session already finished
//! 3. hero phase (living hero only): move, bump-attack, or stay blocked
//! 4. enemy phase: living enemies act in priority order until the hero dies
//! 5. recompute the outcome (game-over beats victory)
//! 6. increment the level counter and re-check occupancy invariants

mod errors;
mod report;
mod resolution;

pub use errors::TurnError;
pub use report::{TurnEvent, TurnOutcome, TurnReport};

use crate::ai::{EnemyIntent, EnemyPolicy, PolicyContext};
use crate::state::{CharacterId, GameState, MovementVector, Outcome};

/// Mutating view over a [`GameState`] for the duration of one operation.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one full turn: the hero's move followed by every living
    /// enemy's reaction.
    ///
    /// A movement vector other than a unit step or `{0, 0}` is rejected with
    /// [`TurnError::InvalidMovementVector`] and leaves the state untouched. On
    /// a finished session the call returns [`TurnOutcome::Ignored`] without
    /// touching anything, level counter included.
    pub fn advance_turn(
        &mut self,
        movement: MovementVector,
        policy: &dyn EnemyPolicy,
    ) -> Result<TurnOutcome, TurnError> {
        let step = movement
            .direction()
            .ok_or(TurnError::InvalidMovementVector {
                d_row: movement.d_row,
                d_col: movement.d_col,
            })?;

        if self.state.is_terminal() {
            return Ok(TurnOutcome::Ignored(self.state.outcome()));
        }

        let mut events = Vec::new();

        if let (Some(direction), true) = (step, self.state.hero().is_alive()) {
            self.resolve_hero(direction, &mut events)?;
        }
        self.resolve_enemies(policy, &mut events)?;

        let outcome = self.refresh_outcome();
        self.state.advance_level();
        self.state.validate()?;

        Ok(TurnOutcome::Resolved(TurnReport {
            level: self.state.level(),
            outcome,
            events,
        }))
    }

    /// Kills the hero and ends the session in [`Outcome::GameOver`].
    ///
    /// Returns `false` without changes if the session had already finished.
    pub fn force_game_over(&mut self) -> Result<bool, TurnError> {
        if self.state.is_terminal() {
            return Ok(false);
        }

        self.kill(CharacterId::HERO)?;
        self.state.set_outcome(Outcome::GameOver);
        self.state.validate()?;
        Ok(true)
    }

    /// Kills every enemy and ends the session in [`Outcome::Victory`].
    ///
    /// The priority order is rebuilt afterwards. Returns `false` without
    /// changes if the session had already finished.
    pub fn force_victory(&mut self) -> Result<bool, TurnError> {
        if self.state.is_terminal() {
            return Ok(false);
        }

        let living: Vec<CharacterId> = self
            .state
            .enemies()
            .filter(|enemy| enemy.is_alive())
            .map(|enemy| enemy.id())
            .collect();
        for id in living {
            self.kill(id)?;
        }

        self.state.canonicalize();
        self.state.set_outcome(Outcome::Victory);
        self.state.validate()?;
        Ok(true)
    }

    fn resolve_enemies(
        &mut self,
        policy: &dyn EnemyPolicy,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), TurnError> {
        let order: Vec<CharacterId> = self
            .state
            .turn_order()
            .iter()
            .copied()
            .filter(|id| !id.is_hero())
            .collect();

        for id in order {
            if !self.state.hero().is_alive() {
                break;
            }

            let enemy = self
                .state
                .character(id)
                .ok_or(TurnError::UnknownCharacter(id))?;
            if !enemy.is_alive() {
                continue;
            }

            let intent = policy.decide(&PolicyContext::new(self.state, enemy));
            match intent {
                EnemyIntent::Hold => {}
                EnemyIntent::Step(direction) => self.resolve_enemy_step(id, direction, events)?,
            }
        }

        Ok(())
    }

    fn kill(&mut self, id: CharacterId) -> Result<(), TurnError> {
        let character = self
            .state
            .character_mut(id)
            .ok_or(TurnError::UnknownCharacter(id))?;
        if !character.is_alive() {
            return Ok(());
        }

        let position = character.position();
        character.kill();
        self.state.map_mut().vacate(position, id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChasePolicy;
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{
        CardinalDirection, CellKind, CharacterSpec, CharacterStats, EnemyKind, GridMap, Position,
    };

    fn always_hold(_: &PolicyContext<'_>) -> EnemyIntent {
        EnemyIntent::Hold
    }

    fn always_left(_: &PolicyContext<'_>) -> EnemyIntent {
        EnemyIntent::Step(CardinalDirection::Left)
    }

    fn hero(row: i32, col: i32, stats: CharacterStats) -> CharacterSpec {
        CharacterSpec::hero(Position::new(row, col), stats)
    }

    fn enemy(row: i32, col: i32, stats: CharacterStats) -> CharacterSpec {
        CharacterSpec::enemy(EnemyKind::Manu, Position::new(row, col), stats)
    }

    fn open_state(specs: impl IntoIterator<Item = CharacterSpec>) -> GameState {
        GameState::new(GridMap::filled(3, 3, CellKind::Floor), specs).unwrap()
    }

    #[test]
    fn hero_moves_then_enemy_attacks() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 3, 5)),
            enemy(0, 2, CharacterStats::new(10, 2, 3)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::RIGHT, &ChasePolicy::new(6, 0))
            .unwrap();

        let report = outcome.report().unwrap();
        assert_eq!(report.level, 1);
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(state.hero().position(), Position::new(1, 2));
        assert_eq!(state.hero().vitality(), 8);
        assert_eq!(
            report.events,
            vec![
                TurnEvent::Moved {
                    character: CharacterId::HERO,
                    from: Position::new(1, 1),
                    to: Position::new(1, 2),
                },
                TurnEvent::Attacked {
                    attacker: CharacterId(1),
                    defender: CharacterId::HERO,
                    damage: 2,
                    remaining: 8,
                },
            ]
        );
    }

    #[test]
    fn wall_blocks_but_consumes_the_turn() {
        let mut map = GridMap::filled(3, 3, CellKind::Floor);
        map.set_kind(Position::new(1, 2), CellKind::Wall).unwrap();
        let mut state = GameState::new(
            map,
            [
                hero(1, 1, CharacterStats::new(10, 3, 5)),
                enemy(2, 0, CharacterStats::new(5, 1, 1)),
            ],
        )
        .unwrap();

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::RIGHT, &always_hold)
            .unwrap();

        assert!(outcome.is_resolved());
        assert_eq!(state.hero().position(), Position::new(1, 1));
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn off_grid_step_is_blocked() {
        let mut state = open_state([
            hero(0, 0, CharacterStats::new(10, 3, 5)),
            enemy(2, 2, CharacterStats::new(5, 1, 1)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::UP, &always_hold)
            .unwrap();

        assert_eq!(
            outcome.report().unwrap().events,
            vec![TurnEvent::Blocked {
                character: CharacterId::HERO,
                target: Position::new(-1, 0),
            }]
        );
        assert_eq!(state.hero().position(), Position::ORIGIN);
    }

    #[test]
    fn bump_attack_kills_and_frees_the_cell() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 5, 5)),
            enemy(1, 2, CharacterStats::new(5, 1, 1)),
            enemy(2, 2, CharacterStats::new(5, 1, 1)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::RIGHT, &always_hold)
            .unwrap();

        let report = outcome.report().unwrap();
        assert!(report.events.contains(&TurnEvent::Died {
            character: CharacterId(1),
            position: Position::new(1, 2),
        }));
        assert_eq!(state.hero().position(), Position::new(1, 1));
        assert_eq!(state.map().occupant_at(Position::new(1, 2)), Ok(None));
        assert_eq!(state.character_count(), 3);
        assert_eq!(report.outcome, Outcome::InProgress);
    }

    #[test]
    fn killing_the_last_enemy_is_victory() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 5, 5)),
            enemy(1, 0, CharacterStats::new(5, 1, 1)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::LEFT, &always_hold)
            .unwrap();

        assert_eq!(outcome.report().unwrap().outcome, Outcome::Victory);
        assert!(state.is_victory());
    }

    #[test]
    fn hero_death_stops_the_enemy_phase_and_freezes_the_session() {
        // Both enemies sit right of the hero; the first blow is lethal.
        let mut state = open_state([
            hero(1, 0, CharacterStats::new(2, 1, 1)),
            enemy(1, 1, CharacterStats::new(5, 5, 9)),
            enemy(0, 0, CharacterStats::new(5, 5, 8)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::STAY, &always_left)
            .unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.outcome, Outcome::GameOver);
        assert_eq!(
            report
                .events
                .iter()
                .filter(|event| matches!(event, TurnEvent::Attacked { .. }))
                .count(),
            1
        );
        assert_eq!(state.map().occupant_at(Position::new(1, 0)), Ok(None));

        let snapshot = state.clone();
        let ignored = GameEngine::new(&mut state)
            .advance_turn(MovementVector::RIGHT, &always_left)
            .unwrap();
        assert_eq!(ignored, TurnOutcome::Ignored(Outcome::GameOver));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn invalid_vector_is_rejected_without_mutation() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 3, 5)),
            enemy(0, 0, CharacterStats::new(5, 1, 1)),
        ]);
        let snapshot = state.clone();

        let error = GameEngine::new(&mut state)
            .advance_turn(MovementVector::new(1, 1), &always_hold)
            .unwrap_err();

        assert_eq!(
            error,
            TurnError::InvalidMovementVector { d_row: 1, d_col: 1 }
        );
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn null_vector_lets_enemies_act() {
        let mut state = open_state([
            hero(0, 0, CharacterStats::new(10, 3, 5)),
            enemy(2, 2, CharacterStats::new(5, 1, 1)),
        ]);

        GameEngine::new(&mut state)
            .advance_turn(MovementVector::STAY, &always_left)
            .unwrap();

        assert_eq!(state.hero().position(), Position::ORIGIN);
        assert_eq!(
            state.character(CharacterId(1)).unwrap().position(),
            Position::new(2, 1)
        );
    }

    #[test]
    fn game_over_takes_priority_over_victory() {
        let mut both_dead = open_state([
            hero(0, 0, CharacterStats::new(0, 1, 1)),
            enemy(2, 2, CharacterStats::new(0, 1, 1)),
        ]);
        let outcome = GameEngine::new(&mut both_dead)
            .advance_turn(MovementVector::STAY, &always_hold)
            .unwrap();
        assert_eq!(outcome.report().unwrap().outcome, Outcome::GameOver);
    }

    #[test]
    fn force_game_over_clears_the_hero() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 3, 5)),
            enemy(0, 0, CharacterStats::new(5, 1, 1)),
        ]);

        let mut engine = GameEngine::new(&mut state);
        assert!(engine.force_game_over().unwrap());
        assert!(!engine.force_game_over().unwrap());
        assert!(!engine.force_victory().unwrap());

        assert!(state.is_game_over());
        assert!(!state.hero().is_alive());
        assert_eq!(state.map().occupant_at(Position::new(1, 1)), Ok(None));
        assert_eq!(state.level(), 0);
    }

    #[test]
    fn force_victory_kills_every_enemy() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 3, 5)),
            enemy(0, 0, CharacterStats::new(5, 1, 1)),
            enemy(2, 2, CharacterStats::new(5, 1, 7)),
        ]);

        assert!(GameEngine::new(&mut state).force_victory().unwrap());

        assert!(state.is_victory());
        assert!(state.enemies().all(|enemy| !enemy.is_alive()));
        assert_eq!(state.character_count(), 3);
        assert_eq!(
            state.map().cells().filter(|(_, cell)| cell.is_occupied()).count(),
            1
        );
        assert_eq!(state.turn_order()[0], CharacterId(2));
    }

    #[test]
    fn dead_hero_does_not_move() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(0, 5, 5)),
            enemy(1, 2, CharacterStats::new(5, 1, 1)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::UP, &always_hold)
            .unwrap();

        let report = outcome.report().unwrap();
        assert!(report.events.is_empty());
        assert_eq!(report.outcome, Outcome::GameOver);
        assert_eq!(state.map().occupant_at(Position::new(0, 1)), Ok(None));
        assert_eq!(state.hero().position(), Position::new(1, 1));
    }

    #[test]
    fn dead_hero_cannot_bump_attack() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(0, 5, 5)),
            enemy(1, 2, CharacterStats::new(5, 1, 1)),
        ]);

        let outcome = GameEngine::new(&mut state)
            .advance_turn(MovementVector::RIGHT, &always_hold)
            .unwrap();

        assert!(outcome.report().unwrap().events.is_empty());
        let survivor = state.character(CharacterId(1)).unwrap();
        assert!(survivor.is_alive());
        assert_eq!(survivor.vitality(), 5);
    }

    #[test]
    fn dead_attacker_deals_no_damage() {
        let mut state = open_state([
            hero(1, 1, CharacterStats::new(10, 3, 5)),
            enemy(1, 2, CharacterStats::new(0, 4, 1)),
        ]);
        let mut events = Vec::new();

        GameEngine::new(&mut state)
            .strike(CharacterId(1), CharacterId::HERO, &mut events)
            .unwrap();

        assert!(events.is_empty());
        assert_eq!(state.hero().vitality(), 10);
    }
}
