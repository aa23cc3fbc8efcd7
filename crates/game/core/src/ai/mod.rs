//! Enemy decision-making.
//!
//! The engine asks an [`EnemyPolicy`] what each living enemy wants to do, then
//! enforces the rules itself: an intent is at most one cell, and a step that
//! would break occupancy turns into a hold. Policies only ever see a read-only
//! view of the state.
mod chase;

pub use chase::ChasePolicy;

use crate::state::{CardinalDirection, Character, GameState, Position};

/// What an enemy wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyIntent {
    /// Stay in place.
    Hold,
    /// Move one cell; stepping into the hero's cell is an attack.
    Step(CardinalDirection),
}

/// Read-only view handed to a policy for one enemy's decision.
#[derive(Clone, Copy, Debug)]
pub struct PolicyContext<'a> {
    pub state: &'a GameState,
    pub enemy: &'a Character,
}

impl<'a> PolicyContext<'a> {
    pub fn new(state: &'a GameState, enemy: &'a Character) -> Self {
        Self { state, enemy }
    }

    pub fn hero(&self) -> &'a Character {
        self.state.hero()
    }

    /// Manhattan distance from the enemy to the hero.
    pub fn distance_to_hero(&self) -> u32 {
        self.enemy.position().distance(self.hero().position())
    }

    /// True if the enemy could act by stepping in `direction`: the target is
    /// an empty floor cell or the living hero.
    pub fn can_step(&self, direction: CardinalDirection) -> bool {
        let target = self.enemy.position().step(direction);
        self.is_hero_cell(target) || self.state.can_enter(target)
    }

    fn is_hero_cell(&self, position: Position) -> bool {
        let hero = self.hero();
        hero.is_alive() && hero.position() == position
    }
}

/// Strategy deciding enemy actions.
///
/// Implementations must be deterministic for a given state so sessions replay
/// identically.
pub trait EnemyPolicy: Send + Sync {
    fn decide(&self, ctx: &PolicyContext<'_>) -> EnemyIntent;
}

/// Policy that never moves. Useful as a fixture.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdlePolicy;

impl EnemyPolicy for IdlePolicy {
    fn decide(&self, _ctx: &PolicyContext<'_>) -> EnemyIntent {
        EnemyIntent::Hold
    }
}

impl<F> EnemyPolicy for F
where
    F: Fn(&PolicyContext<'_>) -> EnemyIntent + Send + Sync,
{
    fn decide(&self, ctx: &PolicyContext<'_>) -> EnemyIntent {
        self(ctx)
    }
}
