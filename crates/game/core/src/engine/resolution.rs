//! Movement and combat primitives shared by the hero and enemy phases.

use crate::state::{CardinalDirection, CharacterId, Outcome, Position};

use super::{GameEngine, TurnError, TurnEvent};

impl<'a> GameEngine<'a> {
    /// Hero phase: move, bump-attack an enemy, or stay blocked.
    pub(super) fn resolve_hero(
        &mut self,
        direction: CardinalDirection,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), TurnError> {
        let hero = CharacterId::HERO;
        let origin = self.state.hero().position();
        let target = origin.step(direction);

        let Ok(cell) = self.state.map().cell_at(target) else {
            events.push(TurnEvent::Blocked {
                character: hero,
                target,
            });
            return Ok(());
        };

        if cell.is_wall() {
            events.push(TurnEvent::Blocked {
                character: hero,
                target,
            });
            return Ok(());
        }

        match cell.occupant() {
            Some(defender) if defender != hero => self.strike(hero, defender, events),
            _ => self.relocate(hero, origin, target, events),
        }
    }

    /// Enemy step: attack the hero if that is where it leads, otherwise move
    /// into an empty floor cell or hold.
    pub(super) fn resolve_enemy_step(
        &mut self,
        enemy: CharacterId,
        direction: CardinalDirection,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), TurnError> {
        let origin = self
            .state
            .character(enemy)
            .ok_or(TurnError::UnknownCharacter(enemy))?
            .position();
        let target = origin.step(direction);

        let hero = self.state.hero();
        if hero.is_alive() && hero.position() == target {
            return self.strike(enemy, CharacterId::HERO, events);
        }

        if self.state.can_enter(target) {
            self.relocate(enemy, origin, target, events)
        } else {
            events.push(TurnEvent::Blocked {
                character: enemy,
                target,
            });
            Ok(())
        }
    }

    /// Deals the attacker's attack power to the defender. A killing blow
    /// clears the defender's cell. Dead attackers deal nothing.
    pub(super) fn strike(
        &mut self,
        attacker: CharacterId,
        defender: CharacterId,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), TurnError> {
        let source = self
            .state
            .character(attacker)
            .ok_or(TurnError::UnknownCharacter(attacker))?;
        if !source.is_alive() {
            return Ok(());
        }
        let damage = source.attack();

        let target = self
            .state
            .character_mut(defender)
            .ok_or(TurnError::UnknownCharacter(defender))?;
        if !target.is_alive() {
            return Ok(());
        }

        let remaining = target.apply_damage(damage);
        let position = target.position();

        events.push(TurnEvent::Attacked {
            attacker,
            defender,
            damage,
            remaining,
        });

        if remaining == 0 {
            self.state.map_mut().vacate(position, defender)?;
            events.push(TurnEvent::Died {
                character: defender,
                position,
            });
        }

        Ok(())
    }

    /// Moves a character between cells, keeping the occupancy map in sync.
    pub(super) fn relocate(
        &mut self,
        character: CharacterId,
        from: Position,
        to: Position,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), TurnError> {
        let map = self.state.map_mut();
        map.vacate(from, character)?;
        if let Err(error) = map.place(to, character) {
            // Rollback on failure
            map.place(from, character)?;
            return Err(error.into());
        }

        self.state
            .character_mut(character)
            .ok_or(TurnError::UnknownCharacter(character))?
            .position = to;

        events.push(TurnEvent::Moved {
            character,
            from,
            to,
        });
        Ok(())
    }

    /// Recomputes the outcome. Game-over takes priority over victory.
    pub(super) fn refresh_outcome(&mut self) -> Outcome {
        let outcome = if !self.state.hero().is_alive() {
            Outcome::GameOver
        } else if self.state.enemies().all(|enemy| !enemy.is_alive()) {
            Outcome::Victory
        } else {
            Outcome::InProgress
        };

        self.state.set_outcome(outcome);
        outcome
    }
}
