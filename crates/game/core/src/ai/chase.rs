use crate::config::GameConfig;
use crate::rng::{PcgRng, compute_seed};
use crate::state::CardinalDirection;

use super::{EnemyIntent, EnemyPolicy, PolicyContext};

/// Default enemy behaviour: chase the hero when it is close, wander otherwise.
///
/// # Strategy
///
/// 1. Hero dead: hold.
/// 2. Hero within `perception_radius` (Manhattan): step along the axis with
///    the larger gap, falling back to the other axis when blocked. Stepping
///    into the hero's cell is the attack.
/// 3. Otherwise pick one of {hold, up, down, left, right} from a seed derived
///    from `(seed, level, enemy id)`. A blocked pick holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChasePolicy {
    perception_radius: u32,
    seed: u64,
}

impl ChasePolicy {
    pub fn new(perception_radius: u32, seed: u64) -> Self {
        Self {
            perception_radius,
            seed,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.perception_radius, config.seed)
    }

    fn chase(&self, ctx: &PolicyContext<'_>) -> EnemyIntent {
        let from = ctx.enemy.position();
        let to = ctx.hero().position();
        let d_row = to.row - from.row;
        let d_col = to.col - from.col;

        let vertical = match d_row.signum() {
            -1 => Some(CardinalDirection::Up),
            1 => Some(CardinalDirection::Down),
            _ => None,
        };
        let horizontal = match d_col.signum() {
            -1 => Some(CardinalDirection::Left),
            1 => Some(CardinalDirection::Right),
            _ => None,
        };

        // Close the larger gap first; ties go vertical.
        let candidates = if d_row.abs() >= d_col.abs() {
            [vertical, horizontal]
        } else {
            [horizontal, vertical]
        };

        candidates
            .into_iter()
            .flatten()
            .find(|&direction| ctx.can_step(direction))
            .map_or(EnemyIntent::Hold, EnemyIntent::Step)
    }

    fn wander(&self, ctx: &PolicyContext<'_>) -> EnemyIntent {
        let seed = compute_seed(self.seed, ctx.state.level(), ctx.enemy.id().0);
        let roll = PcgRng::below(seed, CardinalDirection::ALL.len() as u32 + 1) as usize;

        match CardinalDirection::ALL.get(roll) {
            Some(&direction) if ctx.can_step(direction) => EnemyIntent::Step(direction),
            _ => EnemyIntent::Hold,
        }
    }
}

impl Default for ChasePolicy {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl EnemyPolicy for ChasePolicy {
    fn decide(&self, ctx: &PolicyContext<'_>) -> EnemyIntent {
        if !ctx.hero().is_alive() {
            return EnemyIntent::Hold;
        }
        if ctx.distance_to_hero() <= self.perception_radius {
            self.chase(ctx)
        } else {
            self.wander(ctx)
        }
    }
}
