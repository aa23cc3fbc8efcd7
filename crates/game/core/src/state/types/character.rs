use super::{CharacterId, Position};

/// Cosmetic enemy category. Presentation picks sprites from it; game logic
/// never branches on it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyKind {
    #[default]
    Gabino,
    Manu,
    Gloria,
}

/// Character variant tag. Matched exhaustively instead of inspecting types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterKind {
    /// The unique player-controlled character.
    Hero,
    /// A scripted opponent driven by the enemy policy.
    Enemy(EnemyKind),
}

impl CharacterKind {
    pub fn is_hero(self) -> bool {
        matches!(self, CharacterKind::Hero)
    }

    pub fn enemy_kind(self) -> Option<EnemyKind> {
        match self {
            CharacterKind::Hero => None,
            CharacterKind::Enemy(kind) => Some(kind),
        }
    }
}

/// Base attributes on the 0..=10 stat scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub vitality: u32,
    pub attack: u32,
    pub speed: u32,
}

impl CharacterStats {
    pub const fn new(vitality: u32, attack: u32, speed: u32) -> Self {
        Self {
            vitality,
            attack,
            speed,
        }
    }
}

/// Blueprint for a character at session setup (content files, tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSpec {
    pub kind: CharacterKind,
    pub position: Position,
    pub stats: CharacterStats,
}

impl CharacterSpec {
    pub const fn hero(position: Position, stats: CharacterStats) -> Self {
        Self {
            kind: CharacterKind::Hero,
            position,
            stats,
        }
    }

    pub const fn enemy(kind: EnemyKind, position: Position, stats: CharacterStats) -> Self {
        Self {
            kind: CharacterKind::Enemy(kind),
            position,
            stats,
        }
    }
}

/// A hero or enemy on the map.
///
/// Dead characters (vitality 0) stay in the roster for bookkeeping but take no
/// part in movement or combat and hold no cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    id: CharacterId,
    kind: CharacterKind,
    pub(crate) position: Position,
    vitality: u32,
    attack: u32,
    speed: u32,
}

impl Character {
    pub fn new(
        id: CharacterId,
        kind: CharacterKind,
        position: Position,
        stats: CharacterStats,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            vitality: stats.vitality,
            attack: stats.attack,
            speed: stats.speed,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn is_hero(&self) -> bool {
        self.kind.is_hero()
    }

    pub fn enemy_kind(&self) -> Option<EnemyKind> {
        self.kind.enemy_kind()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn vitality(&self) -> u32 {
        self.vitality
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn stats(&self) -> CharacterStats {
        CharacterStats::new(self.vitality, self.attack, self.speed)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.vitality > 0
    }

    /// Reduces vitality by `amount`, clamped at zero. Returns what is left.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.vitality = self.vitality.saturating_sub(amount);
        self.vitality
    }

    /// Drops vitality straight to zero. Used by the forcing operations.
    pub(crate) fn kill(&mut self) {
        self.vitality = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn goblin(vitality: u32) -> Character {
        Character::new(
            CharacterId(1),
            CharacterKind::Enemy(EnemyKind::Manu),
            Position::new(2, 3),
            CharacterStats::new(vitality, 2, 4),
        )
    }

    #[test]
    fn apply_damage_saturates_at_zero() {
        let mut enemy = goblin(5);

        assert_eq!(enemy.apply_damage(3), 2);
        assert!(enemy.is_alive());
        assert_eq!(enemy.apply_damage(10), 0);
        assert!(!enemy.is_alive());
        assert_eq!(enemy.apply_damage(1), 0);
    }

    #[test]
    fn zero_damage_never_raises_vitality() {
        let mut enemy = goblin(4);
        assert_eq!(enemy.apply_damage(0), 4);
    }

    #[test]
    fn kind_tag_drives_identity_queries() {
        let hero = Character::new(
            CharacterId::HERO,
            CharacterKind::Hero,
            Position::ORIGIN,
            CharacterStats::new(10, 3, 5),
        );
        let enemy = goblin(1);

        assert!(hero.is_hero());
        assert_eq!(hero.enemy_kind(), None);
        assert!(!enemy.is_hero());
        assert_eq!(enemy.enemy_kind(), Some(EnemyKind::Manu));
    }

    #[test]
    fn enemy_kind_names_round_trip_through_strum() {
        for kind in EnemyKind::iter() {
            assert_eq!(EnemyKind::from_str(kind.as_ref()), Ok(kind));
        }
        assert_eq!(EnemyKind::from_str("GLORIA"), Ok(EnemyKind::Gloria));
    }
}
