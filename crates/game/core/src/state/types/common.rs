use std::fmt;

/// Unique identifier for a character tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Reserved identifier for the player-controlled hero.
    pub const HERO: Self = Self(0);

    /// Returns true if this identifier belongs to the hero.
    #[inline]
    pub const fn is_hero(self) -> bool {
        self.0 == Self::HERO.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed as `(row, col)`.
///
/// Coordinates are signed so that a candidate step off the edge of the grid is
/// still representable; the map decides whether it exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step in `direction`.
    pub fn step(self, direction: CardinalDirection) -> Self {
        let (d_row, d_col) = direction.delta();
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Manhattan distance between two positions.
    pub fn distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid directions. Rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    /// Returns the `(d_row, d_col)` unit delta.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::Up => (-1, 0),
            CardinalDirection::Down => (1, 0),
            CardinalDirection::Left => (0, -1),
            CardinalDirection::Right => (0, 1),
        }
    }
}

impl From<CardinalDirection> for MovementVector {
    fn from(direction: CardinalDirection) -> Self {
        let (d_row, d_col) = direction.delta();
        Self { d_row, d_col }
    }
}

/// Raw movement delta handed in by the presentation layer.
///
/// Only the null vector and the four unit vectors are valid; anything else is
/// rejected by [`MovementVector::direction`] before a turn starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementVector {
    pub d_row: i32,
    pub d_col: i32,
}

impl MovementVector {
    pub const STAY: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(-1, 0);
    pub const DOWN: Self = Self::new(1, 0);
    pub const LEFT: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(0, 1);

    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Interprets the vector as "stay" (`Some(None)`) or a single step
    /// (`Some(Some(direction))`).
    ///
    /// Returns `None` when a component lies outside `{-1, 0, 1}` or both
    /// components are non-zero.
    pub fn direction(self) -> Option<Option<CardinalDirection>> {
        match (self.d_row, self.d_col) {
            (0, 0) => Some(None),
            (-1, 0) => Some(Some(CardinalDirection::Up)),
            (1, 0) => Some(Some(CardinalDirection::Down)),
            (0, -1) => Some(Some(CardinalDirection::Left)),
            (0, 1) => Some(Some(CardinalDirection::Right)),
            _ => None,
        }
    }
}

impl fmt::Display for MovementVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.d_row, self.d_col)
    }
}
