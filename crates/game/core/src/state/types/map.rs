use crate::state::MapError;

use super::{CharacterId, Position};

/// Fixed grid size for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl MapDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as u32) < self.rows
            && (position.col as u32) < self.cols
    }

    pub const fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Terrain class of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Floor,
    Wall,
}

impl CellKind {
    pub fn is_passable(self) -> bool {
        matches!(self, CellKind::Floor)
    }
}

/// A single grid cell: its terrain plus the character standing on it, if any.
///
/// A wall never has an occupant; [`GridMap::place`] refuses to put one there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    kind: CellKind,
    occupant: Option<CharacterId>,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            occupant: None,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn occupant(&self) -> Option<CharacterId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }
}

/// Row-major grid of cells with occupancy bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    dimensions: MapDimensions,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Creates a map where every cell has the same terrain.
    pub fn filled(rows: u32, cols: u32, kind: CellKind) -> Self {
        let dimensions = MapDimensions::new(rows, cols);
        Self {
            dimensions,
            cells: vec![Cell::new(kind); dimensions.area()],
        }
    }

    /// Builds a map from rows of terrain. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self, MapError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MapError::RaggedRow {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell::new));
        }

        Ok(Self {
            dimensions: MapDimensions::new(rows.len() as u32, cols as u32),
            cells,
        })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Returns the cell at `position`, or `OutOfBounds` outside the grid.
    pub fn cell_at(&self, position: Position) -> Result<&Cell, MapError> {
        let index = self.index(position)?;
        Ok(&self.cells[index])
    }

    /// Returns the character standing at `position`, if any.
    pub fn occupant_at(&self, position: Position) -> Result<Option<CharacterId>, MapError> {
        self.cell_at(position).map(Cell::occupant)
    }

    /// Changes the terrain of a cell. Walling over a character is refused.
    pub fn set_kind(&mut self, position: Position, kind: CellKind) -> Result<(), MapError> {
        let index = self.index(position)?;
        let cell = &mut self.cells[index];
        if let (CellKind::Wall, Some(occupant)) = (kind, cell.occupant) {
            return Err(MapError::Occupied { position, occupant });
        }
        cell.kind = kind;
        Ok(())
    }

    /// True iff the cell exists, is floor, and is empty or held by `mover`.
    pub fn is_passable(&self, position: Position, mover: CharacterId) -> bool {
        self.cell_at(position)
            .map(|cell| {
                cell.kind.is_passable() && cell.occupant.is_none_or(|occupant| occupant == mover)
            })
            .unwrap_or(false)
    }

    /// True iff the cell exists, is floor, and is empty.
    pub fn is_enterable(&self, position: Position) -> bool {
        self.cell_at(position)
            .map(|cell| cell.kind.is_passable() && !cell.is_occupied())
            .unwrap_or(false)
    }

    /// Records `character` as the occupant of `position`.
    ///
    /// Re-placing a character on the cell it already holds is a no-op.
    pub fn place(&mut self, position: Position, character: CharacterId) -> Result<(), MapError> {
        let index = self.index(position)?;
        let cell = &mut self.cells[index];

        if cell.is_wall() {
            return Err(MapError::Wall { position });
        }
        match cell.occupant {
            Some(occupant) if occupant != character => {
                Err(MapError::Occupied { position, occupant })
            }
            _ => {
                cell.occupant = Some(character);
                Ok(())
            }
        }
    }

    /// Clears `character` from `position`. Fails if someone else (or nobody) is there.
    pub fn vacate(&mut self, position: Position, character: CharacterId) -> Result<(), MapError> {
        let index = self.index(position)?;
        let cell = &mut self.cells[index];

        if cell.occupant != Some(character) {
            return Err(MapError::NotOccupant {
                position,
                character,
            });
        }
        cell.occupant = None;
        Ok(())
    }

    /// Iterates rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimensions.cols.max(1) as usize)
    }

    /// Iterates every cell together with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let cols = self.dimensions.cols.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let position = Position::new((index / cols) as i32, (index % cols) as i32);
            (position, cell)
        })
    }

    fn index(&self, position: Position) -> Result<usize, MapError> {
        if !self.dimensions.contains(position) {
            return Err(MapError::OutOfBounds {
                position,
                rows: self.dimensions.rows,
                cols: self.dimensions.cols,
            });
        }
        Ok(position.row as usize * self.dimensions.cols as usize + position.col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> GridMap {
        // # . . #
        let mut map = GridMap::filled(1, 4, CellKind::Floor);
        map.set_kind(Position::new(0, 0), CellKind::Wall).unwrap();
        map.set_kind(Position::new(0, 3), CellKind::Wall).unwrap();
        map
    }

    #[test]
    fn cell_at_rejects_coordinates_outside_grid() {
        let map = corridor();

        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(1, 0),
            Position::new(0, 4),
        ] {
            let result = map.cell_at(position);
            assert!(
                matches!(result, Err(MapError::OutOfBounds { position: p, rows: 1, cols: 4 }) if p == position),
                "expected OutOfBounds for {position}, got {result:?}"
            );
        }
    }

    #[test]
    fn passability_respects_walls_and_occupants() {
        let mut map = corridor();
        let hero = CharacterId::HERO;
        let enemy = CharacterId(1);

        assert!(!map.is_passable(Position::new(0, 0), hero));
        assert!(map.is_passable(Position::new(0, 1), hero));
        assert!(!map.is_passable(Position::new(0, 9), hero));

        map.place(Position::new(0, 1), hero).unwrap();
        assert!(map.is_passable(Position::new(0, 1), hero));
        assert!(!map.is_passable(Position::new(0, 1), enemy));
        assert!(!map.is_enterable(Position::new(0, 1)));
    }

    #[test]
    fn place_refuses_walls_and_foreign_occupants() {
        let mut map = corridor();

        assert_eq!(
            map.place(Position::new(0, 0), CharacterId::HERO),
            Err(MapError::Wall {
                position: Position::new(0, 0)
            })
        );

        map.place(Position::new(0, 2), CharacterId(1)).unwrap();
        assert_eq!(
            map.place(Position::new(0, 2), CharacterId(2)),
            Err(MapError::Occupied {
                position: Position::new(0, 2),
                occupant: CharacterId(1)
            })
        );
        // Same character again is fine.
        map.place(Position::new(0, 2), CharacterId(1)).unwrap();
    }

    #[test]
    fn vacate_requires_matching_occupant() {
        let mut map = corridor();
        map.place(Position::new(0, 1), CharacterId(3)).unwrap();

        assert!(matches!(
            map.vacate(Position::new(0, 1), CharacterId(4)),
            Err(MapError::NotOccupant { .. })
        ));
        map.vacate(Position::new(0, 1), CharacterId(3)).unwrap();
        assert_eq!(map.occupant_at(Position::new(0, 1)), Ok(None));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![CellKind::Wall, CellKind::Floor],
            vec![CellKind::Wall],
        ];

        assert_eq!(
            GridMap::from_rows(rows),
            Err(MapError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn cells_iterates_row_major_with_positions() {
        let map = GridMap::filled(2, 3, CellKind::Floor);
        let positions: Vec<_> = map.cells().map(|(position, _)| position).collect();

        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[4], Position::new(1, 1));
        assert_eq!(map.rows().count(), 2);
    }
}
