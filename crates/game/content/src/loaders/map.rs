//! Map data loader.
//!
//! Maps are drawn as text, one string per row:
//!
//! ```text
//! (
//!     rows: [
//!         "#####",
//!         "#...#",
//!         "#####",
//!     ],
//! )
//! ```
//!
//! `#` is a wall, `.` is floor. Characters are placed separately from the
//! roster file.

use std::path::Path;

use game_core::{CellKind, GridMap};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    rows: Vec<String>,
}

/// Loader for map layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    pub const WALL: char = '#';
    pub const FLOOR: char = '.';

    /// Load a map from a RON file.
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a map from RON text.
    pub fn parse(content: &str) -> LoadResult<GridMap> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        if data.rows.is_empty() {
            anyhow::bail!("Map has no rows");
        }

        let rows = data
            .rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, glyph)| match glyph {
                        Self::WALL => Ok(CellKind::Wall),
                        Self::FLOOR => Ok(CellKind::Floor),
                        other => Err(anyhow::anyhow!(
                            "Unknown map glyph {:?} at ({}, {})",
                            other,
                            row,
                            col
                        )),
                    })
                    .collect::<LoadResult<Vec<_>>>()
            })
            .collect::<LoadResult<Vec<_>>>()?;

        GridMap::from_rows(rows).map_err(|e| anyhow::anyhow!("Invalid map layout: {}", e))
    }
}
