//! Grid module - owns the 2D tile storage.
//!
//! The grid is a `width x height` array of optional tiles in column-major
//! order. Coordinates: (col, row) where col ranges left to right and row
//! ranges 0 (bottom) upward, so gravity compacts toward row 0.
//!
//! A stored tile's `col`/`row` fields always equal its storage slot; every
//! mutating operation re-establishes that invariant before returning. The
//! grid is the only component that touches cell storage directly.

use thiserror::Error;
use tile_crush_types::TileType;

/// Coordinate access outside the board extents. This is a caller error,
/// not a gameplay outcome; rejected swaps never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {width}x{height} board")]
    OutOfBounds {
        col: u8,
        row: u8,
        width: u8,
        height: u8,
    },
}

/// A single tile. Plain value, exclusively owned by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub tile_type: TileType,
    pub col: u8,
    pub row: u8,
}

impl Tile {
    pub fn new(tile_type: TileType, col: u8, row: u8) -> Self {
        Self {
            tile_type,
            col,
            row,
        }
    }
}

/// One downward move made by `collapse_column`, for animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnShift {
    pub tile_type: TileType,
    pub from_row: u8,
    pub to_row: u8,
}

/// The game board. Dimensions are fixed for the grid's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Column-major storage: index = col * height + row.
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create a new empty grid.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Calculate the flat index for (col, row), or fail out of bounds.
    fn index(&self, col: u8, row: u8) -> Result<usize, GridError> {
        if col >= self.width || row >= self.height {
            return Err(GridError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(col as usize * self.height as usize + row as usize)
    }

    /// Get the tile at (col, row), `None` for a transiently empty cell.
    pub fn get(&self, col: u8, row: u8) -> Result<Option<Tile>, GridError> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// The tile type at (col, row), if the cell is in bounds and occupied.
    pub fn tile_type_at(&self, col: u8, row: u8) -> Option<TileType> {
        self.get(col, row).ok().flatten().map(|t| t.tile_type)
    }

    /// Place or clear a cell. A placed tile's stored coordinates are
    /// rewritten to (col, row) as part of the same operation.
    pub fn set(&mut self, col: u8, row: u8, tile: Option<Tile>) -> Result<(), GridError> {
        let idx = self.index(col, row)?;
        self.cells[idx] = tile.map(|mut t| {
            t.col = col;
            t.row = row;
            t
        });
        Ok(())
    }

    /// Remove and return the tile at (col, row), leaving the cell empty.
    pub fn take(&mut self, col: u8, row: u8) -> Result<Option<Tile>, GridError> {
        let idx = self.index(col, row)?;
        Ok(self.cells[idx].take())
    }

    /// Atomically exchange two cells. Both tiles' coordinate fields are
    /// updated together; no intermediate state is observable.
    pub fn swap(&mut self, a: (u8, u8), b: (u8, u8)) -> Result<(), GridError> {
        let idx_a = self.index(a.0, a.1)?;
        let idx_b = self.index(b.0, b.1)?;
        self.cells.swap(idx_a, idx_b);
        if let Some(tile) = self.cells[idx_a].as_mut() {
            tile.col = a.0;
            tile.row = a.1;
        }
        if let Some(tile) = self.cells[idx_b].as_mut() {
            tile.col = b.0;
            tile.row = b.1;
        }
        Ok(())
    }

    /// Compact all tiles in a column toward row 0, preserving relative
    /// order and leaving the emptied cells at the top. Returns the moves
    /// made so the presentation layer can animate them.
    pub fn collapse_column(&mut self, col: u8) -> Result<Vec<ColumnShift>, GridError> {
        // Bounds-check once; rows below are all in range by construction.
        self.index(col, 0)?;

        let mut shifts = Vec::new();
        let mut write_row: u8 = 0;
        for read_row in 0..self.height {
            let idx = col as usize * self.height as usize + read_row as usize;
            let Some(tile) = self.cells[idx] else {
                continue;
            };
            if read_row != write_row {
                let write_idx = col as usize * self.height as usize + write_row as usize;
                self.cells[write_idx] = Some(Tile::new(tile.tile_type, col, write_row));
                self.cells[idx] = None;
                shifts.push(ColumnShift {
                    tile_type: tile.tile_type,
                    from_row: read_row,
                    to_row: write_row,
                });
            }
            write_row += 1;
        }
        Ok(shifts)
    }

    /// True when every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Iterate over every occupied cell's coordinates.
    pub fn positions(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let height = self.height;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|_| ((i / height as usize) as u8, (i % height as usize) as u8))
        })
    }
}
