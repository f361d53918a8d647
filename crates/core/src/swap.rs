//! Swap validation - adjacency and hypothetical-swap checks.
//!
//! `would_create_match` needs mutable grid access for its transient
//! swap/unswap, but restores the grid bit-identically before returning.
//! That is safe only because nothing else touches the grid concurrently
//! (the engine is single-threaded by design).

use crate::grid::{Grid, GridError};
use crate::matcher;

/// True iff the two cells differ by exactly 1 on exactly one axis.
/// No diagonals; a cell is never adjacent to itself.
pub fn are_adjacent(a: (u8, u8), b: (u8, u8)) -> bool {
    let col_diff = a.0.abs_diff(b.0);
    let row_diff = a.1.abs_diff(b.1);
    (col_diff == 1 && row_diff == 0) || (col_diff == 0 && row_diff == 1)
}

/// Whether swapping the two cells would put either tile into a match.
///
/// Performs the swap, queries the detector for both positions, then
/// applies the inverse swap. Grid state after the call is exactly what
/// it was before, whatever the outcome.
pub fn would_create_match(grid: &mut Grid, a: (u8, u8), b: (u8, u8)) -> Result<bool, GridError> {
    grid.swap(a, b)?;
    let creates = matcher::is_tile_in_match(grid, a.0, a.1)
        || matcher::is_tile_in_match(grid, b.0, b.1);
    grid.swap(a, b)?;
    Ok(creates)
}

/// Whether any adjacent pair on the board can be swapped into a match.
///
/// The resolver never calls this; a board with no legal swap is a
/// terminal condition the session owner handles (typically by
/// regenerating the board).
pub fn has_legal_swap(grid: &mut Grid) -> bool {
    for col in 0..grid.width() {
        for row in 0..grid.height() {
            // Right and up neighbors cover every unordered pair once.
            if col + 1 < grid.width()
                && would_create_match(grid, (col, row), (col + 1, row)).unwrap_or(false)
            {
                return true;
            }
            if row + 1 < grid.height()
                && would_create_match(grid, (col, row), (col, row + 1)).unwrap_or(false)
            {
                return true;
            }
        }
    }
    false
}
