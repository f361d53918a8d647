//! Match detection - pure, read-only scans over a grid snapshot.
//!
//! A match is a horizontal or vertical run of at least [`MIN_RUN_LEN`]
//! same-typed tiles. Overlapping runs collapse into one set, so an L- or
//! T-shaped intersection is reported once. Empty cells and the `Empty`
//! sentinel block run continuation; runs stop at the board edge.

use std::collections::BTreeSet;

use tile_crush_types::{TileType, MIN_RUN_LEN};

use crate::grid::Grid;

/// Coordinates of every tile that belongs to a run of length >= 3,
/// across both axes. `BTreeSet` keeps downstream event order deterministic.
pub fn find_all_matches(grid: &Grid) -> BTreeSet<(u8, u8)> {
    let mut matched = BTreeSet::new();
    let width = grid.width();
    let height = grid.height();

    // Horizontal runs, each row left to right.
    for row in 0..height {
        let mut col = 0;
        while col + 2 < width {
            match run_type(grid, col, row, col + 1, row, col + 2, row) {
                Some(kind) => {
                    matched.insert((col, row));
                    matched.insert((col + 1, row));
                    matched.insert((col + 2, row));
                    let mut offset = 3;
                    while col + offset < width && grid.tile_type_at(col + offset, row) == Some(kind)
                    {
                        matched.insert((col + offset, row));
                        offset += 1;
                    }
                    col += 1;
                }
                None => col += 1,
            }
        }
    }

    // Vertical runs, each column bottom to top.
    for col in 0..width {
        let mut row = 0;
        while row + 2 < height {
            match run_type(grid, col, row, col, row + 1, col, row + 2) {
                Some(kind) => {
                    matched.insert((col, row));
                    matched.insert((col, row + 1));
                    matched.insert((col, row + 2));
                    let mut offset = 3;
                    while row + offset < height
                        && grid.tile_type_at(col, row + offset) == Some(kind)
                    {
                        matched.insert((col, row + offset));
                        offset += 1;
                    }
                    row += 1;
                }
                None => row += 1,
            }
        }
    }

    matched
}

/// Whether the board currently holds any match. Early-exits on the first
/// run seed found, so initial-board regeneration never materializes a set.
pub fn has_matches(grid: &Grid) -> bool {
    let width = grid.width();
    let height = grid.height();

    for row in 0..height {
        for col in 0..width.saturating_sub(2) {
            if run_type(grid, col, row, col + 1, row, col + 2, row).is_some() {
                return true;
            }
        }
    }
    for col in 0..width {
        for row in 0..height.saturating_sub(2) {
            if run_type(grid, col, row, col, row + 1, col, row + 2).is_some() {
                return true;
            }
        }
    }
    false
}

/// Whether the tile at (col, row) sits inside a run of >= 3 along either
/// axis through its current position. Agrees with membership in
/// [`find_all_matches`] for every occupied cell (tested).
pub fn is_tile_in_match(grid: &Grid, col: u8, row: u8) -> bool {
    let Some(kind) = grid.tile_type_at(col, row) else {
        return false;
    };
    if kind == TileType::Empty {
        return false;
    }

    let horizontal = 1 + count_run(grid, col, row, kind, -1, 0) + count_run(grid, col, row, kind, 1, 0);
    if horizontal >= MIN_RUN_LEN {
        return true;
    }
    let vertical = 1 + count_run(grid, col, row, kind, 0, -1) + count_run(grid, col, row, kind, 0, 1);
    vertical >= MIN_RUN_LEN
}

/// Partition a match set into orthogonally-connected groups. This is the
/// scoring granularity: an L of two intersecting runs is one group.
pub fn match_groups(matches: &BTreeSet<(u8, u8)>) -> Vec<Vec<(u8, u8)>> {
    let mut remaining: BTreeSet<(u8, u8)> = matches.clone();
    let mut groups = Vec::new();

    while let Some(&seed) = remaining.iter().next() {
        remaining.remove(&seed);
        let mut group = vec![seed];
        let mut frontier = vec![seed];
        while let Some((col, row)) = frontier.pop() {
            for neighbor in [
                (col.wrapping_sub(1), row),
                (col + 1, row),
                (col, row.wrapping_sub(1)),
                (col, row + 1),
            ] {
                if remaining.remove(&neighbor) {
                    group.push(neighbor);
                    frontier.push(neighbor);
                }
            }
        }
        group.sort_unstable();
        groups.push(group);
    }

    groups
}

/// The shared type of three cells if all are occupied by the same live
/// color, i.e. the seed of a run.
fn run_type(
    grid: &Grid,
    c0: u8,
    r0: u8,
    c1: u8,
    r1: u8,
    c2: u8,
    r2: u8,
) -> Option<TileType> {
    let kind = grid.tile_type_at(c0, r0)?;
    if kind == TileType::Empty {
        return None;
    }
    if grid.tile_type_at(c1, r1) == Some(kind) && grid.tile_type_at(c2, r2) == Some(kind) {
        Some(kind)
    } else {
        None
    }
}

/// Count contiguous same-typed tiles from (col, row) exclusive, stepping
/// by (dc, dr) until the type changes or the board edge stops the run.
fn count_run(grid: &Grid, col: u8, row: u8, kind: TileType, dc: i16, dr: i16) -> usize {
    let mut count = 0;
    let mut c = col as i16 + dc;
    let mut r = row as i16 + dr;
    while c >= 0 && r >= 0 && grid.tile_type_at(c as u8, r as u8) == Some(kind) {
        count += 1;
        c += dc;
        r += dr;
    }
    count
}
