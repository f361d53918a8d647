//! Match detection tests against the public API, including the
//! detector/point-query agreement property on randomly populated boards.

use tile_crush::core::{
    find_all_matches, has_matches, is_tile_in_match, match_groups, populate, Grid, Tile,
    TileGenerator,
};
use tile_crush::types::TileType;

fn row_grid(kinds: &[TileType]) -> Grid {
    let mut grid = Grid::new(kinds.len() as u8, 1);
    for (col, kind) in kinds.iter().enumerate() {
        grid.set(col as u8, 0, Some(Tile::new(*kind, 0, 0))).unwrap();
    }
    grid
}

#[test]
fn test_direct_replacement_completes_a_run() {
    // [Red, Blue, Red] with the Blue replaced by Red yields all three.
    use TileType::*;
    let mut grid = row_grid(&[Red, Blue, Red]);
    assert!(!has_matches(&grid));

    grid.set(1, 0, Some(Tile::new(Red, 1, 0))).unwrap();

    let matches = find_all_matches(&grid);
    assert_eq!(
        matches.into_iter().collect::<Vec<_>>(),
        vec![(0, 0), (1, 0), (2, 0)]
    );
}

#[test]
fn test_l_shape_yields_union_of_five() {
    use TileType::*;
    // Horizontal Red run in row 0 shares its first tile with a vertical
    // Red run in column 0.
    let mut grid = Grid::new(4, 4);
    let layout = [
        ((0, 0), Red),
        ((1, 0), Red),
        ((2, 0), Red),
        ((0, 1), Red),
        ((0, 2), Red),
        ((3, 0), Blue),
        ((1, 1), Green),
        ((2, 1), Blue),
    ];
    for ((col, row), kind) in layout {
        grid.set(col, row, Some(Tile::new(kind, col, row))).unwrap();
    }

    let matches = find_all_matches(&grid);
    assert_eq!(matches.len(), 5, "union, not 6 and not two dangling triples");

    let groups = match_groups(&matches);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 5);
}

#[test]
fn test_runs_do_not_wrap_around_edges() {
    use TileType::*;
    // Two Reds at a row's end and one at the next row's start never join.
    let mut grid = Grid::new(3, 2);
    let layout = [
        ((1, 0), Red),
        ((2, 0), Red),
        ((0, 1), Red),
        ((0, 0), Blue),
        ((1, 1), Green),
        ((2, 1), Blue),
    ];
    for ((col, row), kind) in layout {
        grid.set(col, row, Some(Tile::new(kind, col, row))).unwrap();
    }
    assert!(!has_matches(&grid));
}

#[test]
fn test_point_query_agrees_with_set_on_random_boards() {
    for seed in [1, 7, 42, 1234, 98765] {
        let mut grid = Grid::new(8, 8);
        let mut generator = TileGenerator::new(seed, 4);
        // Raw population, matches allowed: both detectors must agree on
        // matched and unmatched tiles alike.
        populate(&mut grid, &mut generator);

        let matches = find_all_matches(&grid);
        assert_eq!(has_matches(&grid), !matches.is_empty());
        for col in 0..8 {
            for row in 0..8 {
                assert_eq!(
                    is_tile_in_match(&grid, col, row),
                    matches.contains(&(col, row)),
                    "seed {seed}: disagreement at ({col}, {row})"
                );
            }
        }
    }
}

#[test]
fn test_match_groups_cover_the_set_exactly() {
    for seed in [3, 17, 555] {
        let mut grid = Grid::new(8, 8);
        let mut generator = TileGenerator::new(seed, 3);
        populate(&mut grid, &mut generator);

        let matches = find_all_matches(&grid);
        let groups = match_groups(&matches);
        let total: usize = groups.iter().map(Vec::len).sum();
        assert_eq!(total, matches.len(), "groups partition the set");
        for group in &groups {
            assert!(group.len() >= 3);
            assert!(group.iter().all(|pos| matches.contains(pos)));
        }
    }
}
