//! Swap validation tests - adjacency properties and probe reversibility.

use tile_crush::core::{
    are_adjacent, has_legal_swap, populate, would_create_match, Grid, Tile, TileGenerator,
};
use tile_crush::types::TileType;

#[test]
fn test_adjacency_symmetry_over_all_pairs() {
    let positions: Vec<(u8, u8)> = (0..4).flat_map(|c| (0..4).map(move |r| (c, r))).collect();
    for &a in &positions {
        for &b in &positions {
            assert_eq!(are_adjacent(a, b), are_adjacent(b, a));
        }
        assert!(!are_adjacent(a, a), "a tile is never adjacent to itself");
    }
}

#[test]
fn test_adjacency_requires_orthogonal_distance_one() {
    assert!(are_adjacent((3, 3), (3, 4)));
    assert!(are_adjacent((3, 3), (2, 3)));
    assert!(!are_adjacent((3, 3), (4, 4)));
    assert!(!are_adjacent((3, 3), (3, 5)));
    assert!(!are_adjacent((0, 0), (2, 0)));
}

#[test]
fn test_probe_is_side_effect_free_for_every_adjacent_pair() {
    for seed in [2, 11, 404] {
        let mut grid = Grid::new(6, 6);
        let mut generator = TileGenerator::new(seed, 4);
        populate(&mut grid, &mut generator);
        let before = grid.clone();

        for col in 0..6 {
            for row in 0..6 {
                if col + 1 < 6 {
                    would_create_match(&mut grid, (col, row), (col + 1, row)).unwrap();
                }
                if row + 1 < 6 {
                    would_create_match(&mut grid, (col, row), (col, row + 1)).unwrap();
                }
            }
        }
        // Cell contents and every stored coordinate are bit-identical.
        assert_eq!(grid, before, "seed {seed}: probe mutated the grid");
    }
}

#[test]
fn test_probe_agrees_with_committed_swap() {
    use TileType::*;
    let mut grid = Grid::new(4, 1);
    for (col, kind) in [Red, Blue, Red, Red].iter().enumerate() {
        grid.set(col as u8, 0, Some(Tile::new(*kind, 0, 0))).unwrap();
    }

    assert!(would_create_match(&mut grid, (0, 0), (1, 0)).unwrap());
    assert!(!would_create_match(&mut grid, (2, 0), (3, 0)).unwrap());
}

#[test]
fn test_has_legal_swap_detects_dead_and_live_boards() {
    use TileType::*;
    // A 3x1 rainbow has no matching swap anywhere.
    let mut dead = Grid::new(3, 1);
    for (col, kind) in [Red, Blue, Green].iter().enumerate() {
        dead.set(col as u8, 0, Some(Tile::new(*kind, 0, 0))).unwrap();
    }
    assert!(!has_legal_swap(&mut dead));

    // One swap away from a match.
    let mut live = Grid::new(4, 1);
    for (col, kind) in [Red, Blue, Red, Red].iter().enumerate() {
        live.set(col as u8, 0, Some(Tile::new(*kind, 0, 0))).unwrap();
    }
    assert!(has_legal_swap(&mut live));
}
