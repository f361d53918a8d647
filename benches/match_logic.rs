use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_crush::core::{
    find_all_matches, generate_board, has_legal_swap, populate, Grid, TileGenerator, TurnResolver,
};
use tile_crush::types::BoardConfig;

fn bench_find_all_matches(c: &mut Criterion) {
    let mut grid = Grid::new(8, 8);
    let mut generator = TileGenerator::new(12345, 4);
    populate(&mut grid, &mut generator);

    c.bench_function("find_all_matches_8x8", |b| {
        b.iter(|| find_all_matches(black_box(&grid)))
    });
}

fn bench_generate_board(c: &mut Criterion) {
    let config = BoardConfig::default();

    c.bench_function("generate_board_8x8", |b| {
        let mut seed = 1u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut generator = TileGenerator::new(seed, config.tile_types);
            generate_board(black_box(&config), &mut generator)
        })
    });
}

fn bench_has_legal_swap(c: &mut Criterion) {
    let config = BoardConfig::default();
    let mut generator = TileGenerator::new(777, config.tile_types);
    let grid = generate_board(&config, &mut generator);

    c.bench_function("has_legal_swap_8x8", |b| {
        b.iter(|| {
            let mut probe = grid.clone();
            has_legal_swap(black_box(&mut probe))
        })
    });
}

fn bench_full_turn(c: &mut Criterion) {
    use tile_crush::types::TileType::*;
    c.bench_function("swap_and_cascade_4x1", |b| {
        let mut seed = 1u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut grid = Grid::new(4, 1);
            for (col, kind) in [Red, Red, Blue, Red].iter().enumerate() {
                let tile = tile_crush::core::Tile::new(*kind, col as u8, 0);
                grid.set(col as u8, 0, Some(tile)).unwrap();
            }
            let mut resolver = TurnResolver::new(grid, TileGenerator::new(seed, 6));
            resolver.select_tile(2, 0).unwrap();
            resolver.select_tile(3, 0).unwrap();
            resolver.run_until_idle();
            resolver.take_events()
        })
    });
}

criterion_group!(
    benches,
    bench_find_all_matches,
    bench_generate_board,
    bench_has_legal_swap,
    bench_full_turn
);
criterion_main!(benches);
