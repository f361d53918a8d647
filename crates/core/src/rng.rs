//! RNG module - deterministic tile generation.
//!
//! A seeded LCG drives uniform tile selection over the configured color
//! palette. The generator itself carries no match-avoidance bias; the
//! initial-board loop below regenerates the whole board until it is
//! match-free, exactly once at session start. Same seed, same board.

use tile_crush_types::{BoardConfig, TileType};

use crate::grid::{Grid, Tile};
use crate::matcher;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform random tile type selection, used for initial population and
/// refill alike. Never yields the `Empty` sentinel.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    rng: SimpleRng,
    palette_len: u8,
}

impl TileGenerator {
    /// Create a generator over the first `tile_types` palette colors.
    pub fn new(seed: u32, tile_types: u8) -> Self {
        let palette_len = tile_types.clamp(1, TileType::COLORS.len() as u8);
        Self {
            rng: SimpleRng::new(seed),
            palette_len,
        }
    }

    /// Draw the next random tile type.
    pub fn next_type(&mut self) -> TileType {
        let idx = self.rng.next_range(self.palette_len as u32) as usize;
        TileType::COLORS[idx]
    }

    /// Current RNG state (for reproducing a session).
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

/// Fill every cell of the grid with freshly generated tiles, column by
/// column. Existing contents are overwritten.
pub fn populate(grid: &mut Grid, generator: &mut TileGenerator) {
    for col in 0..grid.width() {
        for row in 0..grid.height() {
            let tile = Tile::new(generator.next_type(), col, row);
            // In bounds by construction of the loop.
            let _ = grid.set(col, row, Some(tile));
        }
    }
}

/// Build the initial board: populate fully, then regenerate the whole
/// grid while it still contains matches. Termination is probabilistic
/// but fast for any reasonable palette size.
pub fn generate_board(config: &BoardConfig, generator: &mut TileGenerator) -> Grid {
    let mut grid = Grid::new(config.width, config.height);
    populate(&mut grid, generator);
    while matcher::has_matches(&grid) {
        populate(&mut grid, generator);
    }
    grid
}
