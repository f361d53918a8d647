//! Core game logic - pure, deterministic, and testable.
//!
//! The resolution engine of a tile-matching puzzle: it validates player
//! swaps, detects runs of three or more same-typed tiles, removes them,
//! applies gravity, refills, and cascades until the board is stable. It
//! has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: same seed and same taps produce identical games
//! - **Testable**: every rule is exercised headlessly
//! - **Portable**: runs under any frontend or none at all
//!
//! # Module structure
//!
//! - [`grid`]: tile storage with swap, removal, and column compaction
//! - [`matcher`]: pure run detection over a grid snapshot
//! - [`swap`]: adjacency and hypothetical-swap validation
//! - [`rng`]: seeded LCG, tile generation, match-free board generation
//! - [`resolver`]: the swap-to-settle turn state machine
//! - [`session`]: score, move budget, and win/lose context
//!
//! # Example
//!
//! ```
//! use tile_crush_core::{generate_board, GameSession, TileGenerator, TurnResolver};
//! use tile_crush_types::BoardConfig;
//!
//! let config = BoardConfig::default();
//! let mut generator = TileGenerator::new(12345, config.tile_types);
//! let grid = generate_board(&config, &mut generator);
//!
//! let mut resolver = TurnResolver::new(grid, generator);
//! let mut session = GameSession::default();
//!
//! // Tap two adjacent tiles, then let the cascade run out.
//! resolver.select_tile(3, 4).unwrap();
//! resolver.select_tile(3, 5).unwrap();
//! resolver.run_until_idle();
//!
//! session.apply_all(&resolver.take_events());
//! ```

pub mod grid;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod session;
pub mod swap;

pub use tile_crush_types as types;

// Re-export commonly used items for convenience.
pub use grid::{ColumnShift, Grid, GridError, Tile};
pub use matcher::{find_all_matches, has_matches, is_tile_in_match, match_groups};
pub use resolver::{CascadeStage, TurnPhase, TurnResolver};
pub use rng::{generate_board, populate, SimpleRng, TileGenerator};
pub use session::{GameSession, SessionConfig};
pub use swap::{are_adjacent, has_legal_swap, would_create_match};
