//! Tile Crush (workspace facade crate).
//!
//! This package keeps a stable `tile_crush::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use tile_crush_core as core;
pub use tile_crush_types as types;
