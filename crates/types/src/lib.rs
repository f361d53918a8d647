//! Shared types for the tile-crush workspace.
//!
//! Pure data types used by the core engine and any frontend. The only
//! dependency is serde, so downstream drivers can serialize the event
//! stream without reaching into engine internals.

use serde::Serialize;

/// Default board dimensions.
pub const DEFAULT_BOARD_WIDTH: u8 = 8;
pub const DEFAULT_BOARD_HEIGHT: u8 = 8;

/// Default number of distinct tile colors in play.
pub const DEFAULT_TILE_TYPES: u8 = 6;

/// Minimum run length that counts as a match.
pub const MIN_RUN_LEN: usize = 3;

/// Session defaults.
pub const DEFAULT_MOVE_LIMIT: u32 = 30;
pub const DEFAULT_TARGET_SCORE: u32 = 1000;

/// Points per resolved group, by group size (3 / 4 / 5-or-more).
pub const MATCH3_SCORE: u32 = 100;
pub const MATCH4_SCORE: u32 = 200;
pub const MATCH5_SCORE: u32 = 300;

/// Tile colors, plus the `Empty` sentinel.
///
/// `Empty` is never stored in a live cell and never produced by the
/// generator; it exists so run scans have a type that matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TileType {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Empty,
}

impl TileType {
    /// The live color palette, in generator index order.
    pub const COLORS: [TileType; 6] = [
        TileType::Red,
        TileType::Blue,
        TileType::Green,
        TileType::Yellow,
        TileType::Purple,
        TileType::Orange,
    ];

    /// Parse a tile type from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TileType::Red),
            "blue" => Some(TileType::Blue),
            "green" => Some(TileType::Green),
            "yellow" => Some(TileType::Yellow),
            "purple" => Some(TileType::Purple),
            "orange" => Some(TileType::Orange),
            "empty" => Some(TileType::Empty),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileType::Red => "red",
            TileType::Blue => "blue",
            TileType::Green => "green",
            TileType::Yellow => "yellow",
            TileType::Purple => "purple",
            TileType::Orange => "orange",
            TileType::Empty => "empty",
        }
    }

    /// Whether this is a live color (not the sentinel).
    pub fn is_color(&self) -> bool {
        *self != TileType::Empty
    }
}

/// Board setup parameters, read once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    /// How many entries of [`TileType::COLORS`] are in play.
    pub tile_types: u8,
}

impl BoardConfig {
    pub fn new(width: u8, height: u8, tile_types: u8) -> Self {
        Self {
            width,
            height,
            tile_types,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            tile_types: DEFAULT_TILE_TYPES,
        }
    }
}

/// Structural board changes, emitted by the resolver for presentation
/// and scoring collaborators.
///
/// Each event carries enough to animate the change without inspecting
/// grid internals. The core attaches no durations; timing is entirely
/// presentation-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A tile moved between cells (swap, revert, or gravity).
    TileMoved {
        tile_type: TileType,
        from: (u8, u8),
        to: (u8, u8),
    },
    /// A matched tile was removed from the board.
    TileRemoved {
        tile_type: TileType,
        col: u8,
        row: u8,
    },
    /// A freshly generated tile filled an empty cell.
    TileSpawned {
        tile_type: TileType,
        col: u8,
        row: u8,
    },
    /// One connected group of matched tiles was resolved.
    MatchResolved { group_size: u32 },
    /// A swap produced at least one match and will not be reverted.
    /// Fired once per committed swap, before the cascade runs.
    MoveCommitted,
}

/// Session outcome states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// Points awarded for one resolved group of the given size.
pub fn score_for_group(group_size: u32) -> u32 {
    match group_size {
        0..=2 => 0,
        3 => MATCH3_SCORE,
        4 => MATCH4_SCORE,
        _ => MATCH5_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_type_roundtrip() {
        for kind in TileType::COLORS {
            assert_eq!(TileType::from_str(kind.as_str()), Some(kind));
            assert!(kind.is_color());
        }
        assert_eq!(TileType::from_str("empty"), Some(TileType::Empty));
        assert!(!TileType::Empty.is_color());
        assert_eq!(TileType::from_str("magenta"), None);
    }

    #[test]
    fn test_score_for_group() {
        assert_eq!(score_for_group(2), 0);
        assert_eq!(score_for_group(3), 100);
        assert_eq!(score_for_group(4), 200);
        assert_eq!(score_for_group(5), 300);
        assert_eq!(score_for_group(9), 300);
    }

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.tile_types, 6);
    }
}
