//! Turn resolver - the swap-to-settle state machine.
//!
//! One turn runs `Idle -> TileSelected -> Swapping -> (Reverting | Resolving)
//! -> Idle`. While a turn is in flight the resolver ignores new selections
//! (the turn lock). All logical effects of a stage are computed
//! synchronously inside one call; only the *visible* completion of a stage
//! is time-extended, and the presentation layer reports it back through
//! [`TurnResolver::advance`]. The resolver never awaits and never sees
//! durations.
//!
//! Stages within a cascade iteration run strictly in the order
//! remove -> settle -> refill -> detect, and iterations are sequential.

use std::collections::BTreeSet;

use tile_crush_types::BoardEvent;

use crate::grid::{Grid, GridError};
use crate::matcher;
use crate::rng::TileGenerator;
use crate::swap;

/// Which cascade stage last had its logical effects applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStage {
    Removing,
    Settling,
    Refilling,
}

/// Turn state machine phases. `Idle` is both the rest and start state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    /// One tile chosen, waiting for the second selection.
    TileSelected { first: (u8, u8) },
    /// Swap committed on the grid, match decision pending.
    Swapping { a: (u8, u8), b: (u8, u8) },
    /// Swap produced no match and has been undone.
    Reverting,
    /// Cascade loop active.
    Resolving { stage: CascadeStage },
}

/// Orchestrates swaps and the remove/settle/refill cascade over a grid it
/// exclusively owns. Constructed with its collaborators up front; the
/// match detector and swap validator are pure functions and need no
/// injection beyond their module seam.
#[derive(Debug, Clone)]
pub struct TurnResolver {
    grid: Grid,
    generator: TileGenerator,
    phase: TurnPhase,
    events: Vec<BoardEvent>,
}

impl TurnResolver {
    pub fn new(grid: Grid, generator: TileGenerator) -> Self {
        Self {
            grid,
            generator,
            phase: TurnPhase::Idle,
            events: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether a turn is in flight and new selections are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Swapping { .. } | TurnPhase::Reverting | TurnPhase::Resolving { .. }
        )
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TurnPhase::Idle
    }

    /// Drain the accumulated board events, oldest first.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// The only inbound call: a tile tap from the input collaborator.
    ///
    /// First tap remembers the selection. Second tap either discards it
    /// (non-adjacent, including re-tapping the same tile) or commits the
    /// grid swap and enters `Swapping`. Taps during an active turn are
    /// ignored. Out-of-range coordinates are a caller error.
    pub fn select_tile(&mut self, col: u8, row: u8) -> Result<(), GridError> {
        // Bounds are validated even for taps the lock will discard.
        self.grid.get(col, row)?;

        match self.phase {
            TurnPhase::Swapping { .. } | TurnPhase::Reverting | TurnPhase::Resolving { .. } => {
                Ok(())
            }
            TurnPhase::Idle => {
                self.phase = TurnPhase::TileSelected { first: (col, row) };
                Ok(())
            }
            TurnPhase::TileSelected { first } => {
                let second = (col, row);
                if !swap::are_adjacent(first, second) {
                    // Rejected input, not an error: selection resets.
                    self.phase = TurnPhase::Idle;
                    return Ok(());
                }
                self.commit_swap(first, second)?;
                self.phase = TurnPhase::Swapping { a: first, b: second };
                Ok(())
            }
        }
    }

    /// Report that the presentation finished animating the previous stage.
    ///
    /// Each call applies the next stage's logical effects synchronously
    /// and returns the new phase. No-op while `Idle` or awaiting a second
    /// selection.
    pub fn advance(&mut self) -> TurnPhase {
        match self.phase {
            TurnPhase::Idle | TurnPhase::TileSelected { .. } => {}
            TurnPhase::Swapping { a, b } => {
                let matches = matcher::find_all_matches(&self.grid);
                if matches.is_empty() {
                    // Undo by re-applying the swap; grid returns to its
                    // exact pre-swap arrangement.
                    if self.commit_swap(a, b).is_ok() {
                        self.phase = TurnPhase::Reverting;
                    }
                } else {
                    self.events.push(BoardEvent::MoveCommitted);
                    self.remove_matches(&matches);
                    self.phase = TurnPhase::Resolving {
                        stage: CascadeStage::Removing,
                    };
                }
            }
            TurnPhase::Reverting => {
                self.phase = TurnPhase::Idle;
            }
            TurnPhase::Resolving { stage } => match stage {
                CascadeStage::Removing => {
                    self.settle();
                    self.phase = TurnPhase::Resolving {
                        stage: CascadeStage::Settling,
                    };
                }
                CascadeStage::Settling => {
                    self.refill();
                    self.phase = TurnPhase::Resolving {
                        stage: CascadeStage::Refilling,
                    };
                }
                CascadeStage::Refilling => {
                    let matches = matcher::find_all_matches(&self.grid);
                    if matches.is_empty() {
                        self.phase = TurnPhase::Idle;
                    } else {
                        self.remove_matches(&matches);
                        self.phase = TurnPhase::Resolving {
                            stage: CascadeStage::Removing,
                        };
                    }
                }
            },
        }
        self.phase
    }

    /// Drive the current turn to completion. Useful for headless callers
    /// that have no animation stages to wait on.
    pub fn run_until_idle(&mut self) {
        while self.is_busy() {
            self.advance();
        }
    }

    /// Exchange two cells and emit the movement facts for animation.
    fn commit_swap(&mut self, a: (u8, u8), b: (u8, u8)) -> Result<(), GridError> {
        let tile_a = self.grid.get(a.0, a.1)?;
        let tile_b = self.grid.get(b.0, b.1)?;
        self.grid.swap(a, b)?;
        if let Some(tile) = tile_a {
            self.events.push(BoardEvent::TileMoved {
                tile_type: tile.tile_type,
                from: a,
                to: b,
            });
        }
        if let Some(tile) = tile_b {
            self.events.push(BoardEvent::TileMoved {
                tile_type: tile.tile_type,
                from: b,
                to: a,
            });
        }
        Ok(())
    }

    /// Remove every matched tile and report one resolved group per
    /// orthogonally-connected component of the match set.
    fn remove_matches(&mut self, matches: &BTreeSet<(u8, u8)>) {
        for group in matcher::match_groups(matches) {
            self.events.push(BoardEvent::MatchResolved {
                group_size: group.len() as u32,
            });
            for (col, row) in group {
                if let Ok(Some(tile)) = self.grid.take(col, row) {
                    self.events.push(BoardEvent::TileRemoved {
                        tile_type: tile.tile_type,
                        col,
                        row,
                    });
                }
            }
        }
    }

    /// Gravity: compact every column downward, preserving order.
    fn settle(&mut self) {
        for col in 0..self.grid.width() {
            let Ok(shifts) = self.grid.collapse_column(col) else {
                continue;
            };
            for shift in shifts {
                self.events.push(BoardEvent::TileMoved {
                    tile_type: shift.tile_type,
                    from: (col, shift.from_row),
                    to: (col, shift.to_row),
                });
            }
        }
    }

    /// Fill every still-empty cell (top of each column after settling)
    /// with a freshly generated tile.
    fn refill(&mut self) {
        for col in 0..self.grid.width() {
            for row in 0..self.grid.height() {
                let Ok(None) = self.grid.get(col, row) else {
                    continue;
                };
                let kind = self.generator.next_type();
                if self
                    .grid
                    .set(col, row, Some(crate::grid::Tile::new(kind, col, row)))
                    .is_ok()
                {
                    self.events.push(BoardEvent::TileSpawned {
                        tile_type: kind,
                        col,
                        row,
                    });
                }
            }
        }
    }
}
