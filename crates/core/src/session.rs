//! Game session - score, move budget, and win/lose tracking.
//!
//! An explicitly constructed context owned by whoever drives the resolver;
//! there is no ambient global. The session consumes the resolver's event
//! stream: `MoveCommitted` spends a move, `MatchResolved` adds points.

use tile_crush_types::{
    score_for_group, BoardEvent, GamePhase, DEFAULT_MOVE_LIMIT, DEFAULT_TARGET_SCORE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub move_limit: u32,
    pub target_score: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            move_limit: DEFAULT_MOVE_LIMIT,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    score: u32,
    moves_remaining: u32,
    phase: GamePhase,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            score: 0,
            moves_remaining: config.move_limit,
            phase: GamePhase::Playing,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Consume one board event. Movement events are ignored; they matter
    /// only to presentation.
    ///
    /// The loss check fires when the budget empties, before any cascade
    /// from the final move finishes scoring; a cascade can therefore keep
    /// raising the score after the session is lost, but phase transitions
    /// are one-way.
    pub fn apply(&mut self, event: &BoardEvent) {
        match event {
            BoardEvent::MoveCommitted => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                self.moves_remaining = self.moves_remaining.saturating_sub(1);
                if self.moves_remaining == 0 && self.score < self.config.target_score {
                    self.phase = GamePhase::Lost;
                }
            }
            BoardEvent::MatchResolved { group_size } => {
                self.score = self.score.saturating_add(score_for_group(*group_size));
                if self.score >= self.config.target_score && self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Won;
                }
            }
            BoardEvent::TileMoved { .. }
            | BoardEvent::TileRemoved { .. }
            | BoardEvent::TileSpawned { .. } => {}
        }
    }

    /// Apply a batch of events in order.
    pub fn apply_all(&mut self, events: &[BoardEvent]) {
        for event in events {
            self.apply(event);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
