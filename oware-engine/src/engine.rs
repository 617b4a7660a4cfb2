//! Bundles Search and Rules behind the facade a caller actually drives:
//! configured depth and move time, a single in-flight search at a time,
//! and a `stop_computation` callable from any thread.

use std::time::Duration;

use oware_core::{Board, Move, OwareGame, Side};

use crate::error::ConfigError;
use crate::search::{normalize_depth, CancellationToken, Search, MIN_DEPTH};

pub struct Engine {
    search: Search<OwareGame>,
    depth: u32,
    move_time: Duration,
    token: CancellationToken,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            search: Search::new(OwareGame),
            depth: MIN_DEPTH,
            move_time: Duration::from_secs(1),
            token: CancellationToken::new(),
        }
    }

    /// Clamps to `MIN_DEPTH`, then rounds up to the next even depth.
    pub fn set_depth(&mut self, depth: u32) {
        self.depth = normalize_depth(depth);
    }

    pub fn set_move_time(&mut self, seconds: f64) -> Result<(), ConfigError> {
        if seconds <= 0.0 {
            return Err(ConfigError::InvalidMoveTime(seconds));
        }
        self.move_time = Duration::from_secs_f64(seconds);
        Ok(())
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn move_time(&self) -> Duration {
        self.move_time
    }

    pub fn compute_best_move(
        &self,
        board: &Board,
        turn: Side,
        history: &[(Board, Side)],
    ) -> Move {
        self.search.compute_best_move(
            board,
            turn,
            history,
            self.depth,
            self.move_time,
            &self.token,
        )
    }

    /// Asynchronously requests the in-flight search to stop. Safe to call
    /// from any thread; benign (a no-op until the next call resets it) if
    /// no search is running.
    pub fn stop_computation(&self) {
        self.token.cancel();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_depth_clamps_and_rounds_up() {
        let mut engine = Engine::new();
        engine.set_depth(1);
        assert_eq!(engine.depth(), MIN_DEPTH);
        engine.set_depth(7);
        assert_eq!(engine.depth(), 8);
    }

    #[test]
    fn set_move_time_rejects_non_positive_values() {
        let mut engine = Engine::new();
        assert!(engine.set_move_time(0.0).is_err());
        assert!(engine.set_move_time(-1.0).is_err());
        assert!(engine.set_move_time(0.5).is_ok());
        assert_eq!(engine.move_time(), Duration::from_secs_f64(0.5));
    }

    #[test]
    fn compute_best_move_on_initial_position() {
        let mut engine = Engine::new();
        engine.set_move_time(1.0).unwrap();
        let board = oware_core::rules::initial_board();
        let best = engine.compute_best_move(&board, Side::South, &[]);
        assert!((0..6).contains(&best));
    }

    #[test]
    fn stop_computation_before_a_search_is_benign() {
        let engine = Engine::new();
        engine.stop_computation();
        let board = oware_core::rules::initial_board();
        let best = engine.compute_best_move(&board, Side::South, &[]);
        assert!((0..6).contains(&best));
    }
}
