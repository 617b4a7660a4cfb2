//! Board representation and rules for Oware Abapa: the tables, the legal
//! move/capture generator, move application, terminal detection and
//! scoring, plus the external text notations built on top of them.

pub mod binomial;
pub mod board;
pub mod error;
pub mod notation;
pub mod rules;
pub mod tables;

pub use board::{Board, Move, Side, NULL_MOVE, TOTAL_SEEDS};
pub use error::NotationError;
pub use rules::{Game, OwareGame, Winner};
