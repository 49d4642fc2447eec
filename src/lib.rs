#![warn(missing_docs)]

//! # `stevedore`
//!
//! A solver for [Sokoban](https://en.wikipedia.org/wiki/Sokoban) pushing puzzles.
//! Parse a puzzle in standard text notation into a [`Board`] with [`str::parse`],
//! then call [`solve()`](crate::Board::solve) to search for a move string that
//! places every box on a goal square.
//!
//! Solutions are feasible, not minimal: the search is greedy best-first and
//! deliberately ignores path length except as a tiebreak.
//!
//! # Internals
//! Combinatorial explosion is held off by preprocessing and pruning rather than
//! by raw search speed. Parsing derives, once per board: a dead-square mask
//! (cells no box can leave toward any goal, found by flooding backwards from
//! the goals with reversed push physics), a room partition of the floor split
//! at one-wide corridors with per-room goal counts, and Zobrist key tables
//! drawn from a fixed-seed stream.
//!
//! The search itself keeps a frontier ordered by a greedy distance score and a
//! visited set of 64-bit state keys, updated incrementally on every move.
//! Successors are dropped eagerly when they push a box onto a dead square,
//! freeze a box off its goal, or overload a room with more boxes than goals.
//! Whatever survives is scored and enqueued; the first popped state with every
//! box on a goal wins.

pub use board::Board;
pub use parse::ParseError;
pub use solver::{Outcome, SolverOptions};

pub(crate) mod analysis;
pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod deadlock;
pub(crate) mod direction;
pub(crate) mod heuristic;
pub(crate) mod location;
pub(crate) mod parse;
pub(crate) mod solver;
pub(crate) mod state;
pub(crate) mod zobrist;
