//! A chess rules engine over an owned 8×8 board: per-piece move legality,
//! check detection, and an exhaustive checkmate proof.
//!
//! The crate decides rules only. Text I/O, coordinate-notation parsing, and
//! file persistence live in the front end, which hands in validated
//! [`coord::Coord`] pairs and consumes [`rules::moves::IllegalMove`] values
//! and [`rules::checkmate::MateStatus`] answers.

pub mod board;
pub mod coord;
pub mod piece;
pub mod rules;
