//! The rules engine proper: move legality and application, attack
//! detection, interposition paths, and checkmate resolution.

pub mod attacks;
pub mod checkmate;
pub mod moves;
pub mod path;
