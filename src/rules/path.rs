//! Interposition paths between a sliding attacker and the king it checks.

use crate::coord::Coord;

/// Squares strictly between `attacker` and `king`, ordered from the
/// attacker toward the king. Empty when the attacker is adjacent.
///
/// Meaningful only for a sliding attacker (rook, bishop, queen) with a
/// clear line to the king; interposition against knights and pawns is
/// impossible by chess rules and must be short-circuited by the caller.
pub fn interposition_squares(attacker: Coord, king: Coord) -> Vec<Coord> {
    let delta = king - attacker;
    debug_assert!(
        delta.row == 0 || delta.col == 0 || delta.row.abs() == delta.col.abs(),
        "attacker {attacker:?} and king {king:?} share no line"
    );

    let step = attacker.step_toward(king);
    let mut squares = Vec::new();
    let mut cur = attacker + step;
    // The bounds guard keeps the walk finite even on a misaligned call.
    while cur != king && cur.in_bounds() {
        squares.push(cur);
        cur += step;
    }
    squares
}
