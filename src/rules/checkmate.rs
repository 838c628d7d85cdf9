//! Exhaustive checkmate resolution.
//!
//! Given a king already known to be in check, [`resolve`] proves or
//! disproves mate by enumerating every possible kind of answer: relocating
//! the king, capturing the attacker, or interposing a piece. Each king trial
//! runs on a scratch clone of the board; the live position is never touched.

use log::{debug, error};

use crate::board::Board;
use crate::coord::KING_STEPS;
use crate::piece::{PieceRank, Player};
use crate::rules::attacks::{find_attacker, king_in_check};
use crate::rules::moves::{self, AutoQueen, Mode, Move};
use crate::rules::path::interposition_squares;

/// Outcome of mate resolution.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MateStatus {
    NotMate,
    Mate,
    /// A defensive invariant failed (no king, or a check with no locatable
    /// attacker). Should never occur on a well-formed board; surfaced so the
    /// caller can log and abort the operation instead of crashing.
    Indeterminate,
}

/// Decides whether `player` is checkmated. Call only once the caller has
/// established the king is in check.
pub fn resolve(board: &Board, player: Player) -> MateStatus {
    let Some(king) = board.find_king(player) else {
        error!("mate resolution: no king on the board for {player:?}");
        return MateStatus::Indeterminate;
    };

    // 1. Try every king relocation on a scratch board. A trial that captures
    // a piece must not leak into the next one, so the scratch is restored
    // from the original after each committed move.
    let mut scratch = board.clone();
    for &step in &KING_STEPS {
        let to = king + step;
        if !to.in_bounds() {
            continue;
        }
        let mv = Move::new(king, to, player);
        if moves::evaluate(&mut scratch, mv, Mode::SimulateApply, &mut AutoQueen).is_ok() {
            if !king_in_check(&scratch, player, 0) {
                debug!("check resolved: king moves to {to:?}");
                return MateStatus::NotMate;
            }
            scratch.clone_from(board);
        }
    }

    // 2. The king cannot save itself. Under double check no single piece
    // move can answer both attacks at once.
    if king_in_check(board, player, 1) {
        debug!("mate: double check and no king escape");
        return MateStatus::Mate;
    }

    // 3. Exactly one attacker remains.
    let Some(attacker) = find_attacker(board, player, king) else {
        error!("mate resolution: king in check but no attacker found for {player:?}");
        return MateStatus::Indeterminate;
    };

    // 4. Can any non-king piece capture it?
    let defenders = board.pieces_of(player, false);
    for &from in &defenders {
        if moves::probe(board, Move::new(from, attacker, player)) {
            debug!("check resolved: attacker at {attacker:?} can be captured from {from:?}");
            return MateStatus::NotMate;
        }
    }

    // 5. Knights and pawns cannot be interposed against.
    let attacker_rank = board.get(attacker).map(|p| p.rank);
    if matches!(attacker_rank, Some(PieceRank::Knight | PieceRank::Pawn)) {
        debug!("mate: {attacker_rank:?} attacker cannot be blocked or answered");
        return MateStatus::Mate;
    }

    // 6. Last resort: put something between the attacker and the king.
    let line = interposition_squares(attacker, king);
    for &from in &defenders {
        for &square in &line {
            if moves::probe(board, Move::new(from, square, player)) {
                debug!("check resolved: piece at {from:?} interposes on {square:?}");
                return MateStatus::NotMate;
            }
        }
    }

    debug!("mate: no relocation, capture, or interposition answers the check");
    MateStatus::Mate
}
