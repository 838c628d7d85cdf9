//! Attack detection: is a square reachable by the opponent, and is a king
//! in check. Built entirely on probing the move validator, so a square is
//! "attacked" exactly when some opposing piece has a probe-legal move to it.

use log::error;

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Player;
use crate::rules::moves::{self, Move};

/// True if any piece owned by `defender`'s opponent has a probe-legal move
/// to `target`.
pub fn is_attacked_by_opponent(board: &Board, defender: Player, target: Coord) -> bool {
    find_attacker(board, defender, target).is_some()
}

/// Coordinate of the first opposing piece (row-major scan) with a
/// probe-legal move to `target`. Callers use this only when exactly one
/// attacker is known to exist, so first-match is enough.
pub fn find_attacker(board: &Board, defender: Player, target: Coord) -> Option<Coord> {
    let opponent = defender.opponent();
    Board::coords().find(|&from| {
        board.get(from).map_or(false, |p| p.owner == opponent)
            && moves::probe(board, Move::new(from, target, opponent))
    })
}

/// True once more than `attacker_threshold` opposing pieces have a
/// probe-legal move to `player`'s king square.
///
/// A threshold of 0 asks "is the king in check at all"; 1 asks "is this a
/// double check" (two or more simultaneous attackers), which the mate
/// search uses to rule out single-piece defenses.
///
/// Precondition: exactly one king per side. The first king found in
/// row-major order is queried; a board with no king at all is reported as
/// not in check.
pub fn king_in_check(board: &Board, player: Player, attacker_threshold: usize) -> bool {
    let Some(king) = board.find_king(player) else {
        error!("check query: no king on the board for {player:?}");
        return false;
    };

    let opponent = player.opponent();
    let mut attackers = 0;
    for from in Board::coords() {
        if board.get(from).map_or(false, |p| p.owner == opponent)
            && moves::probe(board, Move::new(from, king, opponent))
        {
            if attackers == attacker_threshold {
                return true;
            }
            attackers += 1;
        }
    }

    false
}
