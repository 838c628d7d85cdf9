//! Move legality and application.
//!
//! [`evaluate`] is the single entry point for real moves, simulated moves,
//! and non-mutating probes; everything else in the engine (check detection,
//! the mate search) is built on probing it.

use thiserror::Error;

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceRank, Player};

/// A proposed move. Transient: built, evaluated, discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub mover: Player,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord, mover: Player) -> Self {
        Self { from, to, mover }
    }
}

/// How [`evaluate`] treats a legal move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Commit the move; a pawn reaching its last row consults the supplied
    /// [`PromotionChooser`] before the commit.
    Play,
    /// Validate only; the board is never touched.
    Probe,
    /// Commit the move without consulting the chooser; a promoting pawn
    /// becomes a queen. Used for hypothetical continuations that must leave
    /// a realistic board behind.
    SimulateApply,
}

/// Why a move was rejected. Recoverable and expected: the front end decides
/// whether and how to show the message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum IllegalMove {
    #[error("the move square equals the selected square")]
    SameSquare,
    #[error("cannot move an empty square")]
    EmptySource,
    #[error("that chess piece does not belong to the moving player")]
    WrongOwner,
    #[error("{}", .rank.move_rule())]
    InvalidShape { rank: PieceRank },
    #[error("the move is blocked by another piece")]
    BlockedPath,
    #[error("cannot capture your own piece")]
    FriendlyCapture,
}

/// Ranks a pawn may promote to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PromotionRank {
    Rook,
    Knight,
    Bishop,
    Queen,
}

impl PromotionRank {
    #[inline]
    pub fn rank(self) -> PieceRank {
        match self {
            PromotionRank::Rook => PieceRank::Rook,
            PromotionRank::Knight => PieceRank::Knight,
            PromotionRank::Bishop => PieceRank::Bishop,
            PromotionRank::Queen => PieceRank::Queen,
        }
    }
}

/// Supplies the promotion choice for a pawn reaching its last row in
/// [`Mode::Play`]. The interactive implementation lives in the front end.
pub trait PromotionChooser {
    fn choose(&mut self, mover: Player) -> PromotionRank;
}

/// Always promotes to a queen. Also the fixed behavior of
/// [`Mode::SimulateApply`].
pub struct AutoQueen;

impl PromotionChooser for AutoQueen {
    fn choose(&mut self, _mover: Player) -> PromotionRank {
        PromotionRank::Queen
    }
}

/// Checks `mv` against the movement rules without touching the board, and
/// returns the piece that would move.
///
/// Taking `&Board` is what makes probing non-mutating by construction.
pub fn validate(board: &Board, mv: Move) -> Result<Piece, IllegalMove> {
    if mv.from == mv.to {
        return Err(IllegalMove::SameSquare);
    }

    let piece = board.get(mv.from).ok_or(IllegalMove::EmptySource)?;
    if piece.owner != mv.mover {
        return Err(IllegalMove::WrongOwner);
    }

    let delta = mv.to - mv.from;
    match piece.rank {
        PieceRank::Pawn => validate_pawn(board, mv, delta)?,
        PieceRank::Rook => {
            if delta.row != 0 && delta.col != 0 {
                return Err(IllegalMove::InvalidShape { rank: piece.rank });
            }
            ray_clear(board, mv.from, mv.to)?;
        }
        PieceRank::Knight => {
            let (ar, ac) = (delta.row.abs(), delta.col.abs());
            // Knights jump: no path check.
            if !((ar == 1 && ac == 2) || (ar == 2 && ac == 1)) {
                return Err(IllegalMove::InvalidShape { rank: piece.rank });
            }
        }
        PieceRank::Bishop => {
            if delta.row.abs() != delta.col.abs() {
                return Err(IllegalMove::InvalidShape { rank: piece.rank });
            }
            ray_clear(board, mv.from, mv.to)?;
        }
        PieceRank::Queen => {
            let straight = delta.row == 0 || delta.col == 0;
            let diagonal = delta.row.abs() == delta.col.abs();
            if !straight && !diagonal {
                return Err(IllegalMove::InvalidShape { rank: piece.rank });
            }
            ray_clear(board, mv.from, mv.to)?;
        }
        PieceRank::King => {
            if delta.row.abs() > 1 || delta.col.abs() > 1 {
                return Err(IllegalMove::InvalidShape { rank: piece.rank });
            }
        }
    }

    // Universal rule: the destination may hold anything but the mover's own
    // piece.
    if board.get(mv.to).map_or(false, |p| p.owner == mv.mover) {
        return Err(IllegalMove::FriendlyCapture);
    }

    Ok(piece)
}

/// Evaluates `mv` under `mode`. On success the returned bool reports whether
/// the board was mutated (always false for [`Mode::Probe`]).
pub fn evaluate(
    board: &mut Board,
    mv: Move,
    mode: Mode,
    chooser: &mut dyn PromotionChooser,
) -> Result<bool, IllegalMove> {
    let mut piece = validate(board, mv)?;

    if mode == Mode::Probe {
        return Ok(false);
    }

    if piece.rank == PieceRank::Pawn && mv.to.row == mv.mover.promotion_row() {
        let choice = match mode {
            Mode::Play => chooser.choose(mv.mover),
            _ => PromotionRank::Queen,
        };
        piece.rank = choice.rank();
    }

    board.set(mv.to, Some(piece));
    board.set(mv.from, None);
    Ok(true)
}

/// Probe-legality of `mv`: would it be accepted, without applying it.
#[inline]
pub fn probe(board: &Board, mv: Move) -> bool {
    validate(board, mv).is_ok()
}

fn validate_pawn(board: &Board, mv: Move, delta: Coord) -> Result<(), IllegalMove> {
    let shape_err = IllegalMove::InvalidShape {
        rank: PieceRank::Pawn,
    };

    let sideways = delta.col.abs();
    if sideways > 1 {
        return Err(shape_err);
    }

    // Forward-only: advance is positive in the owner's pawn direction.
    let forward = mv.mover.pawn_direction();
    let advance = delta.row * forward;
    let max_advance = if mv.from.row == mv.mover.pawn_start_row() {
        2
    } else {
        1
    };
    if advance < 1 || advance > max_advance {
        return Err(shape_err);
    }

    if sideways == 1 {
        // Diagonal: a single step, and only onto an opposing piece. Landing
        // on an own piece falls through to the friendly-capture rule.
        if advance != 1 || board.get(mv.to).is_none() {
            return Err(shape_err);
        }
    } else {
        // Straight: destination (and the intermediate square for a
        // two-square step) must be empty.
        if board.get(mv.to).is_some() {
            return Err(IllegalMove::BlockedPath);
        }
        if advance == 2 {
            let mid = Coord::new(mv.from.row + forward, mv.from.col);
            if board.get(mid).is_some() {
                return Err(IllegalMove::BlockedPath);
            }
        }
    }

    Ok(())
}

/// Every square strictly between `from` and `to` must be empty. `from` and
/// `to` are already known to share a rank, file, or diagonal.
fn ray_clear(board: &Board, from: Coord, to: Coord) -> Result<(), IllegalMove> {
    let step = from.step_toward(to);
    let mut cur = from + step;
    while cur != to {
        if board.get(cur).is_some() {
            return Err(IllegalMove::BlockedPath);
        }
        cur += step;
    }
    Ok(())
}
