//! The 8×8 position grid.
//!
//! The board owns its squares outright; `Clone` yields a fully independent
//! copy, which is what every hypothetical-move trial works on. No other
//! module touches the grid except through [`Board::get`] and [`Board::set`].

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::piece::{Piece, PieceRank, Player, Square};

pub const BOARD_SIDE: usize = 8;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIDE]; BOARD_SIDE],
}

impl Board {
    /// An empty board, for scenario construction and tests.
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIDE]; BOARD_SIDE],
        }
    }

    /// The standard chess setup. PlayerOne occupies rows 0–1, PlayerTwo
    /// rows 6–7, with each king on column 4.
    pub fn standard() -> Self {
        use PieceRank::*;

        let mut board = Self::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (col, &rank) in back_rank.iter().enumerate() {
            let col = col as i16;
            board.set(Coord::new(0, col), Some(Piece::new(rank, Player::One)));
            board.set(Coord::new(7, col), Some(Piece::new(rank, Player::Two)));
            board.set(Coord::new(1, col), Some(Piece::new(Pawn, Player::One)));
            board.set(Coord::new(6, col), Some(Piece::new(Pawn, Player::Two)));
        }

        board
    }

    /// Square contents at `at`.
    ///
    /// Coordinates are validated by the input layer before they get here;
    /// an out-of-bounds `at` is a caller bug and panics.
    #[inline]
    pub fn get(&self, at: Coord) -> Square {
        self.squares[at.row as usize][at.col as usize]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, square: Square) {
        self.squares[at.row as usize][at.col as usize] = square;
    }

    /// All board coordinates in row-major order. Scan order matters to the
    /// callers that return the *first* match (king lookup, attacker lookup).
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIDE as i16)
            .flat_map(|row| (0..BOARD_SIDE as i16).map(move |col| Coord::new(row, col)))
    }

    /// First row-major occurrence of `player`'s king, if any. The engine
    /// assumes exactly one king per side; with several on the board the
    /// first one is "the" king.
    pub fn find_king(&self, player: Player) -> Option<Coord> {
        Self::coords().find(|&at| {
            self.get(at) == Some(Piece::new(PieceRank::King, player))
        })
    }

    /// Coordinates of all of `player`'s pieces in row-major order,
    /// optionally leaving out the king.
    pub fn pieces_of(&self, player: Player, include_king: bool) -> Vec<Coord> {
        Self::coords()
            .filter(|&at| match self.get(at) {
                Some(piece) => {
                    piece.owner == player && (include_king || piece.rank != PieceRank::King)
                }
                None => false,
            })
            .collect()
    }

    /// Per-player, per-rank piece counts. The scenario editor uses this to
    /// cap placement at the standard piece limits.
    pub fn census(&self) -> PieceCensus {
        let mut census = PieceCensus::default();
        for at in Self::coords() {
            if let Some(piece) = self.get(at) {
                census.counts[piece.owner.index()][piece.rank.index()] += 1;
            }
        }
        census
    }
}

/// Piece counts per player and rank, as produced by [`Board::census`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PieceCensus {
    counts: [[u8; 6]; 2],
}

impl PieceCensus {
    #[inline]
    pub fn count(&self, owner: Player, rank: PieceRank) -> u8 {
        self.counts[owner.index()][rank.index()]
    }
}

/// The persisted form of a position: whose turn it is plus the full grid in
/// row-major order. The front end does the actual file I/O; this type only
/// fixes the serialized shape.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub turn: Player,
    pub board: Board,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_census() {
        let census = Board::standard().census();
        for player in [Player::One, Player::Two] {
            assert_eq!(census.count(player, PieceRank::Pawn), 8);
            assert_eq!(census.count(player, PieceRank::Rook), 2);
            assert_eq!(census.count(player, PieceRank::Knight), 2);
            assert_eq!(census.count(player, PieceRank::Bishop), 2);
            assert_eq!(census.count(player, PieceRank::Queen), 1);
            assert_eq!(census.count(player, PieceRank::King), 1);
        }
    }

    #[test]
    fn standard_setup_corners_and_kings() {
        let board = Board::standard();
        assert_eq!(
            board.get(Coord::new(0, 0)),
            Some(Piece::new(PieceRank::Rook, Player::One))
        );
        assert_eq!(board.find_king(Player::One), Some(Coord::new(0, 4)));
        assert_eq!(board.find_king(Player::Two), Some(Coord::new(7, 4)));
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::standard();
        let mut copy = original.clone();
        copy.set(Coord::new(4, 4), Some(Piece::new(PieceRank::Queen, Player::One)));
        copy.set(Coord::new(0, 0), None);
        assert_eq!(original, Board::standard());
    }

    #[test]
    fn pieces_of_respects_king_flag() {
        let board = Board::standard();
        assert_eq!(board.pieces_of(Player::One, true).len(), 16);
        let without_king = board.pieces_of(Player::One, false);
        assert_eq!(without_king.len(), 15);
        assert!(!without_king.contains(&Coord::new(0, 4)));
    }

    #[test]
    fn saved_game_round_trips_through_json() {
        let saved = SavedGame {
            turn: Player::Two,
            board: Board::standard(),
        };
        let json = serde_json::to_string(&saved).unwrap();
        let restored: SavedGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, saved);
    }

    #[test]
    fn malformed_save_data_is_rejected() {
        let json = r#"{"turn":"Three","board":[]}"#;
        assert!(serde_json::from_str::<SavedGame>(json).is_err());
    }
}
