use serde::{Deserialize, Serialize};

/// One of the two sides. A square's occupant (if any) is owned by exactly one
/// player; empty squares have no owner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row direction this player's pawns advance in.
    #[inline]
    pub fn pawn_direction(self) -> i16 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Row where this player's pawns start (and may take a two-square step).
    #[inline]
    pub fn pawn_start_row(self) -> i16 {
        match self {
            Player::One => 1,
            Player::Two => 6,
        }
    }

    /// Last row for this player's pawns; reaching it forces promotion.
    #[inline]
    pub fn promotion_row(self) -> i16 {
        match self {
            Player::One => 7,
            Player::Two => 0,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// The kind of piece occupying a square. An empty square holds no
/// [`Piece`] at all, so there is no `Empty` variant here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PieceRank {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceRank {
    pub fn name(self) -> &'static str {
        match self {
            PieceRank::Pawn => "pawn",
            PieceRank::Rook => "rook",
            PieceRank::Knight => "knight",
            PieceRank::Bishop => "bishop",
            PieceRank::Queen => "queen",
            PieceRank::King => "king",
        }
    }

    /// One-line statement of this piece's movement rule, used as the
    /// diagnostic for shape-illegal moves.
    pub fn move_rule(self) -> &'static str {
        match self {
            PieceRank::Pawn => {
                "pawns move straight forward one square (two from their starting row), \
                 or one square diagonally forward only when capturing"
            }
            PieceRank::Rook => "rooks move straight vertically or horizontally",
            PieceRank::Knight => "knights move two squares on one axis and one on the other",
            PieceRank::Bishop => "bishops move diagonally",
            PieceRank::Queen => "queens move straight vertically, horizontally or diagonally",
            PieceRank::King => "kings move to an adjacent square",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            PieceRank::Pawn => 0,
            PieceRank::Rook => 1,
            PieceRank::Knight => 2,
            PieceRank::Bishop => 3,
            PieceRank::Queen => 4,
            PieceRank::King => 5,
        }
    }
}

/// An occupied square's contents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub rank: PieceRank,
    pub owner: Player,
}

impl Piece {
    #[inline]
    pub const fn new(rank: PieceRank, owner: Player) -> Self {
        Self { rank, owner }
    }
}

/// A board square: occupied or empty. "Owner is none iff rank is empty"
/// holds by construction.
pub type Square = Option<Piece>;
