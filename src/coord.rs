use std::ops::{Add, AddAssign, Sub};

/// A board coordinate. `(0, 0)` is the corner holding PlayerOne's first rook
/// in the standard setup.
///
/// Fields are signed so that delta arithmetic stays total; only coordinates
/// with both fields in `[0, 7]` name a real square.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    #[inline]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Unit step from `self` toward `other` (component-wise signum).
    #[inline]
    pub fn step_toward(self, other: Coord) -> Coord {
        Coord::new((other.row - self.row).signum(), (other.col - self.col).signum())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// The 8 king-adjacent offsets, `(0, 0)` excluded.
pub const KING_STEPS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
];
