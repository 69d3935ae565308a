//! Value types shared by every part of the engine: squares, teams, and the
//! eight slide directions.

use std::fmt;

pub const BOARD_SIZE: i8 = 8;

/// On-board square, stored as `rank * 8 + file` (`0 == a1`, `63 == h8`).
///
/// Off-board coordinates are not representable; stepping off the edge yields
/// `None` from [`Square::offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file >= BOARD_SIZE || rank < 0 || rank >= BOARD_SIZE {
            return None;
        }
        Some(Square((rank * BOARD_SIZE + file) as u8))
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> i8 {
        (self.0 % 8) as i8
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Square::new(self.file() + d_file, self.rank() + d_rank)
    }

    /// `(d_file, d_rank)` from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Square) -> (i8, i8) {
        (other.file() - self.file(), other.rank() - self.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file() as u8);
        let rank = char::from(b'1' + self.rank() as u8);
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank delta of one step "forward" for this team.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// The two ranks nearest this team's edge of the board.
    #[inline]
    pub const fn is_back_zone(self, rank: i8) -> bool {
        match self {
            Team::White => rank <= 1,
            Team::Black => rank >= 6,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (0, 1),
            Direction::S => (0, -1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
            Direction::NE => (1, 1),
            Direction::NW => (-1, 1),
            Direction::SE => (1, -1),
            Direction::SW => (-1, -1),
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::N => 1 << 0,
            Direction::S => 1 << 1,
            Direction::E => 1 << 2,
            Direction::W => 1 << 3,
            Direction::NE => 1 << 4,
            Direction::NW => 1 << 5,
            Direction::SE => 1 << 6,
            Direction::SW => 1 << 7,
        }
    }
}

/// The eight direction flags of a slide profile, packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const NONE: DirectionSet = DirectionSet(0);
    pub const ORTHOGONAL: DirectionSet = DirectionSet(0b0000_1111);
    pub const DIAGONAL: DirectionSet = DirectionSet(0b1111_0000);
    pub const ALL: DirectionSet = DirectionSet(0xFF);

    pub fn from_directions(directions: &[Direction]) -> Self {
        DirectionSet(directions.iter().fold(0u8, |acc, d| acc | d.bit()))
    }

    #[inline]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_all(self) -> bool {
        self.0 == 0xFF
    }

    /// Enabled directions in N, S, E, W, NE, NW, SE, SW order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

/// Set of squares packed into a 64-bit mask (bit `i` is `Square::from_index(i)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Square::from_index(index)
        })
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_off_the_edge_is_none() {
        let a1 = Square::new(0, 0).expect("a1");
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(7, 7), Square::new(7, 7));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn square_displays_algebraic_name() {
        assert_eq!(Square::new(4, 0).expect("e1").to_string(), "e1");
        assert_eq!(Square::new(7, 7).expect("h8").to_string(), "h8");
    }

    #[test]
    fn back_zone_is_two_home_ranks() {
        assert!(Team::White.is_back_zone(1));
        assert!(!Team::White.is_back_zone(2));
        assert!(Team::Black.is_back_zone(6));
        assert!(!Team::Black.is_back_zone(5));
    }

    #[test]
    fn direction_sets_cover_expected_directions() {
        assert_eq!(DirectionSet::ORTHOGONAL.iter().count(), 4);
        assert!(DirectionSet::DIAGONAL.contains(Direction::NE));
        assert!(!DirectionSet::DIAGONAL.contains(Direction::N));
        assert!(DirectionSet::ALL.is_all());
        assert_eq!(
            DirectionSet::from_directions(&[Direction::N, Direction::S, Direction::E, Direction::W]),
            DirectionSet::ORTHOGONAL
        );
    }

    #[test]
    fn square_set_iterates_in_index_order() {
        let squares = [Square::new(3, 3), Square::new(0, 0), Square::new(7, 7)];
        let set: SquareSet = squares.into_iter().flatten().collect();
        assert_eq!(set.len(), 3);
        let listed: Vec<usize> = set.iter().map(Square::index).collect();
        assert_eq!(listed, vec![0, 27, 63]);
    }
}
