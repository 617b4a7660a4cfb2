use std::fmt::{self, Display};
use std::ops::{Neg, Range};

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Number of houses on either player's row.
pub const HOUSES_PER_ROW: usize = 6;
/// Number of playable houses total (both rows, excludes the two stores).
pub const NUM_HOUSES: usize = 12;
/// Index of SOUTH's captured-seed store.
pub const SOUTH_STORE: usize = 12;
/// Index of NORTH's captured-seed store.
pub const NORTH_STORE: usize = 13;
/// Seeds on the board immediately after `initial_board`.
pub const TOTAL_SEEDS: i32 = 48;

/// A source house, 0..11. `NULL_MOVE` denotes "no move" (e.g. at a
/// terminal position, or when a search aborts before finding one).
pub type Move = i8;

pub const NULL_MOVE: Move = -1;

/// Fourteen houses in sowing order (0..11) followed by SOUTH's store (12)
/// and NORTH's store (13). A pure value: every mutation produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(pub [i32; 14]);

impl Board {
    pub fn sum(&self) -> i32 {
        self.0.iter().sum()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for h in (6..12).rev() {
            write!(f, "{:>3}", self.0[h])?;
        }
        writeln!(f)?;
        write!(f, "{:>3}", self.0[NORTH_STORE])?;
        write!(f, "                        ")?;
        writeln!(f, "{:>3}", self.0[SOUTH_STORE])?;
        write!(f, "   ")?;
        for h in 0..6 {
            write!(f, "{:>3}", self.0[h])?;
        }
        Ok(())
    }
}

/// Side to move. Carries its own sign so negamax scoring can multiply by
/// `turn` directly rather than branching on an enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i8)]
pub enum Side {
    South = 1,
    North = -1,
}

impl Side {
    pub fn sign(self) -> i32 {
        i8::from(self) as i32
    }

    /// This side's own row of houses.
    pub fn row(self) -> Range<usize> {
        match self {
            Side::South => 0..HOUSES_PER_ROW,
            Side::North => HOUSES_PER_ROW..NUM_HOUSES,
        }
    }

    /// The opponent's row of houses.
    pub fn opponent_row(self) -> Range<usize> {
        (-self).row()
    }

    pub fn store(self) -> usize {
        match self {
            Side::South => SOUTH_STORE,
            Side::North => NORTH_STORE,
        }
    }
}

impl Neg for Side {
    type Output = Side;

    fn neg(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::South => "S",
            Side::North => "N",
        })
    }
}
