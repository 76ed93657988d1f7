//! Compass direction flags.
//!
//! A `Direction` is a set over the four compass points stored in the low
//! four bits of a byte: NORTH = 1, EAST = 2, SOUTH = 4, WEST = 8. Every one
//! of the 16 subsets is a valid value. Rotation is a circular shift inside
//! the 4-bit field, so rotating NORTH by one quarter turn gives EAST.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Serialize, Serializer};

/// A set of compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction(u8);

/// The four single-flag directions in clockwise order starting at north.
pub const CARDINALS: [Direction; 4] = [
    Direction::NORTH,
    Direction::EAST,
    Direction::SOUTH,
    Direction::WEST,
];

impl Direction {
    pub const NONE: Direction = Direction(0);
    pub const NORTH: Direction = Direction(1);
    pub const EAST: Direction = Direction(2);
    pub const SOUTH: Direction = Direction(4);
    pub const WEST: Direction = Direction(8);
    pub const NE: Direction = Direction(1 | 2);
    pub const NW: Direction = Direction(1 | 8);
    pub const SE: Direction = Direction(4 | 2);
    pub const SW: Direction = Direction(4 | 8);
    pub const NS: Direction = Direction(1 | 4);
    pub const EW: Direction = Direction(2 | 8);
    pub const NSE: Direction = Direction(1 | 4 | 2);
    pub const NSW: Direction = Direction(1 | 4 | 8);
    pub const NEW: Direction = Direction(1 | 2 | 8);
    pub const SEW: Direction = Direction(4 | 2 | 8);
    pub const NSEW: Direction = Direction(0xF);

    /// Builds a direction set from raw bits. Returns None above 0xF.
    pub const fn from_bits(bits: u8) -> Option<Direction> {
        if bits > 0xF {
            None
        } else {
            Some(Direction(bits))
        }
    }

    /// Returns the raw 4-bit mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Direction) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the set holds exactly one compass flag.
    pub const fn is_cardinal(self) -> bool {
        self.0.count_ones() == 1
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Rotates the set clockwise by `amount` quarter turns.
    ///
    /// `amount` is reduced modulo 4 first, so negative amounts rotate
    /// counter-clockwise: `rotate(-1) == rotate(3)`.
    pub const fn rotate(self, amount: i32) -> Direction {
        let k = amount.rem_euclid(4) as u32;
        let rotated = (self.0 as u16) << k;
        Direction(((rotated & 0xF) | (rotated >> 4)) as u8)
    }

    /// The set pointing the other way (rotation by two quarter turns).
    pub const fn opposite(self) -> Direction {
        self.rotate(2)
    }

    /// Row and column step for a single-flag direction.
    ///
    /// Returns None for empty or combined sets.
    pub const fn offset(self) -> Option<(isize, isize)> {
        match self.0 {
            1 => Some((-1, 0)),
            2 => Some((0, 1)),
            4 => Some((1, 0)),
            8 => Some((0, -1)),
            _ => None,
        }
    }

    /// Iterates the flags contained in this set in N, E, S, W order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        CARDINALS.into_iter().filter(move |d| self.contains(*d))
    }

    /// Full upper-case name of a single flag, e.g. "NORTH".
    pub const fn flag_name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("NORTH"),
            2 => Some("EAST"),
            4 => Some("SOUTH"),
            8 => Some("WEST"),
            _ => None,
        }
    }

    /// Compact compass name: "N", "SE", "NSEW", or "-" for the empty set.
    ///
    /// North/south letters come before east/west ones, matching the
    /// constant names above.
    pub fn name(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        for (flag, c) in [
            (Direction::NORTH, 'N'),
            (Direction::SOUTH, 'S'),
            (Direction::EAST, 'E'),
            (Direction::WEST, 'W'),
        ] {
            if self.contains(flag) {
                s.push(c);
            }
        }
        s
    }
}

impl BitOr for Direction {
    type Output = Direction;

    fn bitor(self, rhs: Direction) -> Direction {
        Direction(self.0 | rhs.0)
    }
}

impl BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Direction {
    type Output = Direction;

    fn bitand(self, rhs: Direction) -> Direction {
        Direction(self.0 & rhs.0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flag_name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.name()),
        }
    }
}

/// Serialized as the list of open flag names, e.g. `["NORTH", "EAST"]`.
impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().filter_map(Direction::flag_name))
    }
}
