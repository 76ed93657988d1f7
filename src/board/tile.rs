//! Tiles and the markers printed on them.
//!
//! A tile carries a set of open paths and at most one occupant: either one
//! of the 24 quest items or the start marker of one of the four players.

use std::fmt;

use serde::{Serialize, Serializer};

use super::direction::Direction;

/// The number of quest items in the game.
pub const QUEST_COUNT: usize = 24;

/// A collectible quest item.
///
/// Each quest appears on exactly one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quest {
    Bat = 0,
    Book = 1,
    Candelabra = 2,
    Dragon = 3,
    Emerald = 4,
    Ghost = 5,
    Helmet = 6,
    Spider = 7,
    Genie = 8,
    Keys = 9,
    Lizard = 10,
    Map = 11,
    Crown = 12,
    Owl = 13,
    Pouch = 14,
    Goblin = 15,
    Ring = 16,
    Scarab = 17,
    Chest = 18,
    Skull = 19,
    Witch = 20,
    Sword = 21,
    Mouse = 22,
    Moth = 23,
}

/// All quests in declaration order.
pub const ALL_QUESTS: [Quest; QUEST_COUNT] = [
    Quest::Bat,
    Quest::Book,
    Quest::Candelabra,
    Quest::Dragon,
    Quest::Emerald,
    Quest::Ghost,
    Quest::Helmet,
    Quest::Spider,
    Quest::Genie,
    Quest::Keys,
    Quest::Lizard,
    Quest::Map,
    Quest::Crown,
    Quest::Owl,
    Quest::Pouch,
    Quest::Goblin,
    Quest::Ring,
    Quest::Scarab,
    Quest::Chest,
    Quest::Skull,
    Quest::Witch,
    Quest::Sword,
    Quest::Mouse,
    Quest::Moth,
];

impl Quest {
    /// Returns the single-letter symbol printed on the tile.
    pub const fn symbol(self) -> char {
        match self {
            Quest::Bat => 'A',
            Quest::Book => 'B',
            Quest::Candelabra => 'C',
            Quest::Dragon => 'D',
            Quest::Emerald => 'E',
            Quest::Ghost => 'G',
            Quest::Helmet => 'H',
            Quest::Spider => 'I',
            Quest::Genie => 'J',
            Quest::Keys => 'K',
            Quest::Lizard => 'L',
            Quest::Map => 'M',
            Quest::Crown => 'N',
            Quest::Owl => 'O',
            Quest::Pouch => 'P',
            Quest::Goblin => 'Q',
            Quest::Ring => 'R',
            Quest::Scarab => 'S',
            Quest::Chest => 'T',
            Quest::Skull => 'U',
            Quest::Witch => 'W',
            Quest::Sword => 'X',
            Quest::Mouse => 'Y',
            Quest::Moth => 'Z',
        }
    }

    /// Upper-case name used in JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            Quest::Bat => "BAT",
            Quest::Book => "BOOK",
            Quest::Candelabra => "CANDELABRA",
            Quest::Dragon => "DRAGON",
            Quest::Emerald => "EMERALD",
            Quest::Ghost => "GHOST",
            Quest::Helmet => "HELMET",
            Quest::Spider => "SPIDER",
            Quest::Genie => "GENIE",
            Quest::Keys => "KEYS",
            Quest::Lizard => "LIZARD",
            Quest::Map => "MAP",
            Quest::Crown => "CROWN",
            Quest::Owl => "OWL",
            Quest::Pouch => "POUCH",
            Quest::Goblin => "GOBLIN",
            Quest::Ring => "RING",
            Quest::Scarab => "SCARAB",
            Quest::Chest => "CHEST",
            Quest::Skull => "SKULL",
            Quest::Witch => "WITCH",
            Quest::Sword => "SWORD",
            Quest::Mouse => "MOUSE",
            Quest::Moth => "MOTH",
        }
    }
}

impl fmt::Display for Quest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

/// A player color. Each color owns one start corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Yellow = 1,
    Blue = 2,
    Green = 3,
}

/// All colors in seating order.
pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Blue, Color::Green];

impl Color {
    /// Upper-case name used in JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
        }
    }

    /// Lower-case initial drawn on the start tile.
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Yellow => 'y',
            Color::Blue => 'b',
            Color::Green => 'g',
        }
    }

    /// Parses a color from its name, case-insensitively.
    pub fn from_name(s: &str) -> Option<Color> {
        ALL_COLORS
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// What sits on a tile: a quest item or a player's start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Quest(Quest),
    Start(Color),
}

impl Occupant {
    pub const fn symbol(self) -> char {
        match self {
            Occupant::Quest(q) => q.symbol(),
            Occupant::Start(c) => c.symbol(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Occupant::Quest(q) => q.name(),
            Occupant::Start(c) => c.name(),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Quest(q) => write!(f, "{}", q),
            Occupant::Start(c) => write!(f, "{} start", c),
        }
    }
}

impl Serialize for Occupant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A maze tile: open paths plus an optional occupant.
///
/// Rotation only ever changes `paths`; the occupant stays with the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub paths: Direction,
    #[serde(rename = "item")]
    pub occupant: Option<Occupant>,
}

impl Tile {
    pub const fn new(paths: Direction, occupant: Option<Occupant>) -> Self {
        Tile { paths, occupant }
    }

    /// A tile with no occupant.
    pub const fn blank(paths: Direction) -> Self {
        Tile {
            paths,
            occupant: None,
        }
    }

    pub const fn quest(paths: Direction, quest: Quest) -> Self {
        Tile {
            paths,
            occupant: Some(Occupant::Quest(quest)),
        }
    }

    pub const fn start(paths: Direction, color: Color) -> Self {
        Tile {
            paths,
            occupant: Some(Occupant::Start(color)),
        }
    }

    /// Returns true if the tile has a path leading out in `dir`.
    pub const fn is_open(&self, dir: Direction) -> bool {
        self.paths.contains(dir)
    }

    /// Returns a copy of this tile rotated by `amount` quarter turns.
    pub const fn rotated(self, amount: i32) -> Tile {
        Tile {
            paths: self.paths.rotate(amount),
            occupant: self.occupant,
        }
    }

    /// Rotates this tile in place.
    pub fn rotate(&mut self, amount: i32) {
        self.paths = self.paths.rotate(amount);
    }

    /// The character drawn in the middle of the tile, blank when empty.
    pub fn symbol(&self) -> char {
        self.occupant.map_or(' ', Occupant::symbol)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occupant {
            Some(o) => write!(f, "{} {}", self.paths.name(), o),
            None => write!(f, "{}", self.paths.name()),
        }
    }
}
