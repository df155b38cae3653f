//! Tiles: a colored number 1-13 or a joker.
//!
//! The "joker has no color and no number" invariant lives in the type:
//! `Tile::Joker` simply has no fields. The `color()` / `number()` accessors
//! give the optional view used by the rule checks.
//!
//! ## Text form
//!
//! ```
//! use rummikub_engine::core::{Color, Tile};
//!
//! let tile: Tile = "r13".parse().unwrap();
//! assert_eq!(tile, Tile::new(Color::Red, 13));
//! assert_eq!(tile.to_string(), "r13");
//!
//! let joker: Tile = "j".parse().unwrap();
//! assert!(joker.is_joker());
//! ```

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TileParseError;

/// Lowest tile number.
pub const MIN_NUMBER: u8 = 1;

/// Highest tile number.
pub const MAX_NUMBER: u8 = 13;

/// Tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Single-letter code used in the text form.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Yellow => 'y',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// A single tile.
///
/// Tiles are plain values: two red sevens are interchangeable, and so are
/// two jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// A colored number in `MIN_NUMBER..=MAX_NUMBER`.
    Number { color: Color, number: u8 },
    /// Wildcard.
    Joker,
}

impl Tile {
    /// Create a numbered tile.
    ///
    /// Panics if `number` is outside 1..=13. Use [`Tile::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(color: Color, number: u8) -> Self {
        assert!(
            (MIN_NUMBER..=MAX_NUMBER).contains(&number),
            "Number must be 1-13"
        );
        Tile::Number { color, number }
    }

    /// Create a numbered tile, rejecting numbers outside 1..=13.
    pub fn try_new(color: Color, number: u8) -> Result<Self, TileParseError> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            Ok(Tile::Number { color, number })
        } else {
            Err(TileParseError::NumberOutOfRange(number))
        }
    }

    /// Create a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Tile::Joker
    }

    /// Color, or `None` for a joker.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self {
            Tile::Number { color, .. } => Some(*color),
            Tile::Joker => None,
        }
    }

    /// Number, or `None` for a joker.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        match self {
            Tile::Number { number, .. } => Some(*number),
            Tile::Joker => None,
        }
    }

    /// Check if this is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Tile::Joker)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Number { color, number } => write!(f, "{}{}", color.code(), number),
            Tile::Joker => f.write_str("j"),
        }
    }
}

impl FromStr for Tile {
    type Err = TileParseError;

    /// Parse `r13`, `B1`, `y7`, `g9`, `j` or `joker`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(TileParseError::Empty)?;

        if s.eq_ignore_ascii_case("j") || s.eq_ignore_ascii_case("joker") {
            return Ok(Tile::Joker);
        }

        let color = Color::from_code(first)
            .ok_or_else(|| TileParseError::InvalidColor(first.to_string()))?;

        let rest = chars.as_str();
        let number: u8 = rest
            .parse()
            .map_err(|_| TileParseError::InvalidNumber(rest.to_string()))?;

        Tile::try_new(color, number)
    }
}

/// Count tiles by value.
pub fn tile_counts(tiles: impl IntoIterator<Item = Tile>) -> FxHashMap<Tile, usize> {
    let mut counts = FxHashMap::default();
    for tile in tiles {
        *counts.entry(tile).or_insert(0) += 1;
    }
    counts
}

/// Parse a whitespace-separated list of tiles, e.g. `"r1 r2 j"`.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>, TileParseError> {
    input.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let tile = Tile::new(Color::Blue, 9);
        assert_eq!(tile.color(), Some(Color::Blue));
        assert_eq!(tile.number(), Some(9));
        assert!(!tile.is_joker());

        let joker = Tile::joker();
        assert_eq!(joker.color(), None);
        assert_eq!(joker.number(), None);
        assert!(joker.is_joker());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Tile::new(Color::Red, 5), Tile::new(Color::Red, 5));
        assert_ne!(Tile::new(Color::Red, 5), Tile::new(Color::Blue, 5));
        assert_eq!(Tile::joker(), Tile::joker());
    }

    #[test]
    #[should_panic(expected = "Number must be 1-13")]
    fn test_new_rejects_zero() {
        let _ = Tile::new(Color::Red, 0);
    }

    #[test]
    fn test_try_new() {
        assert!(Tile::try_new(Color::Green, 13).is_ok());
        assert_eq!(
            Tile::try_new(Color::Green, 14),
            Err(TileParseError::NumberOutOfRange(14))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("r1".parse::<Tile>(), Ok(Tile::new(Color::Red, 1)));
        assert_eq!("B12".parse::<Tile>(), Ok(Tile::new(Color::Blue, 12)));
        assert_eq!(" y7 ".parse::<Tile>(), Ok(Tile::new(Color::Yellow, 7)));
        assert_eq!("joker".parse::<Tile>(), Ok(Tile::Joker));
        assert_eq!("J".parse::<Tile>(), Ok(Tile::Joker));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Tile>(), Err(TileParseError::Empty));
        assert_eq!(
            "x3".parse::<Tile>(),
            Err(TileParseError::InvalidColor("x".into()))
        );
        assert_eq!(
            "r".parse::<Tile>(),
            Err(TileParseError::InvalidNumber(String::new()))
        );
        assert_eq!(
            "g0".parse::<Tile>(),
            Err(TileParseError::NumberOutOfRange(0))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for color in Color::ALL {
            for number in MIN_NUMBER..=MAX_NUMBER {
                let tile = Tile::new(color, number);
                assert_eq!(tile.to_string().parse::<Tile>(), Ok(tile));
            }
        }
        assert_eq!(Tile::joker().to_string(), "j");
    }

    #[test]
    fn test_parse_tiles() {
        let tiles = parse_tiles("r1 r2 j").unwrap();
        assert_eq!(
            tiles,
            vec![Tile::new(Color::Red, 1), Tile::new(Color::Red, 2), Tile::Joker]
        );
        assert!(parse_tiles("r1 q2").is_err());
    }
}
