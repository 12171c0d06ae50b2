//! Piece colors.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::ColorParseError;

/// A piece color: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row this color's pawns start on (and may double-step from).
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Lowercase name, as used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ColorParseError {
                found: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn pawn_rows() {
        assert_eq!(Color::White.pawn_home_row(), 1);
        assert_eq!(Color::Black.pawn_home_row(), 6);
        assert_eq!(Color::White.promotion_row(), 7);
        assert_eq!(Color::Black.promotion_row(), 0);
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "white");
        assert_eq!(format!("{}", Color::Black), "black");
    }

    #[test]
    fn parse() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!(" Black ".parse::<Color>(), Ok(Color::Black));
        assert_eq!("b".parse::<Color>(), Ok(Color::Black));
        assert!("red".parse::<Color>().is_err());
    }
}
