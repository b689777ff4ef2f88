//! Side colors and the pawn geometry that depends on them.

use std::fmt;
use std::ops::Not;

use crate::direction::Direction;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Lowercase name, as used at the text boundary.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Parse a color name (case-insensitive, `"w"`/`"b"` accepted).
    pub fn from_name(name: &str) -> Option<Color> {
        match name.to_ascii_lowercase().as_str() {
            "white" | "w" => Some(Color::White),
            "black" | "b" => Some(Color::Black),
            _ => None,
        }
    }

    /// Direction this side's pawns advance in.
    #[inline]
    pub const fn pawn_forward(self) -> Direction {
        match self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// The two primary directions adjacent to forward; pawns capture along these.
    #[inline]
    pub const fn pawn_captures(self) -> [Direction; 2] {
        let forward = self.pawn_forward();
        [forward.rotate(5), forward.rotate(1)]
    }

    /// The `r` value of the far edge, where this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self, radius: i32) -> i32 {
        match self {
            Color::White => radius,
            Color::Black => -radius,
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
