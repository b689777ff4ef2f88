//! A piece standing on the board.

use std::fmt;

use crate::color::Color;
use crate::coord::HexCoord;
use crate::error::PieceError;
use crate::piece_kind::PieceKind;

/// A colored piece together with where it stands and whether it has moved.
///
/// Kind and color never change. `position` is kept equal to the key the piece
/// is stored under by the board's move operations, and `has_moved` only ever
/// goes from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: HexCoord,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: HexCoord) -> Piece {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    /// Build a piece from its textual kind letter and color name.
    ///
    /// # Errors
    ///
    /// Returns [`PieceError::InvalidPieceSpec`] if `kind` is not a single
    /// piece letter or `color` is not a known color name.
    pub fn from_spec(kind: &str, color: &str, position: HexCoord) -> Result<Piece, PieceError> {
        let invalid = || PieceError::InvalidPieceSpec {
            kind: kind.to_string(),
            color: color.to_string(),
        };
        let mut chars = kind.chars();
        let parsed_kind = match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::from_letter(c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        let parsed_color = Color::from_name(color).ok_or_else(invalid)?;
        Ok(Piece::new(parsed_kind, parsed_color, position))
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn position(&self) -> HexCoord {
        self.position
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Return a copy marked as already moved.
    #[inline]
    pub const fn with_moved(mut self) -> Piece {
        self.has_moved = true;
        self
    }

    /// Move to `to`; the piece counts as moved from now on.
    #[inline]
    pub(crate) fn relocate(&mut self, to: HexCoord) {
        self.position = to;
        self.has_moved = true;
    }

    /// The piece that replaces this one on promotion.
    #[inline]
    pub(crate) const fn promoted(&self, kind: PieceKind) -> Piece {
        Piece {
            kind,
            color: self.color,
            position: self.position,
            has_moved: true,
        }
    }

    /// Single-character symbol: uppercase for White, lowercase for Black.
    #[inline]
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{}{}", color_prefix, self.kind.letter())
    }
}
