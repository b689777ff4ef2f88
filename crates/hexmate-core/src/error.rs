//! Error types for coordinates, pieces, moves and board setup.

use crate::color::Color;
use crate::coord::HexCoord;
use crate::piece_kind::PieceKind;

/// Errors from building a coordinate at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// The triple does not satisfy `q + r + s == 0`.
    #[error("invalid cubic coordinate: {q}+{r}+{s} != 0")]
    InvalidCoordinate {
        q: i32,
        r: i32,
        s: i32,
    },
}

/// Errors from building a piece out of textual parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    /// Unknown piece letter or color name.
    #[error("invalid piece spec: kind \"{kind}\", color \"{color}\"")]
    InvalidPieceSpec {
        /// The kind text as given.
        kind: String,
        /// The color text as given.
        color: String,
    },
}

/// Errors from moving or promoting pieces.
///
/// A rejected operation leaves the board unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the source cell.
    #[error("illegal move: no piece at {from}")]
    EmptySquare {
        from: HexCoord,
    },
    /// The piece on the source cell belongs to the side not to move.
    #[error("illegal move: piece at {from} is {color}, but it is not {color}'s turn")]
    NotYourTurn {
        from: HexCoord,
        color: Color,
    },
    /// The destination is not on the board.
    #[error("illegal move: {to} is off the board")]
    OffBoard {
        to: HexCoord,
    },
    /// The destination is not among the legal moves of the piece.
    #[error("illegal move: {from} cannot move to {to}")]
    NotLegal {
        from: HexCoord,
        to: HexCoord,
    },
    /// Promotion was requested on a cell that holds no pawn.
    #[error("no pawn to promote at {at}")]
    NoPawnAtCoordinate {
        at: HexCoord,
    },
    /// Pawns can only become rooks, knights, bishops or queens.
    #[error("invalid promotion type: {kind:?}")]
    InvalidPromotionType {
        kind: PieceKind,
    },
}

impl MoveError {
    /// Return `true` for the rejections that mean "this move is illegal".
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            MoveError::EmptySquare { .. }
                | MoveError::NotYourTurn { .. }
                | MoveError::OffBoard { .. }
                | MoveError::NotLegal { .. }
        )
    }
}

/// Errors from structural validation of a custom setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Only radius 4 and 5 boards exist.
    #[error("unsupported board radius {radius}, expected 4 or 5")]
    InvalidRadius {
        radius: i32,
    },
    /// A piece stands outside the board.
    #[error("piece at {at} is off the board")]
    OffBoard {
        at: HexCoord,
    },
    /// Two pieces claim the same cell.
    #[error("more than one piece at {at}")]
    Occupied {
        at: HexCoord,
    },
    /// A side has more than one king.
    #[error("more than one {color} king")]
    DuplicateKing {
        color: Color,
    },
}
