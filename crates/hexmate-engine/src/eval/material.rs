//! Material balance.

use hexmate_core::{Board, Color, PieceKind};

use super::signed;

/// Material values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   | 1     |
/// | Knight | 3     |
/// | Bishop | 3     |
/// | Rook   | 5     |
/// | Queen  | 9     |
/// | King   | 1000  |
pub const MATERIAL_VALUE: [f64; PieceKind::COUNT] = [
    1.0,    // Pawn
    3.0,    // Knight
    3.0,    // Bishop
    5.0,    // Rook
    9.0,    // Queen
    1000.0, // King
];

/// Material of `perspective` minus material of the opponent.
pub fn material(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|piece| signed(piece, perspective, MATERIAL_VALUE[piece.kind().index()]))
        .sum()
}
