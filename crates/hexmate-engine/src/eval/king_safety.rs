//! King exposure penalty.
//!
//! A king is penalised for every primary-direction neighbour that is not a
//! friendly piece, including neighbours off the board.

use hexmate_core::{Board, Color, Direction, HexCoord, PieceKind};

use super::signed;

/// Penalty per neighbour not covered by a friendly piece.
pub const EXPOSED_SIDE_PENALTY: f64 = 0.5;

/// Number of friendly pieces on the six cells around the king on `king`.
fn friendly_neighbours(board: &Board, king: HexCoord, color: Color) -> usize {
    Direction::ALL
        .iter()
        .filter(|&&direction| {
            board
                .piece_at(king.neighbor(direction))
                .is_some_and(|piece| piece.color() == color)
        })
        .count()
}

/// Exposure penalty of `perspective`'s king minus that of the opponent's.
///
/// Larger means `perspective` is worse off; the caller subtracts it.
pub fn king_exposure(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .filter(|piece| piece.kind() == PieceKind::King)
        .map(|king| {
            let covered = friendly_neighbours(board, king.position(), king.color());
            let open = (Direction::COUNT - covered) as f64;
            signed(king, perspective, open * EXPOSED_SIDE_PENALTY)
        })
        .sum()
}
