//! Bonus for pieces near the center of the board.

use hexmate_core::{Board, Color, HexCoord};

use super::signed;

/// Bonus per step of distance from the edge ring.
pub const CENTER_STEP_BONUS: f64 = 0.1;

/// Sum of `(radius - distance to center) * 0.1` over all pieces, signed by owner.
pub fn centrality(board: &Board, perspective: Color) -> f64 {
    let radius = board.radius().value();
    board
        .pieces()
        .map(|piece| {
            let steps_in = radius - piece.position().distance(HexCoord::ORIGIN);
            signed(piece, perspective, f64::from(steps_in) * CENTER_STEP_BONUS)
        })
        .sum()
}
