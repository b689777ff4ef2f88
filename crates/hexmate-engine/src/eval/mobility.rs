//! Mobility bonus from the number of legal moves.
//!
//! Uses [`Board::legal_moves`], which is empty for every piece of the side
//! not to move. Only the side to move ever earns mobility, so the term is
//! positive for one perspective and negative for the other.

use hexmate_core::{Board, Color};

use super::signed;

/// Bonus per legal destination.
pub const MOBILITY_BONUS: f64 = 0.05;

/// Sum of `legal move count * 0.05` over all pieces, signed by owner.
pub fn mobility(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|piece| {
            let count = board.legal_moves(piece.position()).len();
            signed(piece, perspective, count as f64 * MOBILITY_BONUS)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use hexmate_core::{Board, BoardRadius, Color};

    use super::mobility;

    #[test]
    fn only_side_to_move_has_mobility() {
        let mut board = Board::new_game(BoardRadius::Five);
        // 50 legal moves for White at the start.
        assert!((mobility(&board, Color::White) - 2.5).abs() < 1e-9);
        assert!((mobility(&board, Color::Black) + 2.5).abs() < 1e-9);

        let (from, to) = board.all_legal_moves()[0];
        board.play(from, to).unwrap();
        assert!(
            mobility(&board, Color::White) < 0.0,
            "after White moves, only Black's moves count"
        );
    }
}
