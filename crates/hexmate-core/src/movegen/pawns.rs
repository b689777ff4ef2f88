//! Pawn move generation.

use crate::color::Color;
use crate::coord::HexCoord;
use crate::piece::Piece;

use super::{MoveSet, Occupancy};

/// Generate pawn pushes (single and, for unmoved pawns, double) and captures.
///
/// Pushes need empty cells; captures need an enemy on one of the two cells
/// adjacent to forward. Pawns never capture straight ahead.
pub(super) fn gen_pawn<B: Occupancy + ?Sized>(board: &B, piece: &Piece, moves: &mut MoveSet) {
    let from = piece.position();
    let forward = piece.color().pawn_forward().vector();

    let one_step = from + forward;
    if board.is_on_board(one_step) && !board.is_occupied(one_step) {
        moves.insert(one_step);

        if !piece.has_moved() {
            let two_step = one_step + forward;
            if board.is_on_board(two_step) && !board.is_occupied(two_step) {
                moves.insert(two_step);
            }
        }
    }

    for direction in piece.color().pawn_captures() {
        let target = from.neighbor(direction);
        if !board.is_on_board(target) {
            continue;
        }
        if board
            .piece_at(target)
            .is_some_and(|victim| victim.color() != piece.color())
        {
            moves.insert(target);
        }
    }
}

/// Cells from which a pawn of `attacker` would capture on `target`.
pub fn pawn_attack_origins(target: HexCoord, attacker: Color) -> [HexCoord; 2] {
    attacker
        .pawn_captures()
        .map(|direction| target - direction.vector())
}
