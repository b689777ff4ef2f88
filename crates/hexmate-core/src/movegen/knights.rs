//! Knight move generation.

use crate::direction::KNIGHT_OFFSETS;
use crate::piece::Piece;

use super::{MoveSet, Occupancy, can_land};

/// Generate knight jumps. Knights ignore blockers on the way.
pub(super) fn gen_knight<B: Occupancy + ?Sized>(board: &B, piece: &Piece, moves: &mut MoveSet) {
    let from = piece.position();
    for offset in KNIGHT_OFFSETS {
        let to = from + offset;
        if can_land(board, piece, to) {
            moves.insert(to);
        }
    }
}
