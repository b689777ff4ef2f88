//! King move generation.

use crate::direction::ROOK_DIRECTIONS;
use crate::piece::Piece;

use super::{MoveSet, Occupancy, can_land};

/// Generate one-cell king steps along the six primary directions.
pub(super) fn gen_king<B: Occupancy + ?Sized>(board: &B, piece: &Piece, moves: &mut MoveSet) {
    let from = piece.position();
    for step in ROOK_DIRECTIONS {
        let to = from + step;
        if can_land(board, piece, to) {
            moves.insert(to);
        }
    }
}
