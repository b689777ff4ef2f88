//! Sliding piece move generation (rook, bishop, queen).

use crate::coord::HexCoord;
use crate::direction::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::piece::Piece;

use super::{MoveSet, Occupancy};

/// Walk each ray from `piece` until the edge or the first occupied cell.
///
/// The first occupied cell is included when it holds an enemy.
fn slide<B: Occupancy + ?Sized>(
    board: &B,
    piece: &Piece,
    directions: &[HexCoord],
    moves: &mut MoveSet,
) {
    let from = piece.position();
    for &step in directions {
        let mut to = from + step;
        while board.is_on_board(to) {
            match board.piece_at(to) {
                None => {
                    moves.insert(to);
                }
                Some(blocker) => {
                    if blocker.color() != piece.color() {
                        moves.insert(to);
                    }
                    break;
                }
            }
            to = to + step;
        }
    }
}

pub(super) fn gen_rook<B: Occupancy + ?Sized>(board: &B, piece: &Piece, moves: &mut MoveSet) {
    slide(board, piece, &ROOK_DIRECTIONS, moves);
}

pub(super) fn gen_bishop<B: Occupancy + ?Sized>(board: &B, piece: &Piece, moves: &mut MoveSet) {
    slide(board, piece, &BISHOP_DIRECTIONS, moves);
}

pub(super) fn gen_queen<B: Occupancy + ?Sized>(board: &B, piece: &Piece, moves: &mut MoveSet) {
    slide(board, piece, &QUEEN_DIRECTIONS, moves);
}
