//! Square attack detection.
//!
//! Works backwards from the target: look outwards along every line a piece
//! could attack from and check what stands at the end of it.

use crate::color::Color;
use crate::coord::HexCoord;
use crate::direction::{BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use crate::piece_kind::PieceKind;

use super::Occupancy;
use super::pawns::pawn_attack_origins;

/// Return `true` if any piece of color `by` attacks `target`.
///
/// A pawn attacks only its two capture cells, never the cell straight ahead.
/// Sliders are blocked by the first piece on the ray, whatever its color.
pub fn is_square_attacked<B: Occupancy + ?Sized>(board: &B, target: HexCoord, by: Color) -> bool {
    let is_enemy = |coord: HexCoord, kinds: &[PieceKind]| {
        board
            .piece_at(coord)
            .is_some_and(|p| p.color() == by && kinds.contains(&p.kind()))
    };

    if pawn_attack_origins(target, by)
        .into_iter()
        .any(|origin| is_enemy(origin, &[PieceKind::Pawn]))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&offset| is_enemy(target + offset, &[PieceKind::Knight]))
    {
        return true;
    }

    if ROOK_DIRECTIONS
        .iter()
        .any(|&step| is_enemy(target + step, &[PieceKind::King]))
    {
        return true;
    }

    let rays = [
        (&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
        (&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, sliders) in rays {
        for &step in directions {
            if first_piece_on_ray(board, target, step).is_some_and(|hit| is_enemy(hit, &sliders)) {
                return true;
            }
        }
    }

    false
}

/// Cell of the first piece hit walking from `from` along `step`, if any.
fn first_piece_on_ray<B: Occupancy + ?Sized>(
    board: &B,
    from: HexCoord,
    step: HexCoord,
) -> Option<HexCoord> {
    let mut cursor = from + step;
    while board.is_on_board(cursor) {
        if board.is_occupied(cursor) {
            return Some(cursor);
        }
        cursor = cursor + step;
    }
    None
}
