//! Pseudo-legal move generation.
//!
//! Generators only read the board through [`Occupancy`] and never mutate it.
//! Filtering out moves that leave the mover's king in check is the board's job.

mod attacks;
mod king;
mod knights;
mod pawns;
mod sliders;

use std::collections::HashSet;

use crate::coord::HexCoord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

pub use self::attacks::is_square_attacked;
pub use self::pawns::pawn_attack_origins;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Set of destination cells.
pub type MoveSet = HashSet<HexCoord>;

/// Read-only view of the board that move generation needs.
pub trait Occupancy {
    /// Return `true` if `coord` lies on the board.
    fn is_on_board(&self, coord: HexCoord) -> bool;

    /// Return the piece on `coord`, if any.
    fn piece_at(&self, coord: HexCoord) -> Option<&Piece>;

    /// Return `true` if a piece stands on `coord`.
    fn is_occupied(&self, coord: HexCoord) -> bool {
        self.piece_at(coord).is_some()
    }
}

/// Destinations `piece` could reach ignoring whether its own king ends up in check.
pub fn pseudo_legal_moves<B: Occupancy + ?Sized>(board: &B, piece: &Piece) -> MoveSet {
    let mut moves = MoveSet::new();
    let generate: fn(&B, &Piece, &mut MoveSet) = match piece.kind() {
        PieceKind::Pawn => gen_pawn,
        PieceKind::Knight => gen_knight,
        PieceKind::Bishop => gen_bishop,
        PieceKind::Rook => gen_rook,
        PieceKind::Queen => gen_queen,
        PieceKind::King => gen_king,
    };
    generate(board, piece, &mut moves);
    moves
}

/// `true` if `to` is on the board and empty or held by an enemy of `piece`.
#[inline]
fn can_land<B: Occupancy + ?Sized>(board: &B, piece: &Piece, to: HexCoord) -> bool {
    board.is_on_board(to)
        && board
            .piece_at(to)
            .is_none_or(|target| target.color() != piece.color())
}
