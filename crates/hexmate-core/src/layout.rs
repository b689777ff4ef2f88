//! Initial piece layouts for each board radius.
//!
//! Only White's half is tabulated; Black's pieces sit on the mirrored cells
//! (r and s swapped).

use crate::color::Color;
use crate::coord::HexCoord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::radius::BoardRadius;

use crate::piece_kind::PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

const fn at(q: i32, r: i32) -> HexCoord {
    HexCoord::from_axial(q, r)
}

/// White's starting cells on the radius-5 board.
const WHITE_RADIUS_FIVE: [(PieceKind, HexCoord); 18] = [
    // Bishop column from the southern corner
    (Bishop, at(0, -5)),
    (Bishop, at(0, -4)),
    (Bishop, at(0, -3)),
    // Left back edge
    (Queen, at(-1, -4)),
    (Knight, at(-2, -3)),
    (Rook, at(-3, -2)),
    // Right back edge
    (King, at(1, -5)),
    (Knight, at(2, -5)),
    (Rook, at(3, -5)),
    // Pawn chevron, left to right
    (Pawn, at(-4, -1)),
    (Pawn, at(-3, -1)),
    (Pawn, at(-2, -1)),
    (Pawn, at(-1, -1)),
    (Pawn, at(0, -1)),
    (Pawn, at(1, -2)),
    (Pawn, at(2, -3)),
    (Pawn, at(3, -4)),
    (Pawn, at(4, -5)),
];

/// White's starting cells on the radius-4 board.
const WHITE_RADIUS_FOUR: [(PieceKind, HexCoord); 16] = [
    (Bishop, at(0, -4)),
    (Bishop, at(0, -3)),
    (Bishop, at(0, -2)),
    (Queen, at(-1, -3)),
    (Knight, at(-1, -2)),
    (Rook, at(-2, -2)),
    (King, at(1, -4)),
    (Knight, at(1, -3)),
    (Rook, at(2, -4)),
    (Pawn, at(-3, -1)),
    (Pawn, at(-2, -1)),
    (Pawn, at(-1, -1)),
    (Pawn, at(0, -1)),
    (Pawn, at(1, -2)),
    (Pawn, at(2, -3)),
    (Pawn, at(3, -4)),
];

fn white_layout(radius: BoardRadius) -> &'static [(PieceKind, HexCoord)] {
    match radius {
        BoardRadius::Four => &WHITE_RADIUS_FOUR,
        BoardRadius::Five => &WHITE_RADIUS_FIVE,
    }
}

/// Every piece of the starting position, White's first.
pub fn initial_pieces(radius: BoardRadius) -> impl Iterator<Item = Piece> {
    let white = white_layout(radius);
    let white_pieces = white
        .iter()
        .map(|&(kind, coord)| Piece::new(kind, Color::White, coord));
    let black_pieces = white
        .iter()
        .map(|&(kind, coord)| Piece::new(kind, Color::Black, coord.mirrored()));
    white_pieces.chain(black_pieces)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::initial_pieces;
    use crate::color::Color;
    use crate::coord::HexCoord;
    use crate::piece_kind::PieceKind;
    use crate::radius::BoardRadius;

    #[test]
    fn piece_counts() {
        assert_eq!(initial_pieces(BoardRadius::Five).count(), 36);
        assert_eq!(initial_pieces(BoardRadius::Four).count(), 32);
    }

    #[test]
    fn all_cells_on_board_and_distinct() {
        for radius in BoardRadius::ALL {
            let cells: Vec<HexCoord> = initial_pieces(radius).map(|p| p.position()).collect();
            let distinct: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(cells.len(), distinct.len(), "overlap at radius {radius}");
            for c in cells {
                assert!(c.is_on_board(radius.value()), "{c:?} off radius {radius}");
            }
        }
    }

    #[test]
    fn one_king_per_side() {
        for radius in BoardRadius::ALL {
            for color in Color::ALL {
                let kings = initial_pieces(radius)
                    .filter(|p| p.color() == color && p.kind() == PieceKind::King)
                    .count();
                assert_eq!(kings, 1, "{color} at radius {radius}");
            }
        }
    }

    #[test]
    fn sides_stay_in_their_half() {
        for radius in BoardRadius::ALL {
            for piece in initial_pieces(radius) {
                match piece.color() {
                    Color::White => assert!(piece.position().r() < 0, "{piece:?}"),
                    Color::Black => assert!(piece.position().r() > 0, "{piece:?}"),
                }
            }
        }
    }

    #[test]
    fn radius_five_kings() {
        let kings: Vec<_> = initial_pieces(BoardRadius::Five)
            .filter(|p| p.kind() == PieceKind::King)
            .map(|p| (p.color(), p.position().to_tuple()))
            .collect();
        assert_eq!(
            kings,
            vec![(Color::White, (1, -5, 4)), (Color::Black, (1, 4, -5))]
        );
    }
}
