//! Cell labels and move notation.
//!
//! Columns are lettered by `q` from `A` (q = -R) onward, rows are numbered by
//! `r` from 1 (r = -R) upward. On the radius-5 board that gives columns `A-K`
//! and rows `1-11`.

use std::fmt;

use crate::coord::HexCoord;
use crate::piece_kind::PieceKind;

/// Column letter for `q` on a board of radius `radius`.
#[inline]
pub fn column_label(q: i32, radius: i32) -> char {
    char::from(b'A' + (q + radius) as u8)
}

/// Row number for `r` on a board of radius `radius`.
#[inline]
pub fn row_label(r: i32, radius: i32) -> i32 {
    r + radius + 1
}

/// Label of a cell, e.g. `"F6"` for the center of the radius-5 board.
pub fn cell_label(coord: HexCoord, radius: i32) -> String {
    format!("{}{}", column_label(coord.q(), radius), row_label(coord.r(), radius))
}

/// Parse a cell label back into a coordinate (case-insensitive column letter).
///
/// Returns `None` if the label is malformed or names a cell off the board.
pub fn parse_cell_label(label: &str, radius: i32) -> Option<HexCoord> {
    let mut chars = label.chars();
    let column = chars.next()?.to_ascii_uppercase();
    if !column.is_ascii_uppercase() {
        return None;
    }
    let row: i32 = chars.as_str().parse().ok()?;
    if !(1..=2 * radius + 1).contains(&row) {
        return None;
    }
    let q = (column as i32 - 'A' as i32) - radius;
    let r = row - radius - 1;
    let coord = HexCoord::from_axial(q, r);
    coord.is_on_board(radius).then_some(coord)
}

/// Notation for a move: piece letter (none for pawns), `x` on capture, then
/// the destination label.
pub fn move_notation(kind: PieceKind, capture: bool, to: HexCoord, radius: i32) -> String {
    let capture_mark = if capture { "x" } else { "" };
    format!("{}{}{}", kind.notation_prefix(), capture_mark, cell_label(to, radius))
}

/// One entry of the move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: HexCoord,
    pub to: HexCoord,
    pub notation: String,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.notation, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_five_labels_span_a_to_k_and_1_to_11() {
        assert_eq!(column_label(-5, 5), 'A');
        assert_eq!(column_label(0, 5), 'F');
        assert_eq!(column_label(5, 5), 'K');
        assert_eq!(row_label(-5, 5), 1);
        assert_eq!(row_label(5, 5), 11);
        assert_eq!(cell_label(HexCoord::ORIGIN, 5), "F6");
    }

    #[test]
    fn radius_four_labels() {
        assert_eq!(column_label(-4, 4), 'A');
        assert_eq!(column_label(4, 4), 'I');
        assert_eq!(cell_label(HexCoord::ORIGIN, 4), "E5");
    }

    #[test]
    fn parse_label_roundtrip() {
        for radius in [4, 5] {
            for coord in HexCoord::all_on_board(radius) {
                let label = cell_label(coord, radius);
                assert_eq!(parse_cell_label(&label, radius), Some(coord), "{label}");
            }
        }
        assert_eq!(parse_cell_label("f6", 5), Some(HexCoord::ORIGIN));
    }

    #[test]
    fn parse_label_rejects_garbage_and_off_board() {
        assert_eq!(parse_cell_label("", 5), None);
        assert_eq!(parse_cell_label("6F", 5), None);
        assert_eq!(parse_cell_label("F", 5), None);
        // A1 is q = -5, r = -5, which has s = 10.
        assert_eq!(parse_cell_label("A1", 5), None);
        assert_eq!(parse_cell_label("L6", 5), None);
        assert_eq!(parse_cell_label("F-2147483648", 5), None);
        assert_eq!(parse_cell_label("F2147483647", 5), None);
        assert_eq!(parse_cell_label("F0", 5), None);
    }

    #[test]
    fn notation_formats() {
        let to = HexCoord::from_axial(0, 0);
        assert_eq!(move_notation(PieceKind::Pawn, false, to, 5), "F6");
        assert_eq!(move_notation(PieceKind::Knight, true, to, 5), "NxF6");
        assert_eq!(move_notation(PieceKind::Queen, false, HexCoord::from_axial(-1, 5), 5), "QE11");
    }
}
