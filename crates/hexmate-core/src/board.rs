//! The game state: placement, side to move, move counter, history and the
//! per-cell legal move cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::color::Color;
use crate::coord::HexCoord;
use crate::error::{BoardError, MoveError};
use crate::movegen::{MoveSet, Occupancy};
use crate::notation::{MoveRecord, move_notation, row_label};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::radius::BoardRadius;

/// Complete game state.
///
/// Not `Sync`: the move cache uses interior mutability so that queries can
/// take `&self`. Use one board per thread.
#[derive(Clone)]
pub struct Board {
    position: Position,
    /// Which side moves next.
    side_to_move: Color,
    /// Starts at 1, incremented after Black moves.
    move_number: u32,
    history: Vec<MoveRecord>,
    /// Legal destinations per source cell; emptied on every mutation.
    move_cache: RefCell<HashMap<HexCoord, MoveSet>>,
}

/// Whose turn it is and which move of the game this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnInfo {
    pub move_number: u32,
    pub current_player: Color,
}

impl fmt::Display for TurnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {}, {} to play", self.move_number, self.current_player)
    }
}

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move is not in check and has a legal move.
    Ongoing,
    /// The given side is in check but can get out of it.
    Check(Color),
    /// The side to move is mated.
    Checkmate { winner: Color },
    /// The given side is not in check and has no legal move.
    Stalemate(Color),
}

impl GameStatus {
    /// Return `true` if no further moves can be played.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check(color) => write!(f, "check, {color} king attacked"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate(color) => write!(f, "stalemate, {color} has no legal move"),
        }
    }
}

impl Board {
    /// Start a new game from the standard layout for `radius`. White moves first.
    pub fn new_game(radius: BoardRadius) -> Board {
        Board::with_position(Position::standard(radius), Color::White)
    }

    /// Build a board from a custom set of pieces.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if a piece is off the board, two pieces share
    /// a cell, or a side has two kings.
    pub fn from_pieces(
        radius: BoardRadius,
        side_to_move: Color,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Board, BoardError> {
        let position = Position::from_pieces(radius, pieces)?;
        Ok(Board::with_position(position, side_to_move))
    }

    fn with_position(position: Position, side_to_move: Color) -> Board {
        Board {
            position,
            side_to_move,
            move_number: 1,
            history: Vec::new(),
            move_cache: RefCell::new(HashMap::new()),
        }
    }

    #[inline]
    pub fn radius(&self) -> BoardRadius {
        self.position.radius()
    }

    /// Return `true` if `coord` lies on this board.
    #[inline]
    pub fn is_on_board(&self, coord: HexCoord) -> bool {
        coord.is_on_board(self.radius().value())
    }

    /// Return the piece on `coord`, if any.
    #[inline]
    pub fn piece_at(&self, coord: HexCoord) -> Option<&Piece> {
        self.position.piece_at(coord)
    }

    #[inline]
    pub fn is_occupied(&self, coord: HexCoord) -> bool {
        self.position.piece_at(coord).is_some()
    }

    /// Iterate over every piece on the board, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.position.pieces()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn turn_info(&self) -> TurnInfo {
        TurnInfo {
            move_number: self.move_number,
            current_player: self.side_to_move,
        }
    }

    /// Cell of `color`'s king, or `None` if it has none.
    #[inline]
    pub fn king_position(&self, color: Color) -> Option<HexCoord> {
        self.position.king(color)
    }

    /// All moves played so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Return `true` if the last move started or ended on `coord`.
    pub fn last_move_touches(&self, coord: HexCoord) -> bool {
        self.last_move()
            .is_some_and(|record| record.from == coord || record.to == coord)
    }

    /// Legal destinations of the piece on `coord`.
    ///
    /// Empty if the cell is empty or holds a piece of the side not to move.
    /// Results are cached until the next mutation.
    pub fn legal_moves(&self, coord: HexCoord) -> MoveSet {
        if let Some(moves) = self.move_cache.borrow().get(&coord) {
            trace!(%coord, "move cache hit");
            return moves.clone();
        }

        let Some(piece) = self.position.piece_at(coord) else {
            return MoveSet::new();
        };
        if piece.color() != self.side_to_move {
            return MoveSet::new();
        }

        trace!(%coord, "move cache miss");
        let moves = self.position.legal_moves_for(piece);
        self.move_cache.borrow_mut().insert(coord, moves.clone());
        moves
    }

    /// Every legal `(from, to)` pair for the side to move, sorted.
    pub fn all_legal_moves(&self) -> Vec<(HexCoord, HexCoord)> {
        let mut sources: Vec<HexCoord> = self
            .position
            .pieces()
            .filter(|piece| piece.color() == self.side_to_move)
            .map(|piece| piece.position())
            .collect();
        sources.sort_unstable();

        let mut moves = Vec::new();
        for from in sources {
            let mut targets: Vec<HexCoord> = self.legal_moves(from).into_iter().collect();
            targets.sort_unstable();
            moves.extend(targets.into_iter().map(|to| (from, to)));
        }
        moves
    }

    /// Move the piece on `from` to `to` without checking that `to` is a legal
    /// destination. Callers are expected to have consulted
    /// [`legal_moves`](Board::legal_moves); [`play`](Board::play) does so.
    ///
    /// Captures whatever stands on `to`, switches the side to move, and
    /// promotes a pawn that reaches the far edge to a queen.
    ///
    /// # Errors
    ///
    /// Rejects an empty source cell, a piece of the side not to move, or a
    /// destination off the board. The board is unchanged on error.
    pub fn move_piece(&mut self, from: HexCoord, to: HexCoord) -> Result<MoveRecord, MoveError> {
        let piece = *self
            .position
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { from })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                from,
                color: piece.color(),
            });
        }
        if !self.is_on_board(to) {
            return Err(MoveError::OffBoard { to });
        }

        let radius = self.radius().value();
        let capture = self.is_occupied(to);
        let record = MoveRecord {
            from,
            to,
            notation: move_notation(piece.kind(), capture, to, radius),
        };

        self.position.relocate(from, to);
        self.history.push(record.clone());

        let mover = self.side_to_move;
        if mover == Color::Black {
            self.move_number += 1;
        }
        self.side_to_move = !mover;

        if piece.kind() == PieceKind::Pawn && to.r() == mover.promotion_row(radius) {
            self.replace_with(to, PieceKind::Queen);
        }

        self.move_cache.borrow_mut().clear();
        debug!(
            notation = %record.notation,
            side = %mover,
            move_number = self.move_number,
            "move played"
        );
        Ok(record)
    }

    /// Play a move after checking it against the legal moves of the piece.
    ///
    /// # Errors
    ///
    /// Same as [`move_piece`](Board::move_piece), plus
    /// [`MoveError::NotLegal`] if `to` is not a legal destination.
    pub fn play(&mut self, from: HexCoord, to: HexCoord) -> Result<MoveRecord, MoveError> {
        let piece = self
            .position
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { from })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                from,
                color: piece.color(),
            });
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::NotLegal { from, to });
        }
        self.move_piece(from, to)
    }

    /// Return a copy of the board with the move played. See
    /// [`move_piece`](Board::move_piece).
    pub fn make_move(&self, from: HexCoord, to: HexCoord) -> Result<Board, MoveError> {
        let mut child = self.clone();
        child.move_piece(from, to)?;
        Ok(child)
    }

    /// Replace the pawn on `at` with a piece of kind `kind`.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoPawnAtCoordinate`] if `at` holds no pawn (checked
    /// first), [`MoveError::InvalidPromotionType`] if `kind` is a pawn or king.
    pub fn promote(&mut self, at: HexCoord, kind: PieceKind) -> Result<(), MoveError> {
        if self
            .position
            .piece_at(at)
            .is_none_or(|piece| piece.kind() != PieceKind::Pawn)
        {
            return Err(MoveError::NoPawnAtCoordinate { at });
        }
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotionType { kind });
        }
        self.replace_with(at, kind);
        self.move_cache.borrow_mut().clear();
        Ok(())
    }

    fn replace_with(&mut self, at: HexCoord, kind: PieceKind) {
        if let Some(piece) = self.position.piece_at(at) {
            let promoted = piece.promoted(kind);
            debug!(%at, color = %promoted.color(), ?kind, "pawn promoted");
            self.position.put(promoted);
        }
    }

    /// Return `true` if `color`'s king is attacked. `false` without a king.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.position.is_in_check(color)
    }

    /// Return `true` if `color` is in check and has no legal move.
    ///
    /// Answers for either side, whoever is to move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.position.is_in_check(color) && !self.position.has_legal_move(color)
    }

    /// Status of the game for the side to move.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_in_check(side);
        let can_move = self.position.has_legal_move(side);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate { winner: !side },
            (true, true) => GameStatus::Check(side),
            (false, false) => GameStatus::Stalemate(side),
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new_game(BoardRadius::default())
    }
}

impl Occupancy for Board {
    #[inline]
    fn is_on_board(&self, coord: HexCoord) -> bool {
        Board::is_on_board(self, coord)
    }

    #[inline]
    fn piece_at(&self, coord: HexCoord) -> Option<&Piece> {
        self.position.piece_at(coord)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board({} pieces, move {}, {} to play)",
            self.position.len(),
            self.move_number,
            self.side_to_move
        )
    }
}

/// Wrapper for printing a board as a hexagon of text rows.
///
/// Rows run from `r = +R` at the top to `r = -R` at the bottom, each shifted
/// right by `|r|` so neighbouring rows interleave.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let radius = board.radius().value();
        for r in (-radius..=radius).rev() {
            write!(f, "{:>2} {}", row_label(r, radius), " ".repeat(r.unsigned_abs() as usize))?;
            let q_min = (-radius).max(-r - radius);
            let q_max = radius.min(radius - r);
            for q in q_min..=q_max {
                let symbol = board
                    .piece_at(HexCoord::from_axial(q, r))
                    .map_or('.', Piece::symbol);
                if q < q_max {
                    write!(f, "{symbol} ")?;
                } else {
                    write!(f, "{symbol}")?;
                }
            }
            if r > -radius {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(q: i32, r: i32) -> HexCoord {
        HexCoord::from_axial(q, r)
    }

    #[test]
    fn new_game_state() {
        let board = Board::new_game(BoardRadius::Five);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.move_number(), 1);
        assert!(board.history().is_empty());
        assert_eq!(board.last_move(), None);
        assert_eq!(board.pieces().count(), 36);
        assert_eq!(board.king_position(Color::White), Some(at(1, -5)));
        assert_eq!(format!("{}", board.turn_info()), "Move 1, white to play");
        assert_eq!(format!("{board:?}"), "Board(36 pieces, move 1, white to play)");
    }

    #[test]
    fn legal_moves_empty_for_empty_cell_and_opponent() {
        let board = Board::new_game(BoardRadius::Five);
        assert!(board.legal_moves(at(0, 0)).is_empty());
        // Black pawn, but White is to move.
        assert!(board.legal_moves(at(0, 1)).is_empty());
        assert_eq!(board.legal_moves(at(0, -1)).len(), 2);
    }

    #[test]
    fn move_piece_rejections_leave_board_unchanged() {
        let mut board = Board::new_game(BoardRadius::Five);
        assert_eq!(
            board.move_piece(at(0, 0), at(0, 1)),
            Err(MoveError::EmptySquare { from: at(0, 0) })
        );
        assert_eq!(
            board.move_piece(at(0, 1), at(0, 0)),
            Err(MoveError::NotYourTurn {
                from: at(0, 1),
                color: Color::Black
            })
        );
        assert_eq!(
            board.move_piece(at(0, -5), at(0, -6)),
            Err(MoveError::OffBoard { to: at(0, -6) })
        );
        assert_eq!(board.side_to_move(), Color::White);
        assert!(board.history().is_empty());
    }

    #[test]
    fn move_piece_records_notation_and_flips_turn() {
        let mut board = Board::new_game(BoardRadius::Five);
        let record = board.move_piece(at(0, -1), at(0, 0)).unwrap();
        assert_eq!(record.notation, "F6");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.move_number(), 1);
        assert!(board.last_move_touches(at(0, -1)));
        assert!(board.last_move_touches(at(0, 0)));
        assert!(!board.last_move_touches(at(0, 1)));

        let record = board.move_piece(at(1, 1), at(1, 0)).unwrap();
        assert_eq!(record.notation, "G6");
        assert_eq!(board.move_number(), 2);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn capture_mark_comes_from_the_cell_before_the_move() {
        let mut board = Board::from_pieces(
            BoardRadius::Five,
            Color::White,
            [
                Piece::new(PieceKind::King, Color::White, at(0, -5)),
                Piece::new(PieceKind::King, Color::Black, at(0, 5)),
                Piece::new(PieceKind::Rook, Color::White, at(-3, 0)),
                Piece::new(PieceKind::Knight, Color::Black, at(2, 0)),
            ],
        )
        .unwrap();
        let record = board.play(at(-3, 0), at(2, 0)).unwrap();
        assert_eq!(record.notation, "RxH6");
        assert_eq!(format!("{record}"), "RxH6 (-3,0,3 -> 2,0,-2)");
    }

    #[test]
    fn play_rejects_illegal_destination() {
        let mut board = Board::new_game(BoardRadius::Four);
        assert_eq!(
            board.play(at(0, -1), at(0, 2)),
            Err(MoveError::NotLegal {
                from: at(0, -1),
                to: at(0, 2)
            })
        );
        assert!(board.history().is_empty());
        assert!(board.play(at(0, -1), at(0, 1)).is_ok());
    }

    #[test]
    fn cache_is_cleared_after_move() {
        let mut board = Board::new_game(BoardRadius::Five);
        let before = board.legal_moves(at(-1, -1));
        assert_eq!(before.len(), 2);
        board.move_piece(at(0, -1), at(0, 0)).unwrap();
        // A stale cache would still answer for the white pawn.
        assert!(board.legal_moves(at(-1, -1)).is_empty());
        assert_eq!(board.legal_moves(at(1, 1)).len(), 2);
    }

    #[test]
    fn auto_promotion_to_queen() {
        let mut board = Board::from_pieces(
            BoardRadius::Four,
            Color::White,
            [
                Piece::new(PieceKind::King, Color::White, at(0, -4)),
                Piece::new(PieceKind::King, Color::Black, at(4, 0)),
                Piece::new(PieceKind::Pawn, Color::White, at(-1, 3)).with_moved(),
            ],
        )
        .unwrap();
        let record = board.play(at(-1, 3), at(-1, 4)).unwrap();
        assert_eq!(record.notation, "D9");
        let queen = board.piece_at(at(-1, 4)).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), Color::White);
    }

    #[test]
    fn promote_errors_in_order() {
        let mut board = Board::new_game(BoardRadius::Five);
        assert_eq!(
            board.promote(at(0, 0), PieceKind::King),
            Err(MoveError::NoPawnAtCoordinate { at: at(0, 0) })
        );
        assert_eq!(
            board.promote(at(1, -5), PieceKind::Queen),
            Err(MoveError::NoPawnAtCoordinate { at: at(1, -5) })
        );
        assert_eq!(
            board.promote(at(0, -1), PieceKind::King),
            Err(MoveError::InvalidPromotionType {
                kind: PieceKind::King
            })
        );
        board.promote(at(0, -1), PieceKind::Knight).unwrap();
        let knight = board.piece_at(at(0, -1)).unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert!(knight.has_moved());
    }

    #[test]
    fn start_is_ongoing() {
        for radius in BoardRadius::ALL {
            let board = Board::new_game(radius);
            assert_eq!(board.status(), GameStatus::Ongoing);
            assert!(!board.is_checkmate(Color::White));
            assert!(!board.is_checkmate(Color::Black));
        }
    }

    #[test]
    fn all_legal_moves_sorted_and_counted() {
        let board = Board::new_game(BoardRadius::Five);
        let moves = board.all_legal_moves();
        assert_eq!(moves.len(), 50);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));

        let board = Board::new_game(BoardRadius::Four);
        assert_eq!(board.all_legal_moves().len(), 29);
    }

    #[test]
    fn pretty_print_shape() {
        let board = Board::new_game(BoardRadius::Five);
        let output = format!("{}", board.pretty());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "11      . p r n q b");
        assert_eq!(lines[5], " 6 . . . . . . . . . . .");
        assert_eq!(lines[10], " 1      B K N R P .");
        let cells: usize = lines
            .iter()
            .map(|line| line[3..].split_whitespace().count())
            .sum();
        assert_eq!(cells, 91);
        assert_eq!(output.matches('K').count(), 1);
        assert_eq!(output.matches('k').count(), 1);
    }
}
