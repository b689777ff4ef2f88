//! Piece placement and the copy-simulate-discard legality test.

use std::collections::HashMap;

use crate::color::Color;
use crate::coord::HexCoord;
use crate::error::BoardError;
use crate::layout;
use crate::movegen::{MoveSet, Occupancy, is_square_attacked, pseudo_legal_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::radius::BoardRadius;

/// Where every piece stands, with a cache of both kings' cells.
///
/// Cloning is the simulation primitive: legality of a candidate move is
/// decided by applying it to a clone and inspecting the result.
#[derive(Debug, Clone)]
pub(crate) struct Position {
    radius: BoardRadius,
    pieces: HashMap<HexCoord, Piece>,
    /// King cell per color, indexed by [`Color::index()`].
    kings: [Option<HexCoord>; Color::COUNT],
}

impl Position {
    pub(crate) fn empty(radius: BoardRadius) -> Position {
        Position {
            radius,
            pieces: HashMap::new(),
            kings: [None; Color::COUNT],
        }
    }

    /// The standard initial layout for `radius`.
    pub(crate) fn standard(radius: BoardRadius) -> Position {
        let mut position = Position::empty(radius);
        for piece in layout::initial_pieces(radius) {
            position.put(piece);
        }
        position
    }

    /// Build a position from arbitrary pieces.
    ///
    /// # Errors
    ///
    /// Rejects pieces off the board, two pieces on one cell, or a second king
    /// of the same color.
    pub(crate) fn from_pieces(
        radius: BoardRadius,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Position, BoardError> {
        let mut position = Position::empty(radius);
        for piece in pieces {
            let at = piece.position();
            if !at.is_on_board(radius.value()) {
                return Err(BoardError::OffBoard { at });
            }
            if position.pieces.contains_key(&at) {
                return Err(BoardError::Occupied { at });
            }
            if piece.kind() == PieceKind::King && position.kings[piece.color().index()].is_some() {
                return Err(BoardError::DuplicateKing {
                    color: piece.color(),
                });
            }
            position.put(piece);
        }
        Ok(position)
    }

    #[inline]
    pub(crate) fn radius(&self) -> BoardRadius {
        self.radius
    }

    #[inline]
    pub(crate) fn piece_at(&self, coord: HexCoord) -> Option<&Piece> {
        self.pieces.get(&coord)
    }

    pub(crate) fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub(crate) fn king(&self, color: Color) -> Option<HexCoord> {
        self.kings[color.index()]
    }

    /// Place `piece` on its own cell, replacing whatever stood there.
    pub(crate) fn put(&mut self, piece: Piece) -> Option<Piece> {
        let at = piece.position();
        let replaced = self.pieces.insert(at, piece);
        if let Some(old) = replaced {
            self.forget_king(&old);
        }
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(at);
        }
        replaced
    }

    /// Move the piece on `from` to `to`, returning the piece captured there.
    ///
    /// Does nothing and returns `None` if `from` is empty.
    pub(crate) fn relocate(&mut self, from: HexCoord, to: HexCoord) -> Option<Piece> {
        let mut piece = self.pieces.remove(&from)?;
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = None;
        }
        piece.relocate(to);
        self.put(piece)
    }

    fn forget_king(&mut self, piece: &Piece) {
        let slot = &mut self.kings[piece.color().index()];
        if piece.kind() == PieceKind::King && *slot == Some(piece.position()) {
            *slot = None;
        }
    }

    /// Return `true` if `color` has a king and an enemy piece attacks it.
    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        self.king(color)
            .is_some_and(|king| is_square_attacked(self, king, !color))
    }

    /// Pseudo-legal moves of `piece` that leave its own king safe.
    ///
    /// Each candidate is played on a clone of the position and the clone is
    /// dropped after the check test.
    pub(crate) fn legal_moves_for(&self, piece: &Piece) -> MoveSet {
        let from = piece.position();
        pseudo_legal_moves(self, piece)
            .into_iter()
            .filter(|&to| {
                let mut simulated = self.clone();
                simulated.relocate(from, to);
                !simulated.is_in_check(piece.color())
            })
            .collect()
    }

    /// Return `true` if any piece of `color` has at least one legal move.
    pub(crate) fn has_legal_move(&self, color: Color) -> bool {
        self.pieces
            .values()
            .filter(|piece| piece.color() == color)
            .any(|piece| !self.legal_moves_for(piece).is_empty())
    }
}

impl Occupancy for Position {
    #[inline]
    fn is_on_board(&self, coord: HexCoord) -> bool {
        coord.is_on_board(self.radius.value())
    }

    #[inline]
    fn piece_at(&self, coord: HexCoord) -> Option<&Piece> {
        self.pieces.get(&coord)
    }
}
