//! Core hex chess types: cubic coordinates, pieces, move generation and game rules.

mod board;
mod color;
mod coord;
mod direction;
mod error;
mod layout;
pub mod movegen;
pub mod notation;
pub mod perft;
mod piece;
mod piece_kind;
mod position;
mod radius;

pub use board::{Board, GameStatus, PrettyBoard, TurnInfo};
pub use color::Color;
pub use coord::HexCoord;
pub use direction::{BISHOP_DIRECTIONS, Direction, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
pub use error::{BoardError, CoordError, MoveError, PieceError};
pub use layout::initial_pieces;
pub use movegen::MoveSet;
pub use notation::MoveRecord;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use radius::BoardRadius;
