//! Static evaluation.
//!
//! The score of a position is the sum over all pieces of material, centrality
//! and mobility, minus king exposure, counted positively for the pieces of
//! the perspective color and negatively for the others.

pub mod centrality;
pub mod king_safety;
pub mod material;
pub mod mobility;

use std::fmt;

use hexmate_core::{Board, Color, Piece};
use tracing::trace;

use self::centrality::centrality;
use self::king_safety::king_exposure;
use self::material::material;
use self::mobility::mobility;

/// Evaluation terms, each already signed for the perspective color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub material: f64,
    pub centrality: f64,
    pub mobility: f64,
    /// Subtracted from the total.
    pub king_exposure: f64,
    /// Rounded to two decimals.
    pub total: f64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} (material {:.2}, centrality {:.2}, mobility {:.2}, king exposure {:.2})",
            self.total, self.material, self.centrality, self.mobility, self.king_exposure
        )
    }
}

/// `value` if `piece` belongs to `perspective`, `-value` otherwise.
#[inline]
pub(crate) fn signed(piece: &Piece, perspective: Color, value: f64) -> f64 {
    if piece.color() == perspective { value } else { -value }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evaluate `board` for `perspective`; positive is good for `perspective`.
pub fn evaluate(board: &Board, perspective: Color) -> f64 {
    evaluate_breakdown(board, perspective).total
}

/// Evaluate `board` for `perspective` and report each term.
pub fn evaluate_breakdown(board: &Board, perspective: Color) -> Evaluation {
    let material = material(board, perspective);
    let centrality = centrality(board, perspective);
    let mobility = mobility(board, perspective);
    let king_exposure = king_exposure(board, perspective);
    let total = round_to_hundredths(material + centrality + mobility - king_exposure);
    trace!(%perspective, total, "evaluated");
    Evaluation {
        material,
        centrality,
        mobility,
        king_exposure,
        total,
    }
}
