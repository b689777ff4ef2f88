//! Static position evaluation for hexmate.

pub mod eval;

pub use eval::{Evaluation, evaluate, evaluate_breakdown};
