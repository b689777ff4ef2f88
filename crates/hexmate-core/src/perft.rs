//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.all_legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        if let Ok(child) = board.make_move(from, to) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `("from to", node_count)` pairs sorted alphabetically, with cells
/// written as `q,r,s`.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = board
        .all_legal_moves()
        .into_iter()
        .filter_map(|(from, to)| {
            let child = board.make_move(from, to).ok()?;
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            Some((format!("{from} {to}"), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
