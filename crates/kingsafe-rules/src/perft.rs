//! Perft (performance test) for move generation regression checks.
//!
//! Counts positions reachable by legal moves, with the two colors taking
//! turns starting from `color`.

use kingsafe_core::{Board, Color};

use crate::validator::generate_valid_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(board: &Board, color: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_valid_moves(board, color).legal;
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|mv| board.make_move(*mv).ok())
        .map(|(child, _)| perft(&child, color.flip(), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs sorted by the move string.
pub fn divide(board: &Board, color: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_valid_moves(board, color).legal;
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .filter_map(|mv| {
            let (child, _) = board.make_move(*mv).ok()?;
            let count = if depth <= 1 { 1 } else { perft(&child, color.flip(), depth - 1) };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 3), 8_902);
    }

    #[test]
    fn perft_depth_zero_is_one() {
        assert_eq!(perft(&Board::starting_position(), Color::Black, 0), 1);
    }

    #[test]
    fn divide_startpos_depth_2() {
        let results = divide(&Board::starting_position(), Color::White, 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 20));
        assert_eq!(results[0].0, "A2 A3");
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 400);
    }

    #[test]
    fn perft_stalemate_is_zero() {
        let board: Board = "k7/2K5/1Q6/8/8/8/8/8".parse().unwrap();
        assert_eq!(perft(&board, Color::Black, 1), 0);
        assert_eq!(perft(&board, Color::Black, 3), 0);
    }
}
