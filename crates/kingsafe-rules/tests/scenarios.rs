//! End-to-end rule scenarios: pins, checkmate, stalemate, promotion and turn
//! ownership, driven through the public API only.

use kingsafe_core::{Board, Color, Piece, PieceKind, is_in_check, pseudo_legal_moves};
use kingsafe_rules::{IllegalMove, MoveValidator, generate_valid_moves, is_valid_move};

/// Play a sequence of moves from the starting position, alternating colors
/// and asserting each one is legal.
fn play(moves: &[(&str, &str)]) -> Board {
    let mut board = Board::starting_position();
    let mut color = Color::White;
    for (source, destination) in moves {
        is_valid_move(&board, source, destination, color)
            .unwrap_or_else(|e| panic!("{source} {destination} for {color} rejected: {e}"));
        board = board.move_piece(source, destination).unwrap().0;
        color = color.flip();
    }
    board
}

// ── Pins ──────────────────────────────────────────────────────────────────────

#[test]
fn pinned_rook_may_only_slide_along_the_pin() {
    // White: K E1, R E4. Black: Q E8, K A8.
    let board: Board = "k3q3/8/8/8/4R3/8/8/4K3".parse().unwrap();

    assert_eq!(
        is_valid_move(&board, "E4", "C4", Color::White),
        Err(IllegalMove::SelfCheck)
    );
    assert_eq!(
        is_valid_move(&board, "E4", "C4", Color::White).unwrap_err().to_string(),
        "Can't put your king in jeopardy"
    );
    assert!(is_valid_move(&board, "E4", "E3", Color::White).is_ok());
    assert!(is_valid_move(&board, "E4", "E7", Color::White).is_ok());
    assert!(is_valid_move(&board, "E4", "E8", Color::White).is_ok(), "capturing the pinner is legal");
}

#[test]
fn pinned_piece_moves_are_all_self_check_off_the_line() {
    let board: Board = "k3q3/8/8/8/4R3/8/8/4K3".parse().unwrap();
    let sets = generate_valid_moves(&board, Color::White);
    let rook_self_check: Vec<String> = sets
        .self_check_strings()
        .into_iter()
        .filter(|mv| mv.starts_with("E4"))
        .collect();
    // A4..D4 and F4..H4.
    assert_eq!(rook_self_check.len(), 7);
    assert!(sets.legal_strings().contains(&"E4 E5".to_string()));
}

// ── Checkmate and stalemate ───────────────────────────────────────────────────

#[test]
fn scholars_mate_is_checkmate() {
    let board = play(&[
        ("E2", "E4"),
        ("E7", "E5"),
        ("F1", "C4"),
        ("B8", "C6"),
        ("D1", "H5"),
        ("G8", "F6"),
        ("H5", "F7"),
    ]);

    assert!(is_in_check(Color::Black, &board));
    let sets = generate_valid_moves(&board, Color::Black);
    assert!(sets.legal.is_empty(), "black should have no legal moves: {:?}", sets.legal);
    assert!(!sets.self_check.is_empty());
}

#[test]
fn scholars_mate_king_cannot_take_defended_queen() {
    let board: Board = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR".parse().unwrap();
    assert_eq!(
        is_valid_move(&board, "E8", "F7", Color::Black),
        Err(IllegalMove::SelfCheck)
    );
}

#[test]
fn stalemate_has_no_moves_and_no_check() {
    // Black K A8; white K C7, Q B6.
    let board: Board = "k7/2K5/1Q6/8/8/8/8/8".parse().unwrap();
    let sets = generate_valid_moves(&board, Color::Black);
    assert!(sets.legal.is_empty());
    assert!(!is_in_check(Color::Black, &board));
    // White still has plenty to do.
    assert!(!generate_valid_moves(&board, Color::White).legal.is_empty());
}

#[test]
fn back_rank_mate() {
    let board: Board = "3R2k1/5ppp/8/8/8/8/8/6K1".parse().unwrap();
    assert!(is_in_check(Color::Black, &board));
    assert!(generate_valid_moves(&board, Color::Black).legal.is_empty());
}

#[test]
fn fools_mate_line_is_escaped_by_double_push_capture() {
    // The H-pawn's double push is gated only by H3, so it takes the queen.
    let board = play(&[("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")]);
    assert_eq!(board.to_string(), "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
    assert!(is_in_check(Color::White, &board));

    let sets = generate_valid_moves(&board, Color::White);
    assert_eq!(sets.legal_strings(), ["H2 H4"]);
    assert_eq!(is_valid_move(&board, "H2", "H4", Color::White), Ok(()));

    let (after, captured) = board.move_piece("H2", "H4").unwrap();
    assert_eq!(captured, Some(Piece::new(PieceKind::Queen, Color::Black)));
    assert!(!is_in_check(Color::White, &after));
}

// ── Board snapshots ───────────────────────────────────────────────────────────

#[test]
fn promotion_through_move_piece() {
    let board: Board = "k7/4P3/8/8/8/8/8/K7".parse().unwrap();
    assert!(is_valid_move(&board, "E7", "E8", Color::White).is_ok());

    let (next, captured) = board.move_piece("E7", "E8").unwrap();
    assert_eq!(captured, None);
    assert_eq!(next.get_piece("E8"), Ok(Some(Piece::new(PieceKind::Queen, Color::White))));
    // The promoted queen now attacks along rank 8 and checks the black king.
    assert!(is_in_check(Color::Black, &next));
}

#[test]
fn simulation_never_mutates_the_input() {
    let board = Board::starting_position();
    let before = board;
    let _ = generate_valid_moves(&board, Color::White);
    let _ = is_valid_move(&board, "E2", "E4", Color::White);
    assert_eq!(board, before);
}

#[test]
fn moves_after_a_move_see_the_new_board() {
    let board = Board::starting_position();
    let (next, _) = board.move_piece("E2", "E4").unwrap();
    // The bishop on F1 was boxed in before and is free now.
    assert!(pseudo_legal_moves(&board, "F1".parse().unwrap()).is_empty());
    assert_eq!(pseudo_legal_moves(&next, "F1".parse().unwrap()).len(), 5);
}

// ── Ownership ─────────────────────────────────────────────────────────────────

#[test]
fn cannot_move_opponents_piece() {
    let board = Board::starting_position();
    let validator = MoveValidator::new(&board);
    let err = validator.is_valid_move("E7", "E6", Color::White).unwrap_err();
    assert_eq!(err.to_string(), "That's not your piece");
}

#[test]
fn cannot_capture_own_piece() {
    let board = Board::starting_position();
    let err = is_valid_move(&board, "G1", "E2", Color::White).unwrap_err();
    assert_eq!(err.to_string(), "Cannot capture your own piece");
    assert!(is_valid_move(&board, "G1", "F3", Color::White).is_ok());
}

#[test]
fn king_capture_is_reachable_when_check_is_ignored() {
    // With the black king already in check, white's capture of it is a
    // plain legal move; the rules layer does not stop the game early.
    let board: Board = "4k3/8/8/8/8/8/8/4RK2".parse().unwrap();
    assert!(is_valid_move(&board, "E1", "E8", Color::White).is_ok());
    let (next, captured) = board.move_piece("E1", "E8").unwrap();
    assert_eq!(captured.map(|p| p.kind()), Some(PieceKind::King));
    assert!(!is_in_check(Color::Black, &next));
}
