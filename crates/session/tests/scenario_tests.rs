//! End-to-end gesture scenarios against the session
//!
//! These drive whole games through the public API the way the GUI does:
//! activations for the click path, drag guard plus drop for the drag path.

use chess_session::{DrawReason, GameSession, GameStatus, IllegalMove};
use shakmaty::{Color, Role, Square};

// =============================================================================
// Opening scenario
// =============================================================================

#[test]
fn fresh_game_select_e2_then_click_e4() {
    let mut session = GameSession::default();

    session.activate_square(Square::E2);
    assert_eq!(session.selection(), Some(Square::E2));
    assert!(session.legal_targets().contains(&Square::E3));
    assert!(session.legal_targets().contains(&Square::E4));

    session.activate_square(Square::E4);
    assert_eq!(
        session.piece_at(Square::E4).map(|p| (p.color, p.role)),
        Some((Color::White, Role::Pawn)),
        "pawn must land on e4"
    );
    assert_eq!(session.turn(), Color::Black, "side to move becomes black");
    assert_eq!(session.last_move(), Some((Square::E2, Square::E4)));
}

// =============================================================================
// Fool's mate
// =============================================================================

#[test]
fn fools_mate_reaches_checkmate_and_locks_the_game() {
    let mut session = GameSession::default();

    // 1. f3 e5 2. g4 Qh4#
    session.attempt_move(Square::F2, Square::F3).expect("1. f3");
    session.attempt_move(Square::E7, Square::E5).expect("1... e5");
    session.attempt_move(Square::G2, Square::G4).expect("2. g4");
    session
        .attempt_move(Square::D8, Square::H4)
        .expect("2... Qh4#");

    assert_eq!(
        session.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(session.moves().last().map(|m| m.san.as_str()), Some("Qh4#"));

    // No further move is acceptable
    assert_eq!(session.attempt_move(Square::E2, Square::E3), Err(IllegalMove));
    assert_eq!(session.turn(), Color::White, "mated side still on move");
}

// =============================================================================
// Drag path
// =============================================================================

#[test]
fn dragging_black_piece_on_whites_turn_is_rejected_at_source() {
    let mut session = GameSession::default();

    assert!(
        !session.can_drag_from(Square::E7),
        "drag must be rejected at the source square"
    );

    // Even a forced drop attempt changes nothing
    session.drop_move(Square::E7, Square::E5);
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.last_move(), None);
    assert!(session.moves().is_empty());
}

#[test]
fn drag_and_drop_plays_a_full_opening_exchange() {
    let mut session = GameSession::default();

    assert!(session.can_drag_from(Square::E2));
    session.drop_move(Square::E2, Square::E4);
    assert!(session.can_drag_from(Square::E7));
    session.drop_move(Square::E7, Square::E5);
    assert!(session.can_drag_from(Square::G1));
    session.drop_move(Square::G1, Square::F3);

    assert_eq!(session.moves().len(), 3);
    assert_eq!(session.turn(), Color::Black);
    assert_eq!(session.last_move(), Some((Square::G1, Square::F3)));
}

// =============================================================================
// Reset semantics
// =============================================================================

#[test]
fn reset_is_a_fresh_session_value() {
    let mut session = GameSession::default();
    session.drop_move(Square::E2, Square::E4);
    session.activate_square(Square::E7);
    assert!(session.last_move().is_some());

    // The GUI resets by replacing the owned session wholesale
    session = GameSession::new(session.promotion());

    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.selection(), None);
    assert_eq!(session.last_move(), None);
    assert!(session.moves().is_empty());
    assert_eq!(session.status(), GameStatus::InProgress { in_check: false });
}

// =============================================================================
// Repetition draw through real moves
// =============================================================================

#[test]
fn knight_shuffle_triggers_threefold_repetition() {
    let mut session = GameSession::default();

    // Both sides shuffle knights out and back twice; the start position
    // (white to move) then stands for the third time.
    for _ in 0..2 {
        session.attempt_move(Square::G1, Square::F3).expect("Nf3");
        session.attempt_move(Square::G8, Square::F6).expect("Nf6");
        session.attempt_move(Square::F3, Square::G1).expect("Ng1");
        session.attempt_move(Square::F6, Square::G8).expect("Ng8");
    }

    assert_eq!(
        session.status(),
        GameStatus::Draw(DrawReason::ThreefoldRepetition)
    );
    assert_eq!(
        session.attempt_move(Square::E2, Square::E4),
        Err(IllegalMove),
        "a drawn game accepts no further moves"
    );
}
