//! Game Flow
//!
//! Tests that play whole games through the state machine, and that resume
//! games from snapshots.

use royal_engine::coretypes::{Color::*, Move, Piece, PieceKind::*, Square, Square::*};
use royal_engine::snapshot;
use royal_engine::*;

/// Play `moves` from the start position, expecting every move to be accepted.
/// Returns the final state and the events raised by the last move.
fn play(moves: &[(Square, Square)]) -> (GameState, Vec<GameEvent>) {
    let mut game = GameState::start_position();
    let mut events = Vec::new();
    for &(from, to) in moves {
        events = game
            .apply_move(from, to)
            .unwrap_or_else(|rejection| panic!("{from}{to}: {rejection}"));
    }
    (game, events)
}

#[test]
fn fools_mate() {
    let (game, events) = play(&[(F2, F3), (E7, E5), (G2, G4), (D8, H4)]);

    assert_eq!(
        events,
        vec![GameEvent::Check(White), GameEvent::Checkmate { winner: Black }]
    );
    assert!(game.is_check());
    assert!(game.is_checkmate());
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Black));
    assert_eq!(game.turn(), White);
    assert_eq!(game.move_history().len(), 4);

    // Nothing is accepted after mate, not even an otherwise legal move.
    assert_eq!(game.submit_move(A2, A3), Err(Rejection::GameOver));
    assert_eq!(game.submit_move(E1, F2), Err(Rejection::GameOver));
}

#[test]
fn scholars_mate() {
    let (game, events) = play(&[
        (E2, E4),
        (E7, E5),
        (F1, C4),
        (B8, C6),
        (D1, H5),
        (G8, F6),
        (H5, F7),
    ]);

    assert_eq!(
        events,
        vec![GameEvent::Check(Black), GameEvent::Checkmate { winner: White }]
    );
    assert_eq!(game.winner(), Some(White));
    assert_eq!(game.captured_pieces(), &vec![Piece::new(Black, Pawn)]);
    assert_eq!(game.submit_move(E8, E7), Err(Rejection::GameOver));
}

#[test]
fn check_then_escape_clears_flag() {
    let (game, events) = play(&[(E2, E4), (F7, F6), (D1, H5)]);
    assert_eq!(events, vec![GameEvent::Check(Black)]);
    assert!(game.is_check());
    assert!(!game.is_over());

    // Moving a piece that does not answer the check is illegal.
    assert_eq!(
        game.submit_move(A7, A6),
        Err(Rejection::IllegalMove(Move::new(A7, A6)))
    );

    let outcome = game.submit_move(G7, G6).unwrap();
    assert!(outcome.events.is_empty());
    assert!(!outcome.state.is_check());
}

#[test]
fn rejected_moves_are_idempotent() {
    let (game, _) = play(&[(E2, E4), (E7, E5)]);
    let before = game.clone();

    for _ in 0..3 {
        assert_eq!(game.submit_move(D7, D6), Err(Rejection::WrongTurn(Black)));
        assert_eq!(game.submit_move(D4, D5), Err(Rejection::EmptySquare(D4)));
        assert_eq!(
            game.submit_move(E4, E5),
            Err(Rejection::IllegalMove(Move::new(E4, E5)))
        );
        assert_eq!(
            game.submit_move(E1, E1),
            Err(Rejection::IllegalMove(Move::new(E1, E1)))
        );
    }
    assert_eq!(game, before);
}

#[test]
fn turns_alternate() {
    let mut game = GameState::start_position();
    assert_eq!(game.turn(), White);
    game.apply_move(B1, C3).unwrap();
    assert_eq!(game.turn(), Black);
    assert_eq!(game.apply_move(C3, D5), Err(Rejection::WrongTurn(White)));
    game.apply_move(B8, C6).unwrap();
    assert_eq!(game.turn(), White);
}

#[test]
fn captures_in_order_taken() {
    let (game, _) = play(&[
        (E2, E4),
        (D7, D5),
        (E4, D5),
        (D8, D5),
        (B1, C3),
        (D5, A2),
        (A1, A2),
    ]);
    assert_eq!(
        game.captured_pieces(),
        &vec![
            Piece::new(Black, Pawn),
            Piece::new(White, Pawn),
            Piece::new(White, Pawn),
            Piece::new(Black, Queen),
        ]
    );
    assert_eq!(game.board()[A2], Some(Piece::new(White, Rook)));
}

#[test]
fn snapshot_resume_continues_play() {
    let (game, _) = play(&[(E2, E4), (E7, E5), (G1, F3)]);
    let json = snapshot::to_json(&game).unwrap();

    let mut resumed = snapshot::from_json(&json).unwrap();
    assert_eq!(resumed, game);
    assert_eq!(resumed.turn(), Black);

    resumed.apply_move(B8, C6).unwrap();
    let mut direct = game.clone();
    direct.apply_move(B8, C6).unwrap();
    assert_eq!(resumed, direct);
    assert_eq!(resumed.move_history().len(), 4);
}

/// Records written without `capturedPieces` and with only the occupied
/// squares listed still decode.
#[test]
fn snapshot_decodes_sparse_record() {
    let json = r#"{
        "board": {
            "e1": { "piece": "k", "color": "w" },
            "e8": { "piece": "k", "color": "b" },
            "a7": { "piece": "r", "color": "b" },
            "h2": { "piece": "r", "color": "b" },
            "c5": null
        },
        "turn": "b",
        "isCheck": false,
        "isCheckmate": false,
        "moveHistory": [
            { "from": "e2", "to": "e1", "piece": { "piece": "k", "color": "w" } }
        ]
    }"#;
    let game = snapshot::from_json(json).unwrap();
    assert_eq!(game.turn(), Black);
    assert_eq!(game.board().pieces().count(), 4);
    assert!(game.captured_pieces().is_empty());
    assert_eq!(game.move_history().len(), 1);

    let outcome = game.submit_move(A7, A1).unwrap();
    assert_eq!(
        outcome.events,
        vec![GameEvent::Check(White), GameEvent::Checkmate { winner: Black }]
    );
}

/// A decoded record is trusted as is, flags included.
#[test]
fn snapshot_flags_are_authoritative() {
    let json = r#"{
        "board": { "e1": { "piece": "k", "color": "w" }, "e8": { "piece": "k", "color": "b" } },
        "turn": "w",
        "isCheck": true,
        "isCheckmate": true,
        "moveHistory": [],
        "capturedPieces": [ { "piece": "q", "color": "b" } ]
    }"#;
    let game = snapshot::from_json(json).unwrap();
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Black));
    assert_eq!(game.captured_pieces(), &vec![Piece::new(Black, Queen)]);
    assert_eq!(game.submit_move(E1, E2), Err(Rejection::GameOver));
}

#[test]
fn snapshot_value_embeds_in_larger_message() {
    let (game, _) = play(&[(D2, D4)]);
    let message = serde_json::json!({
        "type": "state",
        "state": snapshot::to_value(&game).unwrap(),
    });
    let state = snapshot::from_value(message["state"].clone()).unwrap();
    assert_eq!(state, game);
    assert_eq!(message["state"]["moveHistory"][0]["from"], "d2");
    assert_eq!(message["state"]["moveHistory"][0]["piece"]["piece"], "p");
}
