use super::*;
use chess_core::PieceKind;

fn c(row: i8, col: i8) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_select_own_piece() {
    let mut game = Game::new();
    let outcome = game.click(c(6, 4));
    match outcome {
        ClickOutcome::Selected { from, moves } => {
            assert_eq!(from, c(6, 4));
            assert_eq!(moves, vec![c(5, 4), c(4, 4)]);
        }
        other => panic!("expected selection, got {other:?}"),
    }
    assert_eq!(game.selected(), Some(c(6, 4)));
    assert_eq!(game.highlighted().len(), 2);
}

#[test]
fn test_cannot_select_opponent_or_empty() {
    let mut game = Game::new();
    assert_eq!(game.click(c(1, 4)), ClickOutcome::Ignored);
    assert_eq!(game.click(c(4, 4)), ClickOutcome::Ignored);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_move_passes_turn() {
    let mut game = Game::new();
    game.click(c(6, 4));
    let outcome = game.click(c(4, 4));
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            from: c(6, 4),
            to: c(4, 4),
            captured: None
        }
    );
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.selected(), None);
    assert!(game.highlighted().is_empty());
    assert_eq!(game.status(), GameStatus::Ongoing);

    // White pieces are no longer selectable
    assert_eq!(game.click(c(6, 3)), ClickOutcome::Ignored);
    assert!(matches!(game.click(c(1, 3)), ClickOutcome::Selected { .. }));
}

#[test]
fn test_click_outside_highlights_deselects() {
    let mut game = Game::new();
    game.click(c(7, 1));
    assert_eq!(game.click(c(4, 4)), ClickOutcome::Deselected);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &BoardState::new());
}

#[test]
fn test_click_other_own_piece_deselects() {
    let mut game = Game::new();
    game.click(c(7, 1));
    assert_eq!(game.click(c(6, 0)), ClickOutcome::Deselected);
    assert!(matches!(game.click(c(6, 0)), ClickOutcome::Selected { .. }));
}

#[test]
fn test_piece_without_moves_can_be_selected() {
    let mut game = Game::new();
    let outcome = game.click(c(7, 0));
    assert_eq!(
        outcome,
        ClickOutcome::Selected {
            from: c(7, 0),
            moves: vec![]
        }
    );
    assert_eq!(game.click(c(6, 0)), ClickOutcome::Deselected);
}

#[test]
fn test_capture_reports_victim() {
    let mut game = Game::new();
    for at in [c(6, 4), c(4, 4), c(1, 3), c(3, 3), c(4, 4)] {
        game.click(at);
    }
    match game.click(c(3, 3)) {
        ClickOutcome::Moved { captured, .. } => {
            let victim = captured.expect("a capture");
            assert_eq!(victim.kind(), PieceKind::Pawn);
            assert_eq!(victim.color(), Color::Black);
        }
        other => panic!("expected capture, got {other:?}"),
    }
    assert_eq!(game.board().piece_count(), 31);
}

#[test]
fn test_reset() {
    let mut game = Game::new();
    game.click(c(6, 4));
    game.click(c(4, 4));
    game.click(c(1, 4));
    game.reset();
    assert_eq!(game.board(), &BoardState::new());
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_from_config() {
    let config = GameConfig {
        start_position: "4k3/8/8/8/8/8/8/4K3 b".to_string(),
        ..GameConfig::default()
    };
    let mut game = Game::from_config(&config).unwrap();
    assert_eq!(game.turn(), Color::Black);
    match game.click(c(0, 4)) {
        ClickOutcome::Selected { moves, .. } => assert_eq!(moves.len(), 5),
        other => panic!("expected selection, got {other:?}"),
    }
}

#[test]
fn test_reset_restores_configured_start() {
    let config = GameConfig {
        start_position: "4k3/8/8/8/8/8/8/4K3 b".to_string(),
        ..GameConfig::default()
    };
    let mut game = Game::from_config(&config).unwrap();
    game.click(c(0, 4));
    game.click(c(1, 4));
    assert_eq!(game.turn(), Color::White);

    game.reset();
    assert_eq!(game.board().piece_count(), 2);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.board().piece_at(c(0, 4)).unwrap().symbol(), 'k');
    assert_eq!(game.board(), Game::from_config(&config).unwrap().board());
}
