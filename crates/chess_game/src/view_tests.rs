use super::*;
use chess_core::Coord;

#[test]
fn test_render_start_position() {
    let game = Game::new();
    let text = BoardView::new(&game, false).render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 r n b q k b n r");
    assert_eq!(lines[6], "2 P P P P P P P P");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn test_render_marks_selection() {
    let mut game = Game::new();
    game.click(Coord::new(7, 6));
    let text = BoardView::new(&game, false).render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[5], "3 . . . . .*. .*.");
    assert_eq!(lines[7], "1 R N B Q K B>N R");
}

#[test]
fn test_render_flipped() {
    let game = Game::new();
    let text = BoardView::new(&game, true).render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "1 R N B K Q B N R");
    assert_eq!(lines[7], "8 r n b k q b n r");
    assert_eq!(lines[8], "  h g f e d c b a");
}

#[test]
fn test_turn_label() {
    let game = Game::new();
    assert_eq!(
        BoardView::new(&game, false).turn_label(),
        "Current Turn: White (ongoing)"
    );
}
