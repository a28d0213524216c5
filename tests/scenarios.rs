//! End-to-end play scenarios through the public session API.

use othello::{Board, ChangedCell, Color, EngineError, GameResult, GameSession, Occupant, Position};

fn full_board_except_last(white_cells: usize) -> Board {
    let mut board = Board::new();
    for x in 0..8 {
        for y in 0..8 {
            if (x, y) == (7, 7) {
                continue;
            }
            let occupant = if (x * 8 + y) < white_cells as i32 {
                Occupant::White
            } else {
                Occupant::Black
            };
            board.set(x, y, occupant).unwrap();
        }
    }
    board
}

#[test]
fn fresh_session_has_an_empty_board() {
    let game = GameSession::new();

    for column in game.board_snapshot() {
        assert!(column.iter().all(|occupant| *occupant == Occupant::Empty));
    }
    assert_eq!(game.current_turn(), Color::Black);
    assert_eq!(game.result(), GameResult::InProgress);
}

#[test]
fn scenario_a_first_disk_in_corner() {
    let mut game = GameSession::new();

    let outcome = game.place_disk(0, 0).unwrap();

    assert_eq!(
        outcome.changed_cells,
        vec![ChangedCell { x: 0, y: 0, color: Color::Black }]
    );
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn scenario_b_vertical_capture() {
    let mut game = GameSession::new();
    game.place_disk(3, 3).unwrap();
    game.place_disk(3, 4).unwrap();

    let outcome = game.place_disk(3, 5).unwrap();

    assert!(outcome.changed_cells.contains(&ChangedCell { x: 3, y: 4, color: Color::Black }));
    assert!(outcome.changed_cells.contains(&ChangedCell { x: 3, y: 5, color: Color::Black }));
    assert_eq!(game.score().black, 3);
    assert_eq!(game.score().white, 0);
}

#[test]
fn scenario_c_black_majority_wins_on_full_board() {
    let mut game = GameSession::from_board(full_board_except_last(24), Color::Black);

    let outcome = game.place_disk(7, 7).unwrap();

    assert_eq!(outcome.result, GameResult::Winner(Color::Black));
    assert_eq!((game.score().black, game.score().white), (40, 24));
    assert_eq!(game.current_turn(), Color::Black);
}

#[test]
fn scenario_d_tie_goes_to_black() {
    let mut game = GameSession::from_board(full_board_except_last(32), Color::Black);

    let outcome = game.place_disk(7, 7).unwrap();

    assert_eq!((game.score().black, game.score().white), (32, 32));
    assert_eq!(outcome.result, GameResult::Winner(Color::Black));
}

#[test]
fn turns_alternate_until_the_game_ends() {
    let mut game = GameSession::new();
    let mut expected = Color::Black;

    for x in 0..8 {
        for y in 0..8 {
            assert_eq!(game.current_turn(), expected);
            let outcome = game.place_disk(x, y).unwrap();
            assert!(outcome.is_accepted());
            if outcome.result.is_terminal() {
                assert_eq!(game.current_turn(), expected);
                assert_eq!((x, y), (7, 7));
                return;
            }
            expected = expected.opponent();
        }
    }
    panic!("board filled without a terminal result");
}

#[test]
fn declined_placement_keeps_board_and_turn() {
    let mut game = GameSession::new();
    game.place_disk(6, 1).unwrap();
    let snapshot = game.board_snapshot();
    let turn = game.current_turn();

    let outcome = game.place_disk(6, 1).unwrap();

    assert!(outcome.changed_cells.is_empty());
    assert_eq!(game.board_snapshot(), snapshot);
    assert_eq!(game.current_turn(), turn);
}

#[test]
fn aligned_moves_from_center_cover_row_column_and_diagonals() {
    let game = GameSession::new();

    let aligned = game.moves_aligned_with(4, 4).unwrap();

    assert_eq!(aligned.len(), 28);
    for pos in &aligned {
        let dx = pos.x as i32 - 4;
        let dy = pos.y as i32 - 4;
        assert!(dx == 0 || dy == 0 || dx.abs() == dy.abs(), "{pos} is not aligned");
    }
    assert!(aligned.contains(&Position::new(0, 0).unwrap()));
    assert!(aligned.contains(&Position::new(1, 7).unwrap()));
    assert!(aligned.contains(&Position::new(4, 4).unwrap()));
    assert_eq!(aligned, game.moves_aligned_with(4, 4).unwrap());
}

#[test]
fn aligned_query_rejects_off_board_reference() {
    let game = GameSession::new();

    assert_eq!(
        game.moves_aligned_with(4, 9).unwrap_err(),
        EngineError::InvalidCoordinate { x: 4, y: 9 }
    );
}

#[test]
fn game_state_serializes_for_the_page() {
    let mut game = GameSession::new();
    game.place_disk(0, 0).unwrap();

    let json = serde_json::to_value(game.to_game_state()).unwrap();

    assert_eq!(json["currentTurn"], "white");
    assert_eq!(json["blackCount"], 1);
    assert_eq!(json["isGameOver"], false);
    assert_eq!(json["board"][0], 1);
    assert_eq!(json["statusText"], "white");

    let outcome = serde_json::to_value(game.place_disk(1, 0).unwrap()).unwrap();
    assert_eq!(outcome["result"]["status"], "inProgress");
    assert_eq!(outcome["changedCells"][0]["color"], "white");
}
