//! Property tests for board moves, clearing and win detection.

use gridmark::{Board, Cell, GameController, MoveError, SetupError, Token};

fn all_coordinates(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |row| (0..n).map(move |col| (row, col)))
}

#[test]
fn test_dimensions_too_large_to_allocate_are_errors() {
    for dimension in [usize::MAX, 1 << (usize::BITS / 2), usize::MAX / 2] {
        assert_eq!(
            Board::new(dimension),
            Err(SetupError::DimensionTooLarge { dimension })
        );
        assert!(GameController::new("Ada", "Grace", dimension).is_err());
    }
}

#[test]
fn test_drop_on_occupied_cell_never_changes_it() {
    for n in 1..=5 {
        let mut board = Board::new(n).unwrap();
        for (row, col) in all_coordinates(n) {
            let token = if (row + col) % 2 == 0 { Token::O } else { Token::X };
            board.drop_token(row, col, token).unwrap();
        }
        let before = board.clone();
        for (row, col) in all_coordinates(n) {
            for token in [Token::O, Token::X] {
                assert_eq!(
                    board.drop_token(row, col, token),
                    Err(MoveError::CellOccupied { row, col })
                );
            }
        }
        assert_eq!(board, before);
    }
}

#[test]
fn test_out_of_range_drop_leaves_board_unchanged() {
    for n in 1..=5 {
        let mut board = Board::new(n).unwrap();
        board.drop_token(0, 0, Token::X).unwrap();
        let before = board.clone();

        for (row, col) in [(n, 0), (0, n), (n, n), (usize::MAX, 0), (0, usize::MAX)] {
            assert_eq!(
                board.drop_token(row, col, Token::O),
                Err(MoveError::OutOfBounds {
                    row,
                    col,
                    dimension: n
                })
            );
            assert!(board.get(row, col).is_err());
        }
        assert_eq!(board, before);
    }
}

#[test]
fn test_clear_then_no_winner() {
    let mut board = Board::new(3).unwrap();
    for col in 0..3 {
        board.drop_token(0, col, Token::O).unwrap();
    }
    assert!(board.check_win(Token::O));

    board.clear();
    assert!(!board.check_win(Token::O));
    assert!(!board.check_win(Token::X));
    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_full_top_row_wins() {
    let mut board = Board::new(3).unwrap();
    board.drop_token(0, 0, Token::O).unwrap();
    board.drop_token(0, 1, Token::O).unwrap();
    assert!(!board.check_win(Token::O));
    board.drop_token(0, 2, Token::O).unwrap();
    assert!(board.check_win(Token::O));
}

#[test]
fn test_main_diagonal_wins() {
    let mut board = Board::new(3).unwrap();
    board.drop_token(0, 0, Token::O).unwrap();
    board.drop_token(1, 1, Token::O).unwrap();
    board.drop_token(2, 2, Token::O).unwrap();
    assert!(board.check_win(Token::O));
    assert!(!board.check_win(Token::X));
}

#[test]
fn test_full_board_without_run_has_no_winner() {
    let mut board = Board::new(3).unwrap();
    let layout = [
        [Token::O, Token::X, Token::O],
        [Token::O, Token::X, Token::X],
        [Token::X, Token::O, Token::O],
    ];
    for (row, tokens) in layout.iter().enumerate() {
        for (col, token) in tokens.iter().enumerate() {
            board.drop_token(row, col, *token).unwrap();
        }
    }
    assert!(board.is_full());
    assert!(!board.check_win(Token::O));
    assert!(!board.check_win(Token::X));
}

#[test]
fn test_every_line_wins_on_larger_boards() {
    for n in 2..=6 {
        for line in 0..n {
            let mut rows = Board::new(n).unwrap();
            let mut cols = Board::new(n).unwrap();
            for i in 0..n {
                rows.drop_token(line, i, Token::X).unwrap();
                cols.drop_token(i, line, Token::X).unwrap();
            }
            assert!(rows.check_win(Token::X), "row {line} on {n}x{n}");
            assert!(cols.check_win(Token::X), "column {line} on {n}x{n}");
        }

        let mut anti = Board::new(n).unwrap();
        for i in 0..n {
            anti.drop_token(i, n - 1 - i, Token::O).unwrap();
        }
        assert!(anti.check_win(Token::O), "anti-diagonal on {n}x{n}");
    }
}

#[test]
fn test_broken_line_does_not_win() {
    let mut board = Board::new(5).unwrap();
    for col in [0, 1, 3, 4] {
        board.drop_token(2, col, Token::O).unwrap();
    }
    board.drop_token(2, 2, Token::X).unwrap();
    assert!(!board.check_win(Token::O));
}
