//! Board rules: legality, win detection and terminal utility

use noughts::{
    Error,
    tictactoe::{Board, Cell, Move, Player, WINNING_LINES, collect_reachable_boards},
};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

mod win_detection {
    use super::*;

    #[test]
    fn every_line_wins_for_either_player() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [Cell::Empty; 9];
                for index in line {
                    cells[index] = player.to_cell();
                }
                let board = Board::from_cells(cells);

                assert!(board.has_won(player), "{player} should hold {line:?}");
                assert!(!board.has_won(player.opponent()));
                assert_eq!(board.winner(), Some(player));
                assert!(board.is_terminal());

                let expected = if player == Player::X { 1 } else { -1 };
                assert_eq!(board.utility().unwrap(), expected);
            }
        }
    }

    #[test]
    fn full_board_without_a_line_is_a_tie() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.utility().unwrap(), 0);
    }

    #[test]
    fn open_board_has_no_utility() {
        let board = Board::from_string("XO./.../...").unwrap();
        assert!(!board.is_terminal());
        assert!(matches!(board.utility(), Err(Error::NotTerminal)));
    }
}

mod moves {
    use super::*;

    #[test]
    fn available_moves_are_row_major() {
        let board = Board::from_string(".X./O../..X").unwrap();
        assert_eq!(
            board.available_moves(),
            vec![mv(0, 0), mv(0, 2), mv(1, 1), mv(1, 2), mv(2, 0), mv(2, 1)]
        );
    }

    #[test]
    fn each_move_shrinks_the_move_list_by_one() {
        let mut board = Board::new();
        let mut player = Player::X;
        for expected in (1..=9).rev() {
            let moves = board.available_moves();
            assert_eq!(moves.len(), expected);
            board = board.apply(moves[0], player).unwrap();
            player = player.opponent();
        }
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn apply_leaves_the_original_untouched() {
        let boards = collect_reachable_boards();
        for board in boards.iter().filter(|b| !b.is_terminal()).step_by(50) {
            let player = board.to_move().unwrap();
            let snapshot = *board;

            for candidate in board.available_moves() {
                let next = board.apply(candidate, player).unwrap();

                assert_eq!(*board, snapshot, "{candidate} changed {snapshot}");
                assert_eq!(next.get(candidate.row, candidate.col), player.to_cell());
                assert_eq!(next.occupied_count(), board.occupied_count() + 1);
            }
        }
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let board = Board::new().apply(mv(0, 0), Player::X).unwrap();
        let err = board.apply(mv(0, 0), Player::O).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 0, col: 0 }));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert!(matches!(
            Move::new(3, 0),
            Err(Error::InvalidPosition { row: 3, col: 0 })
        ));
        assert!(Move::from_index(9).is_err());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn separators_are_ignored() {
        let compact = Board::from_string("XO./.X./..O").unwrap();
        let grid = Board::from_string("| X | O | . |\n| . | X | . |\n| . | . | O |").unwrap();
        assert_eq!(compact, grid);
        assert_eq!(compact.to_move().unwrap(), Player::X);
    }

    #[test]
    fn unreachable_boards_are_rejected() {
        assert!(Board::from_string("XXX/.../...").is_err());
        assert!(Board::from_string("OO./.../...").is_err());
        assert!(Board::from_string("XXX/OOO/...").is_err());
        assert!(Board::from_string("XX").is_err());
        assert!(Board::from_string("XQ./.../...").is_err());
    }
}
