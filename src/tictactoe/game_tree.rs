//! Enumeration of the reachable state space

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Collect every board reachable from the empty board by alternating play,
/// in breadth-first (ply) order. Play stops at terminal boards.
pub fn collect_reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    queue.push_back(root);
    visited.insert(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);

        if board.is_terminal() {
            continue;
        }
        let Ok(player) = board.to_move() else {
            continue;
        };

        for mv in board.available_moves() {
            let Ok(next) = board.apply(mv, player) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    boards
}

/// Render a board as a single line, e.g. `XO. / .X. / ..O`
pub fn format_board(board: &Board) -> String {
    board.to_string().replace('\n', " / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_boards_start_with_the_empty_board() {
        let boards = collect_reachable_boards();
        assert_eq!(boards[0], Board::new());
        assert!(boards.iter().all(Board::is_reachable));
    }

    #[test]
    fn boards_are_ordered_by_ply() {
        let boards = collect_reachable_boards();
        assert!(
            boards
                .windows(2)
                .all(|pair| pair[0].occupied_count() <= pair[1].occupied_count())
        );
    }

    #[test]
    fn format_board_is_single_line() {
        let board = Board::from_string("XO..X...O").unwrap();
        assert_eq!(format_board(&board), "XO. / .X. / ..O");
    }
}
