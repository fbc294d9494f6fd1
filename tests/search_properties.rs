//! Properties of the search over the whole reachable state space

use noughts::{
    search::{self, AlphaBeta, Minimax},
    tictactoe::{Board, GameOutcome, Player, collect_reachable_boards},
};

fn open_boards() -> Vec<(Board, Player)> {
    collect_reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .map(|board| (board, board.to_move().unwrap()))
        .collect()
}

mod state_space {
    use super::*;

    #[test]
    fn reachable_board_counts() {
        let boards = collect_reachable_boards();
        assert_eq!(boards.len(), 5478);

        let terminal: Vec<_> = boards.iter().filter(|b| b.is_terminal()).collect();
        assert_eq!(terminal.len(), 958);

        let count = |outcome: GameOutcome| {
            terminal
                .iter()
                .filter(|board| GameOutcome::of(board).unwrap() == outcome)
                .count()
        };
        assert_eq!(count(GameOutcome::Win(Player::X)), 626);
        assert_eq!(count(GameOutcome::Win(Player::O)), 316);
        assert_eq!(count(GameOutcome::Draw), 16);
    }

    #[test]
    fn empty_board_is_a_draw() {
        assert_eq!(search::best_value(&Board::new(), Player::X), 0);
        assert_eq!(search::minimax_value(&Board::new(), Player::X), 0);
    }
}

mod pruning {
    use super::*;

    #[test]
    fn alpha_beta_matches_unpruned_minimax_everywhere() {
        for (board, player) in open_boards() {
            let mut pruned = AlphaBeta::new();
            let mut reference = Minimax::new();

            let fast = pruned.best_decision(&board, player).unwrap().unwrap();
            let slow = reference.best_decision(&board, player).unwrap().unwrap();

            assert_eq!(fast.value, slow.value, "value differs on {board}");
            assert_eq!(fast.mv, slow.mv, "move differs on {board}");
            assert_eq!(pruned.best_value(&board, player), slow.value);
        }
    }

    #[test]
    fn chosen_move_is_optimal_and_first_among_equals() {
        for (board, player) in open_boards() {
            let decision = search::best_decision(&board, player).unwrap().unwrap();
            let values = search::evaluate_moves(&board, player).unwrap();

            let optimum = match player {
                Player::X => values.iter().map(|&(_, v)| v).max(),
                Player::O => values.iter().map(|&(_, v)| v).min(),
            }
            .unwrap();
            let first = values.iter().find(|&&(_, v)| v == optimum).unwrap();

            assert_eq!(decision.value, optimum, "on {board}");
            assert_eq!(decision.mv, first.0, "on {board}");
        }
    }

    #[test]
    fn values_stay_in_range() {
        for (board, player) in open_boards() {
            let value = search::best_value(&board, player);
            assert!((-1..=1).contains(&value));
        }
    }

    #[test]
    fn wide_window_equals_exact_value() {
        for (board, player) in open_boards().into_iter().take(200) {
            let exact = search::minimax_value(&board, player);
            let windowed = match player {
                Player::X => search::max_value(&board, -2, 2),
                Player::O => search::min_value(&board, -2, 2),
            };
            assert_eq!(windowed, exact, "on {board}");
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes_from_the_empty_board() {
        let mut pruned = AlphaBeta::new();
        let mut reference = Minimax::new();
        pruned.best_value(&Board::new(), Player::X);
        reference.value(&Board::new(), Player::X);

        assert_eq!(reference.stats().nodes, 549_946);
        assert!(pruned.stats().nodes < reference.stats().nodes / 5);
        assert!(pruned.stats().cutoffs > 0);
    }
}
