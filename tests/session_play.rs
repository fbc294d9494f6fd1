//! Full games through the session driver

use std::io::Cursor;

use noughts::{
    Error,
    adapters::{ComputedAgent, InteractiveAgent, RandomAgent},
    session::{GameSession, Phase, SessionConfig, SessionDriver},
    tictactoe::{Board, GameOutcome, Move, Player},
};

fn quiet() -> SessionDriver {
    SessionDriver::new(SessionConfig::quiet())
}

mod engine_strength {
    use super::*;

    #[test]
    fn engine_never_loses_to_random_play_as_x() {
        let driver = quiet();
        for seed in 0..40 {
            let mut engine = ComputedAgent::default();
            let mut random = RandomAgent::with_seed("Random", seed);
            let game = driver.run(&mut engine, &mut random, &mut Vec::new()).unwrap();
            assert_ne!(game.outcome, Some(GameOutcome::Win(Player::O)), "seed {seed}");
        }
    }

    #[test]
    fn engine_never_loses_to_random_play_as_o() {
        let driver = quiet();
        for seed in 0..40 {
            let mut random = RandomAgent::with_seed("Random", seed);
            let mut engine = ComputedAgent::default();
            let game = driver.run(&mut random, &mut engine, &mut Vec::new()).unwrap();
            assert_ne!(game.outcome, Some(GameOutcome::Win(Player::X)), "seed {seed}");
        }
    }

    #[test]
    fn engine_against_itself_draws() {
        let mut x = ComputedAgent::new("X");
        let mut o = ComputedAgent::new("O");
        let game = quiet().run(&mut x, &mut o, &mut Vec::new()).unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert!(game.current_board().unwrap().is_full());
    }
}

mod console {
    use super::*;

    #[test]
    fn human_game_prints_boards_and_result() {
        // Corner opening; the engine answers in the centre and the game is
        // drawn. The second and third lines are rejected and re-prompted.
        let input = Cursor::new(b"0,0\n0,0\nbad\n2,2\n2,1\n0,2\n1,0\n".to_vec());
        let mut human = InteractiveAgent::new("Human", input, Vec::new());
        let mut engine = ComputedAgent::new("Computer");
        let driver = SessionDriver::new(SessionConfig::quiet().with_show_board(true));

        let mut out = Vec::new();
        let game = driver.run(&mut human, &mut engine, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let prompts = String::from_utf8(human.into_output()).unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.ply(), 9);
        assert!(printed.starts_with("|   |   |   |\n"));
        assert!(printed.contains("Computer (O) plays (1, 1)"));
        assert!(printed.ends_with("It's a tie!\n"));

        assert_eq!(prompts.matches("Player X's turn (row,col): ").count(), 7);
        assert_eq!(prompts.matches("Invalid move. Try again.").count(), 1);
        assert_eq!(prompts.matches("Please enter in format: row,col").count(), 1);
    }

    #[test]
    fn closed_input_ends_the_session() {
        let mut human = InteractiveAgent::new("Human", Cursor::new(Vec::new()), Vec::new());
        let mut engine = ComputedAgent::default();
        let result = quiet().run(&mut human, &mut engine, &mut Vec::new());
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}

mod sessions {
    use super::*;

    #[test]
    fn session_alternates_and_finishes() {
        let mut session = GameSession::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(!session.is_over());
            session = session.accept(Move::new(row, col).unwrap()).unwrap();
        }

        assert_eq!(session.phase(), Phase::Finished(GameOutcome::Win(Player::X)));
        assert!(matches!(
            session.accept(Move::new(2, 2).unwrap()),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn resumed_session_is_finished_by_the_engine() {
        let board = Board::from_string("XX./OO./...").unwrap();
        let session = GameSession::from_board(board).unwrap();
        assert_eq!(session.active_player(), Player::X);

        let mut x = ComputedAgent::default();
        let mut o = ComputedAgent::default();
        let game = quiet().play_out(session, &mut x, &mut o, &mut Vec::new()).unwrap();

        assert_eq!(game.ply(), 1);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }
}
