//! Test suite for the session layer: versus-AI flow, mode handling, and
//! the generation guard on deferred AI moves

use noughts::{GameMode, GameSession, GameStatus, Player};

mod versus_ai {
    use super::*;

    /// Play whole games the way a front end would: the human picks the
    /// lowest empty cell, the AI move goes through the schedule/apply pair.
    #[test]
    fn full_game_loop_reaches_terminal_status() {
        let mut session = GameSession::with_seed(GameMode::VsAi, 42);

        loop {
            let state = *session.state();
            if state.status() != GameStatus::InProgress {
                break;
            }

            if session.ai_turn() {
                let scheduled = session.schedule_ai_move().expect("AI turn must yield a move");
                assert!(session.apply_scheduled(scheduled).unwrap());
            } else {
                let pos = state.board().empty_positions()[0];
                session.select_cell(pos).unwrap();
            }
        }

        let status = session.state().status();
        assert!(status.is_terminal());
        match status {
            GameStatus::Won(winner) => {
                assert_eq!(
                    session.status_message(),
                    format!("Player {winner} wins!")
                );
                assert_eq!(session.state().winning_cells().len(), 3);
            }
            GameStatus::Draw => {
                assert_eq!(session.status_message(), "Game ended in a draw!");
                assert!(session.state().winning_cells().is_empty());
            }
            GameStatus::InProgress => unreachable!(),
        }
    }

    #[test]
    fn naive_lowest_cell_human_loses_or_draws() {
        // The cascade blocks every immediate threat, so the lowest-cell
        // human should never beat it
        for seed in 0..20 {
            let mut session = GameSession::with_seed(GameMode::VsAi, seed);

            while session.state().status() == GameStatus::InProgress {
                if session.ai_turn() {
                    let scheduled = session.schedule_ai_move().unwrap();
                    session.apply_scheduled(scheduled).unwrap();
                } else {
                    let pos = session.state().board().empty_positions()[0];
                    session.select_cell(pos).unwrap();
                }
            }

            assert_ne!(
                session.state().status(),
                GameStatus::Won(Player::X),
                "seed {seed}: the blocking cascade lost to the naive human"
            );
        }
    }
}

mod generation_guard {
    use super::*;

    #[test]
    fn reset_invalidates_pending_move() {
        let mut session = GameSession::with_seed(GameMode::VsAi, 42);
        session.select_cell(0).unwrap();
        let pending = session.schedule_ai_move().expect("AI turn must yield a move");

        // The front end's display delay elapses after a reset
        session.reset();
        assert!(!session.apply_scheduled(pending).unwrap());
        assert_eq!(session.state().board().occupied_count(), 0);
        assert_eq!(session.state().current_player(), Player::X);
    }

    #[test]
    fn pending_move_survives_without_reset() {
        let mut session = GameSession::with_seed(GameMode::VsAi, 42);
        session.select_cell(0).unwrap();
        let pending = session.schedule_ai_move().unwrap();

        assert!(session.apply_scheduled(pending).unwrap());
        assert_eq!(session.state().board().occupied_count(), 2);
    }

    #[test]
    fn token_from_previous_game_never_applies_to_next() {
        let mut session = GameSession::with_seed(GameMode::VsAi, 42);
        session.select_cell(0).unwrap();
        let stale = session.schedule_ai_move().unwrap();

        session.reset();
        // Identical opening in the new game; the old token still must not fire
        session.select_cell(0).unwrap();
        assert!(!session.apply_scheduled(stale).unwrap());

        let fresh = session.schedule_ai_move().expect("new game, AI to move");
        assert_eq!(fresh.generation(), session.generation());
        assert!(session.apply_scheduled(fresh).unwrap());
    }
}

mod mode_handling {
    use super::*;

    #[test]
    fn two_player_mode_has_no_ai() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        session.select_cell(0).unwrap();
        session.select_cell(1).unwrap();
        assert!(!session.ai_turn());
        assert_eq!(session.schedule_ai_move(), None);
    }

    #[test]
    fn switching_mode_restarts_the_game() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        session.select_cell(4).unwrap();

        session.set_mode(GameMode::VsAi);
        assert_eq!(session.mode(), GameMode::VsAi);
        assert_eq!(session.state().board().occupied_count(), 0);
        assert_eq!(session.status_message(), "Player X's turn");
    }

    #[test]
    fn switching_mode_bumps_generation() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        session.select_cell(0).unwrap();
        let generation = session.generation();

        session.set_mode(GameMode::VsAi);
        assert!(session.generation() > generation);
    }
}

mod rendering {
    use super::*;

    #[test]
    fn status_messages_track_the_game() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        assert_eq!(session.status_message(), "Player X's turn");

        session.select_cell(0).unwrap();
        assert_eq!(session.status_message(), "Player O's turn");

        // X: 0, 1, 2 wins the top row; O: 3, 4
        for pos in [3, 1, 4, 2] {
            session.select_cell(pos).unwrap();
        }
        assert_eq!(session.status_message(), "Player X wins!");
        assert_eq!(session.state().winning_cells(), vec![0, 1, 2]);
    }
}
