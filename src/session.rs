//! Game session: mode handling and the deferred AI move
//!
//! A session is what a front end talks to. It owns one [`GameState`], the
//! [`Advisor`] used in versus-AI mode, and a generation counter that keeps
//! a delayed AI move from landing on a game that was reset while the move
//! was waiting to be displayed.

use serde::{Deserialize, Serialize};

use crate::{
    advisor::Advisor,
    board::Player,
    engine::{GameState, GameStatus},
};

/// The mark the advisor plays in versus-AI mode; the human opens as X.
const AI_MARK: Player = Player::O;

/// How the session is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayer,
    VsAi,
}

/// An advised move bound to the game generation it was computed for.
///
/// The front end holds one of these across its display delay and hands it
/// back through [`GameSession::apply_scheduled`]; if the session was reset
/// in the meantime the token is stale and applying it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMove {
    position: usize,
    generation: u64,
}

impl ScheduledMove {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A single game plus the mode and advisor driving it
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    state: GameState,
    advisor: Advisor,
    generation: u64,
}

impl GameSession {
    /// Start a session in the given mode with a fresh game
    pub fn new(mode: GameMode) -> Self {
        GameSession {
            mode,
            state: GameState::new(),
            advisor: Advisor::new(),
            generation: 0,
        }
    }

    /// Start a session with a seeded advisor for reproducible AI play
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        GameSession {
            mode,
            state: GameState::new(),
            advisor: Advisor::seeded(seed),
            generation: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Generation of the current game; bumped on every reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a human cell selection and return the updated state.
    ///
    /// # Errors
    ///
    /// Propagates the engine's move rejection; the caller ignores it and
    /// leaves the rendered board as is.
    pub fn select_cell(&mut self, index: usize) -> crate::Result<&GameState> {
        self.state.apply_move(index)?;
        Ok(&self.state)
    }

    /// True when the session is waiting on the AI: versus-AI mode, game in
    /// progress, and the AI mark to move
    pub fn ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi
            && self.state.status() == GameStatus::InProgress
            && self.state.current_player() == AI_MARK
    }

    /// Ask the advisor for the AI's move and bind it to the current
    /// generation. Returns `None` when it is not the AI's turn.
    ///
    /// The move is not applied here; the front end applies it after its
    /// display delay via [`apply_scheduled`](Self::apply_scheduled).
    pub fn schedule_ai_move(&mut self) -> Option<ScheduledMove> {
        if !self.ai_turn() {
            return None;
        }

        let position = self.advisor.suggest_move(self.state.board(), AI_MARK)?;
        Some(ScheduledMove {
            position,
            generation: self.generation,
        })
    }

    /// Apply a previously scheduled AI move.
    ///
    /// Returns `Ok(false)` without touching the state when the token's
    /// generation no longer matches (the game it was computed for has been
    /// reset), `Ok(true)` when the move was applied.
    ///
    /// # Errors
    ///
    /// Propagates the engine's move rejection for a current-generation
    /// token whose target cell has become invalid.
    pub fn apply_scheduled(&mut self, scheduled: ScheduledMove) -> crate::Result<bool> {
        if scheduled.generation != self.generation {
            return Ok(false);
        }
        self.state.apply_move(scheduled.position)?;
        Ok(true)
    }

    /// Replace the game with a fresh one, invalidating any scheduled move
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.generation += 1;
    }

    /// Switch mode; starts a fresh game, as a mode flip mid-game would
    /// leave the turn ownership ambiguous
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// The status line for the current state
    pub fn status_message(&self) -> String {
        self.state.status_message()
    }
}
