//! Game state and move application

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    error::MoveRejection,
};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Won or Draw; no further moves accepted
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state: board, player to move, and status.
///
/// Mutated only through [`apply_move`](Self::apply_move); a reset replaces
/// the whole value. Any number of independent games can coexist in a
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty board, X to move, in progress
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Build a state from an arbitrary position, deriving the status from
    /// the board (win check first, then draw). Intended for analysis and
    /// tests; `current_player` is taken at face value.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        let status = if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        GameState {
            board,
            current_player,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Place the current player's mark at `position` and advance the game.
    ///
    /// On a win the mover keeps `current_player` (the winner is readable
    /// from both status and player); on a draw the status flips to `Draw`;
    /// otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidMove`](crate::Error::InvalidMove) when the
    /// position is out of range, the cell is occupied, or the game is over.
    /// The state is unchanged on failure.
    pub fn apply_move(&mut self, position: usize) -> crate::Result<()> {
        let reject = |reason| crate::Error::InvalidMove { position, reason };

        if self.status.is_terminal() {
            return Err(reject(MoveRejection::GameOver));
        }
        if position >= 9 {
            return Err(reject(MoveRejection::OutOfBounds));
        }
        if !self.board.is_empty(position) {
            return Err(reject(MoveRejection::Occupied));
        }

        self.board.place(position, self.current_player.to_cell());

        if self.board.winning_line().is_some() {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    /// The cell indices of the winning line, for highlighting. Empty slice
    /// while the game is in progress or drawn.
    pub fn winning_cells(&self) -> Vec<usize> {
        match self.status {
            GameStatus::Won(_) => self
                .board
                .winning_line()
                .map(|line| line.to_vec())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Replace this state with a fresh game
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// The status line a front end shows for this state
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(winner) => format!("Player {winner} wins!"),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
