//! Tic-tac-toe rules engine and heuristic move advisor
//!
//! This crate provides:
//! - A 3x3 board/rules engine with win and draw detection
//! - A priority-cascade move advisor (win, block, center, corner, any)
//!   with an injectable seeded RNG
//! - A session layer that handles game modes and keeps deferred AI moves
//!   from landing on a reset game
//!
//! Rendering is out of scope; a front end feeds cell indices in and reads
//! the board, status text, and winning-line indices back out.

pub mod advisor;
pub mod board;
pub mod engine;
pub mod error;
pub mod lines;
pub mod session;

pub use advisor::Advisor;
pub use board::{Board, Cell, Player};
pub use engine::{GameState, GameStatus};
pub use error::{Error, MoveRejection, Result};
pub use lines::WINNING_LINES;
pub use session::{GameMode, GameSession, ScheduledMove};
