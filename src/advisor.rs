//! Heuristic move selection for the AI opponent
//!
//! The advisor is a fixed-priority cascade (win, block, center, corner,
//! anything left), not a minimax search. It can be out-forked by a careful
//! opponent; that is an accepted trade for its bounded cost of at most nine
//! trial placements per scan.

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::board::{Board, Player};

/// Center cell index on the 3x3 board
const CENTER: usize = 4;

/// Corner cell indices, the preferred fallback after the center
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Move advisor with an injectable random source.
///
/// Steps 1-3 of the cascade are deterministic; the corner and any-cell
/// fallbacks pick uniformly at random, so tests seed the RNG through
/// [`seeded`](Self::seeded) or [`reseed`](Self::reseed).
#[derive(Debug)]
pub struct Advisor {
    rng: Option<StdRng>,
}

impl Advisor {
    /// Create an advisor that seeds itself from entropy on first use
    pub fn new() -> Self {
        Advisor { rng: None }
    }

    /// Create an advisor with a fixed seed for reproducible play
    pub fn seeded(seed: u64) -> Self {
        Advisor {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Set or reset the advisor's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        self.rng = Some(rng);
    }

    /// Propose a move for `ai_mark` on `board`.
    ///
    /// Priority cascade, each step consulted only when the previous one
    /// found nothing:
    ///
    /// 1. complete an own line (lowest index first)
    /// 2. block the opponent's completing move (lowest index first)
    /// 3. take the center
    /// 4. take a random empty corner
    /// 5. take any random empty cell
    ///
    /// Returns `None` only when the board is full. Lookahead runs on copies
    /// of the board; the caller's board is never mutated.
    pub fn suggest_move(&mut self, board: &Board, ai_mark: Player) -> Option<usize> {
        if let Some(pos) = winning_move_for(board, ai_mark) {
            return Some(pos);
        }

        if let Some(pos) = winning_move_for(board, ai_mark.opponent()) {
            return Some(pos);
        }

        if board.is_empty(CENTER) {
            return Some(CENTER);
        }

        let rng = self
            .rng
            .get_or_insert_with(|| StdRng::seed_from_u64(rand::random::<u64>()));

        let open_corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        if let Some(&pos) = open_corners.choose(rng) {
            return Some(pos);
        }

        board.empty_positions().choose(rng).copied()
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowest-index empty cell where placing `player`'s mark completes a line.
///
/// Each candidate is tried on a copy of the board and discarded.
fn winning_move_for(board: &Board, player: Player) -> Option<usize> {
    let piece = player.to_cell();
    (0..9).find(|&pos| {
        if !board.is_empty(pos) {
            return false;
        }
        let mut trial = *board;
        trial.place(pos, piece);
        trial.winner() == Some(player)
    })
}
