//! Advisor-vs-advisor self-play driver
//!
//! Plays the heuristic against itself and reports outcome tallies. Useful
//! as an end-to-end smoke run and for eyeballing how often the cascade's
//! random fallbacks change results across seeds.

use anyhow::Result;
use clap::Parser;
use noughts::{Advisor, GameState, GameStatus, Player};

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(about = "Play advisor-vs-advisor tic-tac-toe games and tally outcomes")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Seed for the advisor RNG (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut advisor = match cli.seed {
        Some(seed) => Advisor::seeded(seed),
        None => Advisor::new(),
    };

    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for _ in 0..cli.games {
        let mut state = GameState::new();
        while state.status() == GameStatus::InProgress {
            let mover = state.current_player();
            let position = advisor
                .suggest_move(state.board(), mover)
                .expect("an in-progress board always has an empty cell");
            state.apply_move(position)?;
        }

        match state.status() {
            GameStatus::Won(Player::X) => x_wins += 1,
            GameStatus::Won(Player::O) => o_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::InProgress => unreachable!("loop exits only on terminal status"),
        }
    }

    println!(
        "played {} games: X wins {}, O wins {}, draws {}",
        cli.games, x_wins, o_wins, draws
    );

    Ok(())
}
