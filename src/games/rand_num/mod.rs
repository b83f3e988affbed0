pub mod game;
pub mod parse;
pub use game::{NumberGame, Verdict, SECRET_RANGE};
pub use parse::InvalidInputError;

use crate::core::engine::GameLoop;
use crate::core::rng::SecretSource;
use crate::core::terminal::TerminalContext;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Outcome of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub secret: u32,
    pub attempts: u32,
    /// Lines rejected as invalid; never counted as attempts
    pub rejected: u32,
}

/// Game runner for Number Guessing Game
pub fn run_game<S, I, W>(source: &mut S, input: I, terminal: TerminalContext<W>) -> Result<GameSummary>
where
    S: SecretSource,
    I: BufRead,
    W: Write,
{
    let game = NumberGame::new(source);
    let finished = GameLoop::new(game, input, terminal).run()?;

    let summary = GameSummary {
        secret: finished.game.secret(),
        attempts: finished.game.attempts(),
        rejected: finished.rejected,
    };
    info!(secret = summary.secret, attempts = summary.attempts, rejected = summary.rejected, "number guessed");
    Ok(summary)
}
