use crate::core::game::{Game, Message, Step};
use crate::core::terminal::TerminalContext;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    AwaitingInput,
    Evaluating,
    Done,
}

/// What is left once a game reached its terminal state
#[derive(Debug)]
pub struct Finished<G> {
    pub game: G,
    /// Lines the game refused to parse
    pub rejected: u32,
}

/// Read-evaluate-print loop driving a single game to completion
pub struct GameLoop<G: Game, I: BufRead, W: Write> {
    game: G,
    input: I,
    terminal: TerminalContext<W>,
    rejected: u32,
}

impl<G: Game, I: BufRead, W: Write> GameLoop<G, I, W> {
    pub fn new(game: G, input: I, terminal: TerminalContext<W>) -> Self {
        Self { game, input, terminal, rejected: 0 }
    }

    /// Runs until the game finishes. Parse failures are recovered here;
    /// I/O errors and end of input are returned to the caller.
    pub fn run(mut self) -> Result<Finished<G>> {
        for line in self.game.banner() {
            self.emit(&line)?;
        }

        let mut state = LoopState::AwaitingInput;
        let mut line = String::new();

        loop {
            trace!(?state, "game loop step");
            state = match state {
                LoopState::AwaitingInput => {
                    self.terminal.print(self.game.prompt())?;
                    self.terminal.flush()?;

                    line.clear();
                    let read = self.input.read_line(&mut line)
                        .with_context(|| format!("failed to read input for {}", G::NAME))?;
                    if read == 0 {
                        bail!("input closed before {} was finished", G::NAME);
                    }
                    LoopState::Evaluating
                }
                LoopState::Evaluating => match self.game.parse_line(&line) {
                    Err(error) => {
                        self.rejected += 1;
                        debug!(error = %error, rejected = self.rejected, "rejected input line");
                        let warning = self.game.reject(&error);
                        self.emit(&warning)?;
                        LoopState::AwaitingInput
                    }
                    Ok(input) => match self.game.handle_input(input) {
                        Step::Continue(feedback) => {
                            self.emit(&feedback)?;
                            LoopState::AwaitingInput
                        }
                        Step::Finished(closing) => {
                            for message in &closing {
                                self.emit(message)?;
                            }
                            LoopState::Done
                        }
                    },
                },
                LoopState::Done => break,
            };
        }

        self.terminal.flush()?;
        debug!(game = G::NAME, rejected = self.rejected, "game loop finished");
        Ok(Finished { game: self.game, rejected: self.rejected })
    }

    fn emit(&mut self, message: &Message) -> Result<()> {
        self.terminal.print_colored_line(&message.text, message.color)?;
        Ok(())
    }
}
