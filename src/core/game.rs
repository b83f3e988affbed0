/// Core game interface for line-driven terminal games
use crate::core::terminal::TerminalColor;

/// A single line of feedback, printed by the engine in the given color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub color: TerminalColor,
}

impl Message {
    pub fn new(text: impl Into<String>, color: TerminalColor) -> Self {
        Self { text: text.into(), color }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TerminalColor::Default)
    }
}

/// What the engine should do after a game handled one parsed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the feedback and wait for the next line
    Continue(Message),
    /// Print the closing lines and stop the loop
    Finished(Vec<Message>),
}

/// Main game trait that all line-driven games implement.
/// The engine owns the terminal and the input stream; the game only sees text.
pub trait Game {
    /// Parsed form of one input line
    type Input;

    /// Rejection produced by `parse_line`. Recovered by the engine, never propagated.
    type Error: std::error::Error + Send + Sync + 'static;

    const NAME: &'static str;

    /// Lines printed once before the first prompt
    fn banner(&self) -> Vec<Message>;

    /// Prompt printed before every read, without a trailing newline
    fn prompt(&self) -> &str;

    /// Game developer controls input parsing - no framework interference
    fn parse_line(&self, line: &str) -> Result<Self::Input, Self::Error>;

    /// Warning shown when a line could not be parsed
    fn reject(&self, error: &Self::Error) -> Message;

    /// Apply one parsed input to the game state
    fn handle_input(&mut self, input: Self::Input) -> Step;
}
