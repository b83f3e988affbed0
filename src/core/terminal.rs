/// Terminal output context: line printing with optional color over any writer
use crossterm::{QueueableCommand, style::{SetForegroundColor, ResetColor, Color}};
use std::io::{self, IsTerminal, Stdout, Write};

pub struct TerminalContext<W: Write> {
    out: W,
    colored: bool,
}

impl TerminalContext<Stdout> {
    /// Stdout, colored unless `NO_COLOR` is set or stdout is redirected
    pub fn stdout() -> Self {
        let out = io::stdout();
        let colored = std::env::var_os("NO_COLOR").is_none() && out.is_terminal();
        Self::new(out, colored)
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Writer without any escape sequences, used for captured output
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.colored || color == TerminalColor::Default {
            return self.print_line(text);
        }
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        writeln!(self.out)
    }

    /// Print text without newline
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColor {
    Green,
    Yellow,
    Cyan,
    Default,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Default => Color::Reset,
        }
    }
}
