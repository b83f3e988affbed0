use crate::core::game::{Game, Message, Step};
use crate::core::rng::SecretSource;
use crate::core::terminal::TerminalColor;
use crate::games::rand_num::parse::{self, InvalidInputError};
use std::cmp::Ordering;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Correct { secret: u32, attempts: u32 },
}

#[derive(Debug)]
pub struct NumberGame {
    secret_number: u32,
    attempts: u32,
}

impl NumberGame {
    pub fn new(source: &mut impl SecretSource) -> Self {
        let secret = source.draw(SECRET_RANGE);
        trace!(secret, "secret drawn");
        debug!(range = ?SECRET_RANGE, "new number game");
        Self::with_secret(secret)
    }

    pub fn with_secret(secret: u32) -> Self {
        Self {
            secret_number: secret,
            attempts: 0,
        }
    }

    pub fn secret(&self) -> u32 {
        self.secret_number
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn parse_guess(line: &str) -> Result<i64, InvalidInputError> {
        parse::parse_guess(line)
    }

    /// Counts one attempt and classifies the guess
    pub fn evaluate(&mut self, guess: i64) -> Verdict {
        self.attempts += 1;
        let verdict = match guess.cmp(&i64::from(self.secret_number)) {
            Ordering::Less => Verdict::TooLow,
            Ordering::Greater => Verdict::TooHigh,
            Ordering::Equal => Verdict::Correct { secret: self.secret_number, attempts: self.attempts },
        };
        debug!(guess, attempts = self.attempts, ?verdict, "guess evaluated");
        verdict
    }
}

impl Game for NumberGame {
    type Input = i64;
    type Error = InvalidInputError;

    const NAME: &'static str = "Number Guessing";

    fn banner(&self) -> Vec<Message> {
        vec![
            Message::plain("🎲 Welcome to the Number Guessing Game!"),
            Message::plain(format!(
                "I'm thinking of a number between {} and {}...",
                SECRET_RANGE.start(),
                SECRET_RANGE.end()
            )),
        ]
    }

    fn prompt(&self) -> &str {
        "Enter your guess: "
    }

    fn parse_line(&self, line: &str) -> Result<i64, InvalidInputError> {
        Self::parse_guess(line)
    }

    fn reject(&self, _error: &InvalidInputError) -> Message {
        Message::new("⚠️ Please enter a valid number!", TerminalColor::Yellow)
    }

    fn handle_input(&mut self, guess: i64) -> Step {
        match self.evaluate(guess) {
            Verdict::TooLow => Step::Continue(Message::new("Too low! Try again.", TerminalColor::Cyan)),
            Verdict::TooHigh => Step::Continue(Message::new("Too high! Try again.", TerminalColor::Cyan)),
            Verdict::Correct { secret, attempts } => Step::Finished(vec![
                Message::new(format!("🎉 Correct! The number was {}.", secret), TerminalColor::Green),
                Message::new(format!("You guessed it in {} tries.", attempts), TerminalColor::Green),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::FixedSecret;

    #[test]
    fn parse_line_groups_digits_like_the_player_typed_them() {
        let game = NumberGame::with_secret(50);
        assert_eq!(game.parse_line("1_000\n").unwrap(), 1000);
        assert!(game.parse_line("1__0\n").is_err());
        assert!(game.parse_line("_1\n").is_err());
    }

    #[test]
    fn evaluate_classifies_and_counts() {
        let mut game = NumberGame::with_secret(50);

        assert_eq!(game.evaluate(25), Verdict::TooLow);
        assert_eq!(game.evaluate(-3), Verdict::TooLow);
        assert_eq!(game.evaluate(i64::MAX), Verdict::TooHigh);
        assert_eq!(game.evaluate(50), Verdict::Correct { secret: 50, attempts: 4 });
    }

    #[test]
    fn new_game_draws_from_source() {
        let game = NumberGame::new(&mut FixedSecret(77));
        assert_eq!(game.secret(), 77);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn correct_guess_finishes_with_two_lines() {
        let mut game = NumberGame::with_secret(1);
        match game.handle_input(1) {
            Step::Finished(lines) => {
                assert_eq!(lines[0].text, "🎉 Correct! The number was 1.");
                assert_eq!(lines[1].text, "You guessed it in 1 tries.");
            }
            other => panic!("expected finish, got {:?}", other),
        }
    }
}
