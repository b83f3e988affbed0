//! Guess parsing.
//!
//! Accepts what a player would type as a whole number: surrounding whitespace,
//! an optional sign, decimal digits from any script, and single `_` separators
//! between digits (`1_000`).
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// First code point of every run of Unicode decimal digits (general category Nd).
/// Each run holds the digits 0 through 9 in order.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

#[derive(Debug, Error)]
pub enum InvalidInputError {
    #[error("{input:?} is not a whole number")]
    NotANumber {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{input:?} has a misplaced digit separator")]
    MisplacedSeparator { input: String },
}

impl InvalidInputError {
    /// The rejected text, without surrounding whitespace
    pub fn input(&self) -> &str {
        match self {
            Self::NotANumber { input, .. } | Self::MisplacedSeparator { input } => input,
        }
    }
}

/// Value of a decimal digit in any script
pub fn decimal_digit(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let code = u32::from(c);
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DECIMAL_ZEROS[run.checked_sub(1)?];
    let offset = code - zero;
    (offset < 10).then_some(offset)
}

/// Parses one line as a guess. Integers outside the `i64` range still count as
/// guesses and saturate, so they compare as too high or too low.
pub fn parse_guess(line: &str) -> Result<i64, InvalidInputError> {
    let text = line.trim();
    let ascii = to_ascii_digits(text)?;
    ascii.parse::<i64>().or_else(|source| match source.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(InvalidInputError::NotANumber { input: text.to_string(), source }),
    })
}

/// Rewrites digits to ASCII and drops separators. Anything else is kept so
/// that `str::parse` reports it.
fn to_ascii_digits(text: &str) -> Result<String, InvalidInputError> {
    let (sign, body) = match text.strip_prefix(|c: char| c == '+' || c == '-') {
        Some(rest) => (&text[..1], rest),
        None => ("", text),
    };

    let mut ascii = String::with_capacity(text.len());
    ascii.push_str(sign);

    let mut chars = body.chars().peekable();
    let mut after_digit = false;
    while let Some(c) = chars.next() {
        if c == '_' {
            let before_digit = chars.peek().is_some_and(|&next| decimal_digit(next).is_some());
            if !(after_digit && before_digit) {
                return Err(InvalidInputError::MisplacedSeparator { input: text.to_string() });
            }
            after_digit = false;
            continue;
        }
        match decimal_digit(c) {
            Some(d) => {
                ascii.push(char::from(b'0' + d as u8));
                after_digit = true;
            }
            None => {
                ascii.push(c);
                after_digit = false;
            }
        }
    }
    Ok(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_whitespace_and_signs() {
        assert_eq!(parse_guess("42\n").unwrap(), 42);
        assert_eq!(parse_guess("  7  \r\n").unwrap(), 7);
        assert_eq!(parse_guess("+3").unwrap(), 3);
        assert_eq!(parse_guess("-12").unwrap(), -12);
    }

    #[test]
    fn parse_rejects_non_integers() {
        for bad in ["abc", "", "   \n", "4.5", "1e3", "twelve", "12abc", "+", "--1"] {
            let err = parse_guess(bad).unwrap_err();
            assert!(matches!(err, InvalidInputError::NotANumber { .. }), "{bad:?}");
            assert_eq!(err.input(), bad.trim());
        }
    }

    #[test]
    fn single_underscores_between_digits_group() {
        assert_eq!(parse_guess("1_000").unwrap(), 1000);
        assert_eq!(parse_guess(" -1_2_3 ").unwrap(), -123);
        assert_eq!(parse_guess("+0_5").unwrap(), 5);
    }

    #[test]
    fn misplaced_underscores_are_rejected() {
        for bad in ["1__0", "_1", "1_", "+_1", "_", "1_a"] {
            let err = parse_guess(bad).unwrap_err();
            assert!(matches!(err, InvalidInputError::MisplacedSeparator { .. }), "{bad:?}");
        }
    }

    #[test]
    fn digits_from_other_scripts() {
        assert_eq!(parse_guess("١٢").unwrap(), 12); // Arabic-Indic
        assert_eq!(parse_guess("४२").unwrap(), 42); // Devanagari
        assert_eq!(parse_guess("５０").unwrap(), 50); // fullwidth
        assert_eq!(parse_guess("٣_٤").unwrap(), 34);
        assert_eq!(parse_guess("𝟗𝟗").unwrap(), 99); // mathematical bold
    }

    #[test]
    fn decimal_digit_ignores_non_digits() {
        assert_eq!(decimal_digit('7'), Some(7));
        assert_eq!(decimal_digit('٩'), Some(9));
        assert_eq!(decimal_digit('a'), None);
        assert_eq!(decimal_digit('²'), None);
        assert_eq!(decimal_digit('\u{066A}'), None);
    }

    #[test]
    fn overflowing_integers_saturate() {
        assert_eq!(parse_guess("99999999999999999999999").unwrap(), i64::MAX);
        assert_eq!(parse_guess("-99_999_999_999_999_999_999_999").unwrap(), i64::MIN);
    }
}
