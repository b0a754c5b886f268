//! Validated keypad digits.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when turning raw keypad input into digits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Digit value {0} is out of range 0..=9")]
    OutOfRange(u8),

    #[error("Key '{0}' is not a digit")]
    InvalidKey(String),

    #[error("Key '{key}' at position {position} is not a digit")]
    NotADigit { position: usize, key: String },
}

/// A single decimal digit, `0..=9`.
///
/// Only valid digits can be constructed, so the state machine never has to
/// re-check what it is given.
///
/// # Example
///
/// ```rust
/// use passcode::core::Digit;
///
/// let seven: Digit = "7".parse().unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(10).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| InputError::InvalidKey(c.to_string()))
    }
}

/// Parses a keypad key title such as `"4"`.
impl FromStr for Digit {
    type Err = InputError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::try_from(c),
            _ => Err(InputError::InvalidKey(key.to_string())),
        }
    }
}

// Digits are passcode material; keep them out of debug output.
impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Digit(*)")
    }
}
