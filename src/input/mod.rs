//! Keypad input validation.
//!
//! Raw keypad input is validated before it reaches the state machine, which
//! only ever accepts [`Digit`] values. Whole key strings are checked with
//! Stillwater's `Validation` so every bad key is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use passcode::input::parse_keys;
//! use stillwater::validation::Validation;
//!
//! match parse_keys("12a4b6") {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected invalid keys"),
//! }
//! ```

use crate::core::{Digit, InputError};
use crate::machine::Command;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A press on the passcode keypad.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Digit(Digit),
    /// Tap on the delete key
    Delete,
    /// Long press on the delete key
    DeleteLongPress,
}

impl From<Key> for Command {
    fn from(key: Key) -> Self {
        match key {
            Key::Digit(digit) => Command::Enter(digit),
            Key::Delete => Command::DeleteLast,
            Key::DeleteLongPress => Command::DeleteAll,
        }
    }
}

/// Map a digit key title (`"0"`..`"9"`) to its command.
pub fn parse_key(title: &str) -> Result<Command, InputError> {
    title.parse::<Digit>().map(Command::Enter)
}

/// Validate a string of digit keys, accumulating every invalid key.
pub fn parse_keys(keys: &str) -> Validation<Vec<Digit>, NonEmptyVec<InputError>> {
    let checks: Vec<Validation<Digit, NonEmptyVec<InputError>>> = keys
        .chars()
        .enumerate()
        .map(|(position, key)| match Digit::try_from(key) {
            Ok(digit) => Validation::success(digit),
            Err(InputError::InvalidKey(key)) => {
                Validation::fail(InputError::NotADigit { position, key })
            }
            Err(other) => Validation::fail(other),
        })
        .collect();

    Validation::all_vec(checks)
}
