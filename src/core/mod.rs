//! Core passcode entry types and logic.
//!
//! This module contains the pure core of the passcode state machine:
//! - Entry phases via `Step`
//! - Validated `Digit` values and bounded `DigitBuffer` storage
//! - The `PasscodeSession` aggregate that applies the step rules
//!
//! Nothing here notifies anyone. Observation lives in [`crate::machine`].

mod buffer;
mod digit;
mod session;
mod step;

pub use buffer::DigitBuffer;
pub use digit::{Digit, InputError};
pub use session::{Outcome, PasscodeSession, MAX_PASSCODE_LENGTH, PASSCODE_LENGTH};
pub use step::Step;
