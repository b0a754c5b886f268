//! Passcode session aggregate and its transition rules.

use super::buffer::DigitBuffer;
use super::digit::Digit;
use super::step::Step;

/// Default number of digits in a passcode.
pub const PASSCODE_LENGTH: usize = 6;

/// Longest passcode a session can be configured for.
pub const MAX_PASSCODE_LENGTH: usize = 16;

/// Result of applying a command to a session.
///
/// Commands never fail. Inputs the session cannot use are reported as
/// `Ignored` and leave the session untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Command was absorbed without any change
    Ignored,

    /// Active buffer changed, step unchanged
    Updated,

    /// Create buffer filled up; the session moved to `Confirm`
    Advanced,

    /// Confirmation matched and the session was reset
    Confirmed,

    /// Confirmation did not match; state is kept until restart
    Rejected,

    /// Session was reset to its initial state
    Restarted,
}

impl Outcome {
    /// Whether the command changed the session.
    pub fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// All state of one passcode entry session.
///
/// Exactly one buffer is active at a time, selected by the active step.
/// The step only moves backward through a full reset.
///
/// # Example
///
/// ```rust
/// use passcode::core::{Digit, Outcome, PasscodeSession, Step};
///
/// let mut session = PasscodeSession::new(4);
/// let one = Digit::new(1).unwrap();
///
/// for _ in 0..3 {
///     assert_eq!(session.enter_digit(one), Outcome::Updated);
/// }
/// assert_eq!(session.enter_digit(one), Outcome::Advanced);
/// assert_eq!(session.active_step(), Step::Confirm);
/// assert_eq!(session.filled_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct PasscodeSession {
    active_step: Step,
    create: DigitBuffer,
    confirm: DigitBuffer,
}

impl Default for PasscodeSession {
    fn default() -> Self {
        Self::new(PASSCODE_LENGTH)
    }
}

impl PasscodeSession {
    /// Create a session in the initial `{Create, empty, empty}` state.
    pub fn new(length: usize) -> Self {
        Self {
            active_step: Step::Create,
            create: DigitBuffer::with_capacity(length),
            confirm: DigitBuffer::with_capacity(length),
        }
    }

    pub fn active_step(&self) -> Step {
        self.active_step
    }

    /// Number of digits in the active buffer.
    pub fn filled_count(&self) -> usize {
        self.active().len()
    }

    /// Number of digits a complete passcode has.
    pub fn length(&self) -> usize {
        self.create.capacity()
    }

    pub fn create_buffer(&self) -> &DigitBuffer {
        &self.create
    }

    pub fn confirm_buffer(&self) -> &DigitBuffer {
        &self.confirm
    }

    /// Append a digit to the active buffer and run the step rules.
    pub fn enter_digit(&mut self, digit: Digit) -> Outcome {
        if !self.active_mut().push(digit) {
            return Outcome::Ignored;
        }

        if !self.active().is_full() {
            return Outcome::Updated;
        }

        match self.active_step {
            Step::Create => {
                // Create digits are kept; only the active buffer changes.
                self.active_step = Step::Confirm;
                Outcome::Advanced
            }
            Step::Confirm => {
                if self.create.matches(&self.confirm) {
                    self.restart();
                    Outcome::Confirmed
                } else {
                    Outcome::Rejected
                }
            }
        }
    }

    /// Remove the last digit of the active buffer.
    pub fn delete_last_digit(&mut self) -> Outcome {
        match self.active_mut().pop() {
            Some(_) => Outcome::Updated,
            None => Outcome::Ignored,
        }
    }

    /// Clear the active buffer.
    pub fn delete_all_digits(&mut self) -> Outcome {
        if self.active_mut().clear() {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }

    /// Reset to `{Create, empty, empty}`.
    pub fn restart(&mut self) -> Outcome {
        *self = Self::new(self.length());
        Outcome::Restarted
    }

    fn active(&self) -> &DigitBuffer {
        match self.active_step {
            Step::Create => &self.create,
            Step::Confirm => &self.confirm,
        }
    }

    fn active_mut(&mut self) -> &mut DigitBuffer {
        match self.active_step {
            Step::Create => &mut self.create,
            Step::Confirm => &mut self.confirm,
        }
    }
}
