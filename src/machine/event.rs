//! Values delivered to machine observers and accepted from the keypad.

use crate::core::{Digit, Outcome, Step};
use serde::{Deserialize, Serialize};

/// What the step and dot indicators render.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current entry phase
    pub step: Step,
    /// Digits in the active buffer
    pub filled: usize,
    /// Digits in a complete passcode
    pub length: usize,
}

impl Snapshot {
    /// Whether the dot at `position` (0-based) is filled.
    pub fn is_dot_filled(&self, position: usize) -> bool {
        position < self.filled
    }
}

/// Discrete outcome of the confirm step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PasscodeEvent {
    /// Both entries matched. The session has already been reset.
    Confirmed,

    /// Entries differ. The session stays as-is until restarted.
    Rejected,
}

impl PasscodeEvent {
    /// Event fired for a command outcome, if any.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Confirmed => Some(Self::Confirmed),
            Outcome::Rejected => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Inbound command issued by the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Enter(Digit),
    DeleteLast,
    DeleteAll,
    Restart,
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Self::Enter(digit)
    }
}
