//! Passcode entry phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of passcode entry.
///
/// The ordinal is only used to order the step indicator: `Create` is drawn
/// first, `Confirm` second.
///
/// # Example
///
/// ```rust
/// use passcode::core::Step;
///
/// assert_eq!(Step::Create.index(), 0);
/// assert_eq!(Step::Confirm.index(), 1);
/// assert_eq!(Step::ALL.len(), Step::COUNT);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Step {
    /// First entry of the new passcode.
    #[default]
    Create,
    /// Re-entry of the passcode for verification.
    Confirm,
}

impl Step {
    /// Number of steps in a session.
    pub const COUNT: usize = 2;

    /// All steps in display order.
    pub const ALL: [Step; Step::COUNT] = [Step::Create, Step::Confirm];

    /// Display position of this step.
    pub fn index(self) -> usize {
        match self {
            Self::Create => 0,
            Self::Confirm => 1,
        }
    }

    /// Name for display/logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Confirm => "Confirm",
        }
    }

    /// Whether the indicator for `self` is lit while `active` is the current step.
    pub fn is_reached_by(self, active: Step) -> bool {
        self.index() <= active.index()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
