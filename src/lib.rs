//! Passcode: a two-step passcode entry state machine
//!
//! A new passcode is captured twice: once in the `Create` step and once in
//! the `Confirm` step. When the second entry is complete the two are compared
//! and the machine reports `Confirmed` or `Rejected`.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! session logic is plain data plus transition methods with no observers,
//! while the machine shell delivers state snapshots and events to whoever
//! renders the keypad.
//!
//! # Core Concepts
//!
//! - **Step**: The current entry phase, `Create` or `Confirm`
//! - **Session**: Both digit buffers plus the active step
//! - **Machine**: A session with change notification and `Confirmed`/`Rejected` events
//! - **Input**: Validation of raw keypad keys before they become digits
//!
//! # Example
//!
//! ```rust
//! use passcode::core::{Outcome, Step};
//! use passcode::input::parse_key;
//! use passcode::machine::PasscodeMachine;
//!
//! let mut machine = PasscodeMachine::new();
//!
//! for key in ["1", "2", "3", "4", "5", "6"] {
//!     machine.dispatch(parse_key(key).unwrap());
//! }
//! assert_eq!(machine.active_step(), Step::Confirm);
//!
//! let mut last = Outcome::Ignored;
//! for key in ["6", "5", "4", "3", "2", "1"] {
//!     last = machine.dispatch(parse_key(key).unwrap());
//! }
//! assert_eq!(last, Outcome::Rejected);
//! assert_eq!(machine.filled_count(), 6);
//!
//! machine.restart();
//! assert_eq!(machine.active_step(), Step::Create);
//! assert_eq!(machine.filled_count(), 0);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod input;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, PasscodeMachineBuilder};
pub use config::PasscodeConfig;
pub use crate::core::{
    Digit, DigitBuffer, InputError, Outcome, PasscodeSession, Step, MAX_PASSCODE_LENGTH,
    PASSCODE_LENGTH,
};
pub use machine::{Command, PasscodeEvent, PasscodeMachine, Snapshot};
