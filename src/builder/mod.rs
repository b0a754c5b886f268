//! Builder API for passcode machine construction.
//!
//! The builder gathers the configuration and the initial set of listeners,
//! validates them, and hands back a ready machine.

pub mod error;

pub use error::BuildError;

use crate::config::PasscodeConfig;
use crate::core::PasscodeSession;
use crate::machine::{EventListener, PasscodeEvent, PasscodeMachine, Snapshot, StateListener};
use tracing::debug;

/// Builder for constructing passcode machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use passcode::builder::PasscodeMachineBuilder;
///
/// let machine = PasscodeMachineBuilder::new()
///     .length(4)
///     .on_event(|event, _snapshot| println!("{event:?}"))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.snapshot().length, 4);
/// ```
pub struct PasscodeMachineBuilder {
    config: PasscodeConfig,
    state_listeners: Vec<StateListener>,
    event_listeners: Vec<EventListener>,
}

impl PasscodeMachineBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: PasscodeConfig::default(),
            state_listeners: Vec::new(),
            event_listeners: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: PasscodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of digits in a passcode.
    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    /// Add a state snapshot listener.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.state_listeners.push(Box::new(listener));
        self
    }

    /// Add a `Confirmed`/`Rejected` event listener.
    pub fn on_event<F>(mut self, listener: F) -> Self
    where
        F: Fn(&PasscodeEvent, &Snapshot) + Send + Sync + 'static,
    {
        self.event_listeners.push(Box::new(listener));
        self
    }

    /// Build the machine.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<PasscodeMachine, BuildError> {
        self.config.validate()?;

        let machine = PasscodeMachine::from_parts(
            PasscodeSession::new(self.config.length),
            self.state_listeners,
            self.event_listeners,
        );

        debug!(length = self.config.length, "passcode machine built");
        Ok(machine)
    }
}

impl Default for PasscodeMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
