//! Observable passcode state machine.
//!
//! This module is the shell around the pure [`PasscodeSession`]: it applies
//! commands, then tells listeners what changed.
//!
//! # Delivery order
//!
//! Listeners run synchronously inside the command call. State listeners see
//! the post-command [`Snapshot`] first (only if it changed), then event
//! listeners see the [`PasscodeEvent`] together with that same snapshot. A
//! `Confirmed` event therefore always arrives alongside the reset state.
//!
//! A multi-threaded host should keep the machine behind a `Mutex` so commands
//! are serialized; listeners are `Send + Sync` for that reason.

mod event;

pub use event::{Command, PasscodeEvent, Snapshot};

use crate::core::{Digit, Outcome, PasscodeSession, Step};
use tracing::{debug, info, warn};

/// Callback notified with each new snapshot.
pub type StateListener = Box<dyn Fn(&Snapshot) + Send + Sync>;

/// Callback notified with each confirm-step event.
pub type EventListener = Box<dyn Fn(&PasscodeEvent, &Snapshot) + Send + Sync>;

/// Passcode entry state machine with change notification.
///
/// # Example
///
/// ```rust
/// use passcode::core::{Digit, Step};
/// use passcode::machine::{PasscodeEvent, PasscodeMachine};
/// use std::sync::{Arc, Mutex};
///
/// let events = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&events);
///
/// let mut machine = PasscodeMachine::new();
/// machine.subscribe(move |event, _| sink.lock().unwrap().push(*event));
///
/// for _ in 0..2 {
///     for key in "123456".chars() {
///         machine.enter_digit(Digit::try_from(key).unwrap());
///     }
/// }
///
/// assert_eq!(*events.lock().unwrap(), vec![PasscodeEvent::Confirmed]);
/// assert_eq!(machine.active_step(), Step::Create);
/// ```
pub struct PasscodeMachine {
    session: PasscodeSession,
    state_listeners: Vec<StateListener>,
    event_listeners: Vec<EventListener>,
}

impl Default for PasscodeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PasscodeMachine {
    /// Create a machine for the default passcode length.
    pub fn new() -> Self {
        Self::from_parts(PasscodeSession::default(), Vec::new(), Vec::new())
    }

    pub(crate) fn from_parts(
        session: PasscodeSession,
        state_listeners: Vec<StateListener>,
        event_listeners: Vec<EventListener>,
    ) -> Self {
        Self {
            session,
            state_listeners,
            event_listeners,
        }
    }

    /// Register a listener for state snapshots.
    pub fn watch<F>(&mut self, listener: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.state_listeners.push(Box::new(listener));
    }

    /// Register a listener for `Confirmed`/`Rejected` events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&PasscodeEvent, &Snapshot) + Send + Sync + 'static,
    {
        self.event_listeners.push(Box::new(listener));
    }

    pub fn active_step(&self) -> Step {
        self.session.active_step()
    }

    pub fn filled_count(&self) -> usize {
        self.session.filled_count()
    }

    pub fn session(&self) -> &PasscodeSession {
        &self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.session.active_step(),
            filled: self.session.filled_count(),
            length: self.session.length(),
        }
    }

    /// Apply a keypad command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::Enter(digit) => self.enter_digit(digit),
            Command::DeleteLast => self.delete_last_digit(),
            Command::DeleteAll => self.delete_all_digits(),
            Command::Restart => self.restart(),
        }
    }

    /// Append a digit to the active buffer.
    ///
    /// Ignored once the active buffer is full.
    pub fn enter_digit(&mut self, digit: Digit) -> Outcome {
        let before = self.snapshot();
        let outcome = self.session.enter_digit(digit);

        match outcome {
            Outcome::Ignored => debug!(step = %before.step, "active buffer full, digit ignored"),
            Outcome::Updated => debug!(
                step = %before.step,
                filled = self.session.filled_count(),
                "digit entered"
            ),
            Outcome::Advanced => info!("passcode entered, awaiting confirmation"),
            Outcome::Confirmed => info!("passcode confirmed"),
            Outcome::Rejected => warn!("confirmation does not match passcode"),
            Outcome::Restarted => {}
        }

        self.publish(before, outcome);
        outcome
    }

    /// Remove the last digit of the active buffer.
    pub fn delete_last_digit(&mut self) -> Outcome {
        let before = self.snapshot();
        let outcome = self.session.delete_last_digit();
        debug!(
            step = %before.step,
            filled = self.session.filled_count(),
            applied = outcome.is_applied(),
            "delete last digit"
        );
        self.publish(before, outcome);
        outcome
    }

    /// Clear the active buffer.
    pub fn delete_all_digits(&mut self) -> Outcome {
        let before = self.snapshot();
        let outcome = self.session.delete_all_digits();
        debug!(
            step = %before.step,
            applied = outcome.is_applied(),
            "delete all digits"
        );
        self.publish(before, outcome);
        outcome
    }

    /// Reset to `{Create, 0}` with both buffers empty. Fires no event.
    pub fn restart(&mut self) -> Outcome {
        let before = self.snapshot();
        let outcome = self.session.restart();
        info!(from = %before.step, "passcode entry restarted");
        self.publish(before, outcome);
        outcome
    }

    fn publish(&self, before: Snapshot, outcome: Outcome) {
        let after = self.snapshot();

        if after != before {
            for listener in &self.state_listeners {
                listener(&after);
            }
        }

        if let Some(event) = PasscodeEvent::from_outcome(outcome) {
            for listener in &self.event_listeners {
                listener(&event, &after);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    enum Seen {
        State(Snapshot),
        Event(PasscodeEvent, Snapshot),
    }

    fn recorded_machine() -> (PasscodeMachine, Arc<Mutex<Vec<Seen>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut machine = PasscodeMachine::new();

        let state_log = Arc::clone(&log);
        machine.watch(move |snapshot| state_log.lock().unwrap().push(Seen::State(*snapshot)));

        let event_log = Arc::clone(&log);
        machine.subscribe(move |event, snapshot| {
            event_log
                .lock()
                .unwrap()
                .push(Seen::Event(*event, *snapshot))
        });

        (machine, log)
    }

    fn enter(machine: &mut PasscodeMachine, keys: &str) -> Vec<Outcome> {
        keys.chars()
            .map(|c| machine.enter_digit(Digit::try_from(c).unwrap()))
            .collect()
    }

    fn snapshot(step: Step, filled: usize) -> Snapshot {
        Snapshot {
            step,
            filled,
            length: 6,
        }
    }

    fn events(log: &Arc<Mutex<Vec<Seen>>>) -> Vec<PasscodeEvent> {
        log.lock()
            .unwrap()
            .iter()
            .filter_map(|seen| match seen {
                Seen::Event(event, _) => Some(*event),
                Seen::State(_) => None,
            })
            .collect()
    }

    #[test]
    fn initial_state_is_create_empty() {
        let machine = PasscodeMachine::new();
        assert_eq!(machine.snapshot(), snapshot(Step::Create, 0));
    }

    #[test]
    fn filled_count_never_exceeds_length() {
        let (mut machine, _) = recorded_machine();
        enter(&mut machine, "12345");
        assert_eq!(machine.filled_count(), 5);

        let outcomes = enter(&mut machine, "6789");
        assert_eq!(outcomes[0], Outcome::Advanced);
        assert_eq!(machine.active_step(), Step::Confirm);
        assert_eq!(machine.filled_count(), 3);
    }

    #[test]
    fn create_completion_notifies_confirm_step() {
        let (mut machine, log) = recorded_machine();
        enter(&mut machine, "000000");

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 6);
        assert_eq!(log[4], Seen::State(snapshot(Step::Create, 5)));
        assert_eq!(log[5], Seen::State(snapshot(Step::Confirm, 0)));
    }

    #[test]
    fn confirmed_event_sees_reset_state() {
        let (mut machine, log) = recorded_machine();
        enter(&mut machine, "123456");
        let outcomes = enter(&mut machine, "123456");

        assert_eq!(outcomes[5], Outcome::Confirmed);
        assert_eq!(machine.snapshot(), snapshot(Step::Create, 0));

        let log = log.lock().unwrap();
        let tail = &log[log.len() - 2..];
        assert_eq!(tail[0], Seen::State(snapshot(Step::Create, 0)));
        assert_eq!(
            tail[1],
            Seen::Event(PasscodeEvent::Confirmed, snapshot(Step::Create, 0))
        );
    }

    #[test]
    fn rejected_event_follows_committed_state() {
        let (mut machine, log) = recorded_machine();
        enter(&mut machine, "123456");
        let outcomes = enter(&mut machine, "654321");

        assert_eq!(outcomes[5], Outcome::Rejected);
        assert_eq!(machine.snapshot(), snapshot(Step::Confirm, 6));

        {
            let log = log.lock().unwrap();
            let tail = &log[log.len() - 2..];
            assert_eq!(tail[0], Seen::State(snapshot(Step::Confirm, 6)));
            assert_eq!(
                tail[1],
                Seen::Event(PasscodeEvent::Rejected, snapshot(Step::Confirm, 6))
            );
        }

        assert_eq!(machine.restart(), Outcome::Restarted);
        assert_eq!(machine.snapshot(), snapshot(Step::Create, 0));
        assert!(machine.session().create_buffer().is_empty());
        assert!(machine.session().confirm_buffer().is_empty());
        assert_eq!(events(&log), vec![PasscodeEvent::Rejected]);
    }

    #[test]
    fn ignored_commands_notify_nobody() {
        let (mut machine, log) = recorded_machine();

        assert_eq!(machine.delete_last_digit(), Outcome::Ignored);
        assert_eq!(machine.delete_all_digits(), Outcome::Ignored);
        assert_eq!(machine.restart(), Outcome::Restarted);

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(machine.snapshot(), snapshot(Step::Create, 0));
    }

    #[test]
    fn overflow_after_rejection_is_silent() {
        let (mut machine, log) = recorded_machine();
        enter(&mut machine, "111111");
        enter(&mut machine, "222222");
        let seen = log.lock().unwrap().len();

        assert_eq!(enter(&mut machine, "3"), vec![Outcome::Ignored]);
        assert_eq!(log.lock().unwrap().len(), seen);
        assert_eq!(events(&log), vec![PasscodeEvent::Rejected]);
    }

    #[test]
    fn delete_never_changes_step() {
        let (mut machine, _) = recorded_machine();
        enter(&mut machine, "123456");
        enter(&mut machine, "1");

        assert_eq!(machine.delete_last_digit(), Outcome::Updated);
        assert_eq!(machine.delete_last_digit(), Outcome::Ignored);
        assert_eq!(machine.active_step(), Step::Confirm);
        assert_eq!(machine.filled_count(), 0);
    }

    #[test]
    fn delete_all_twice_matches_once() {
        let (mut machine, _) = recorded_machine();
        enter(&mut machine, "1234");

        assert_eq!(machine.delete_all_digits(), Outcome::Updated);
        assert_eq!(machine.filled_count(), 0);
        assert_eq!(machine.delete_all_digits(), Outcome::Ignored);
        assert_eq!(machine.filled_count(), 0);
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut machine = PasscodeMachine::new();
        let five = Digit::new(5).unwrap();

        assert_eq!(machine.dispatch(Command::Enter(five)), Outcome::Updated);
        assert_eq!(machine.dispatch(five.into()), Outcome::Updated);
        assert_eq!(machine.dispatch(Command::DeleteLast), Outcome::Updated);
        assert_eq!(machine.dispatch(Command::DeleteAll), Outcome::Updated);
        assert_eq!(machine.dispatch(Command::Restart), Outcome::Restarted);
        assert_eq!(machine.filled_count(), 0);
    }

    #[test]
    fn machine_cycles_through_sessions() {
        let (mut machine, log) = recorded_machine();
        for _ in 0..3 {
            enter(&mut machine, "246802");
            enter(&mut machine, "246802");
        }
        assert_eq!(events(&log), vec![PasscodeEvent::Confirmed; 3]);
    }

    #[test]
    fn machine_can_be_shared_across_threads() {
        let machine = Arc::new(Mutex::new(PasscodeMachine::new()));

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let machine = Arc::clone(&machine);
                std::thread::spawn(move || {
                    machine
                        .lock()
                        .unwrap()
                        .enter_digit(Digit::new(1).unwrap())
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let machine = machine.lock().unwrap();
        assert_eq!(machine.active_step(), Step::Confirm);
        assert_eq!(machine.filled_count(), 0);
    }
}
