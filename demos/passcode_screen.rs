//! Passcode Screen
//!
//! This example plays the role of the presentation layer: it renders the
//! step indicator and dots, forwards key presses to the machine, shows a
//! notice on confirmation and a "try again" dialog on mismatch.
//!
//! Run with: RUST_LOG=passcode=debug cargo run --example passcode_screen

use passcode::input::{parse_keys, Key};
use passcode::{Command, PasscodeEvent, PasscodeMachineBuilder, Snapshot, Step};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

fn render(snapshot: &Snapshot) -> String {
    let steps: Vec<&str> = Step::ALL
        .iter()
        .map(|step| if step.is_reached_by(snapshot.step) { "●" } else { "○" })
        .collect();
    let dots: String = (0..snapshot.length)
        .map(|i| if snapshot.is_dot_filled(i) { '●' } else { '○' })
        .collect();
    format!("[{}] {:<8} {}", steps.join(" "), snapshot.step.name(), dots)
}

fn type_keys(keys: &str) -> Vec<Command> {
    match parse_keys(keys) {
        Validation::Success(digits) => digits.into_iter().map(Command::from).collect(),
        Validation::Failure(errors) => {
            for error in errors.iter() {
                println!("  ! {error}");
            }
            Vec::new()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Passcode Screen Example ===\n");

    let dialog_visible = Arc::new(AtomicBool::new(false));
    let dialog = Arc::clone(&dialog_visible);

    let mut machine = PasscodeMachineBuilder::new()
        .on_change(|snapshot| println!("  {}", render(snapshot)))
        .on_event(move |event, _| match event {
            PasscodeEvent::Confirmed => println!("  >> Passcode confirmed"),
            PasscodeEvent::Rejected => {
                println!("  >> Passcodes do not match!  [Try again]");
                dialog.store(true, Ordering::SeqCst);
            }
        })
        .build()
        .expect("default configuration is valid");

    println!("Rejected keys are reported all at once:");
    type_keys("12a4-6");
    println!();

    println!("Create 123456, then confirm with a typo:");
    for command in type_keys("123456") {
        machine.dispatch(command);
    }
    for command in type_keys("123457") {
        machine.dispatch(command);
    }

    if dialog_visible.swap(false, Ordering::SeqCst) {
        // Dismissing the dialog starts over
        machine.restart();
    }
    println!();

    println!("Create 135790, fix a mistake with delete, confirm:");
    for command in type_keys("135790") {
        machine.dispatch(command);
    }
    for command in type_keys("13579") {
        machine.dispatch(command);
    }
    machine.dispatch(Key::Delete.into());
    for command in type_keys("90") {
        machine.dispatch(command);
    }
    println!();

    println!("Long press on delete clears the active entry:");
    for command in type_keys("42") {
        machine.dispatch(command);
    }
    machine.dispatch(Key::DeleteLongPress.into());

    println!("\n=== Example Complete ===");
}
