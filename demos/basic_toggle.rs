//! Basic Toggle
//!
//! This example demonstrates a toggle driven by the default reducer.
//!
//! Key concepts:
//! - The toggle never decides transitions itself
//! - The default reducer handles toggle, on and off
//! - Unknown action kinds are reported, not ignored
//!
//! Run with: RUST_LOG=debug cargo run --example basic_toggle

use flipswitch::builder::{initialize, ToggleOptions};
use flipswitch::core::ToggleAction;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Basic Toggle Example ===\n");

    let mut toggle = initialize(ToggleOptions::default());
    println!("Initial state: {:?}", toggle.state());

    toggle.subscribe(|state| println!("  -> now {}", if state.on { "on" } else { "off" }));

    for action in [
        ToggleAction::toggle(),
        ToggleAction::toggle(),
        ToggleAction::set_on(),
        ToggleAction::set_off(),
    ] {
        println!("Dispatching {:?}", action.kind);
        if let Err(err) = toggle.dispatch(action) {
            println!("  ✗ {err}");
        }
    }

    println!("\nDispatching an unknown kind:");
    match toggle.dispatch(ToggleAction::custom("blink")) {
        Ok(state) => println!("  unexpected success: {state:?}"),
        Err(err) => println!("  ✗ {err} (state still {:?})", toggle.state()),
    }

    println!("\nHistory:");
    for transition in toggle.history().transitions() {
        println!(
            "  #{} {}: {} -> {}",
            transition.sequence, transition.action.kind, transition.from.on, transition.to.on
        );
    }

    println!("\n=== Example Complete ===");
}
