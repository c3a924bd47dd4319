//! Too Many Clicks
//!
//! This example demonstrates overriding the default reducer.
//!
//! Key concepts:
//! - The consumer owns the click counter, not the toggle
//! - The override delegates to the default reducer, then patches `on`
//! - Only toggle actions are suppressed; explicit on/off still work
//!
//! Run with: RUST_LOG=debug cargo run --example too_many_clicks

use flipswitch::builder::{initialize, ToggleOptions};
use flipswitch::core::{ActionKind, ToggleAction, ToggleState};
use flipswitch::reducer::{toggle_reducer, ReducerError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const MAX_CLICKS: usize = 4;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Too Many Clicks Example ===\n");

    let clicks = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&clicks);

    let mut toggle = initialize(ToggleOptions::with_reducer(
        move |state: &ToggleState, action: &ToggleAction| -> Result<ToggleState, ReducerError> {
            let changes = toggle_reducer(state, action)?;
            let too_many_clicks = seen.load(Ordering::SeqCst) >= MAX_CLICKS;
            if too_many_clicks && action.kind == ActionKind::Toggle {
                // Block the change to `on`.
                return Ok(ToggleState { on: state.on });
            }
            Ok(changes)
        },
    ));

    for _ in 0..6 {
        let state = toggle.toggle().unwrap_or_else(|_| toggle.state());
        let count = clicks.fetch_add(1, Ordering::SeqCst) + 1;
        println!("Click {count}: on = {}", state.on);
        if count >= MAX_CLICKS {
            println!("  (whoa, you clicked too much!)");
        }
    }

    println!("\nForcing on with set_on:");
    if let Ok(state) = toggle.set_on() {
        println!("  on = {}", state.on);
    }

    println!("\nResetting the counter:");
    clicks.store(0, Ordering::SeqCst);
    if let Ok(state) = toggle.toggle() {
        println!("  toggled, on = {}", state.on);
    }

    println!("\n=== Example Complete ===");
}
