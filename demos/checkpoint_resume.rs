//! Checkpoint and Resume
//!
//! This example demonstrates saving a toggle and restoring it later.
//!
//! Key concepts:
//! - Checkpoints hold state and history, never the reducer
//! - JSON for readability, bincode for compactness
//! - The restoring side supplies its own reducer
//!
//! Run with: RUST_LOG=info cargo run --example checkpoint_resume

use flipswitch::checkpoint::Checkpoint;
use flipswitch::config::ToggleConfig;
use flipswitch::core::{ToggleAction, ToggleState};
use flipswitch::reducer::ToggleReducer;
use flipswitch::{Toggle, ToggleBuilder};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
initial_on = true
history_limit = 16
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Checkpoint and Resume Example ===\n");

    let config = ToggleConfig::from_toml_str(CONFIG)?;
    let mut toggle = ToggleBuilder::from_config(config).build()?;
    toggle.toggle()?;
    toggle.toggle()?;
    toggle.set_off()?;
    println!("Before checkpoint: {:?}", toggle.state());

    let checkpoint = toggle.checkpoint();
    let json = checkpoint.to_json()?;
    let bytes = checkpoint.to_bytes()?;
    println!("JSON checkpoint: {} bytes", json.len());
    println!("Binary checkpoint: {} bytes", bytes.len());

    let decoded = Checkpoint::<ToggleState, ToggleAction>::from_bytes(&bytes)?;
    let mut resumed = Toggle::restore(decoded, ToggleReducer)?;
    println!("\nResumed: {:?}", resumed.state());
    println!("Resumed history: {} transitions", resumed.history().len());

    resumed.toggle()?;
    println!("After one more toggle: {:?}", resumed.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
