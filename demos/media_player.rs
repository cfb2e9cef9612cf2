//! Media Player with Undo/Redo
//!
//! This example walks through the machine's history model.
//!
//! Key concepts:
//! - Undo and redo move through visited states
//! - A new transition after undo discards the redo branch
//! - Reset and clearing history
//!
//! Run with: RUST_LOG=retrace=trace cargo run --example media_player

use retrace::{ConfigBuilder, Fsm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    println!("=== Media Player Example ===\n");

    let config = ConfigBuilder::new()
        .initial("idle")
        .state("idle", |s| s.on("start", "running"))
        .state("running", |s| s.on("stop", "idle").on("pause", "paused"))
        .state("paused", |s| s.on("resume", "running"))
        .build()?;

    let mut player = Fsm::new(config);

    player.trigger("start")?;
    player.trigger("pause")?;
    println!("After start, pause: {}", player.state());

    player.undo();
    println!("Undo:               {}", player.state());

    player.trigger("stop")?;
    println!("Stop:               {}", player.state());
    println!("Redo available:     {}", player.can_redo());
    println!("History:            {:?}", player.history().entries());

    player.reset();
    println!("Reset:              {}", player.state());

    player.redo();
    player.clear_history();
    println!(
        "Cleared at {} (history length {})",
        player.state(),
        player.history().len()
    );

    if let Err(e) = player.change_state("rewinding") {
        println!("Rejected: {e}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
