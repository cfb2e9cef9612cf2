//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Building a table with the `fsm_config!` macro
//! - Driving the machine with events
//! - Listing which states handle an event
//!
//! Run with: cargo run --example traffic_light

use retrace::{fsm_config, Fsm, FsmError};

fn main() -> Result<(), FsmError> {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = Fsm::new(fsm_config! {
        initial: red,
        states: {
            red: { timer => green },
            green: { timer => yellow, emergency => red },
            yellow: { timer => red, emergency => red },
        }
    });

    println!("Initial state: {}", light.state());
    for _ in 0..4 {
        light.trigger("timer")?;
        println!("  timer -> {}", light.state());
    }

    println!(
        "\nStates that react to 'emergency': {:?}",
        light.states(Some("emergency"))
    );

    match light.trigger("emergency") {
        Ok(()) => println!("Emergency handled, now {}", light.state()),
        Err(e) => println!("Emergency ignored: {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
