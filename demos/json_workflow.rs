//! Document Workflow from JSON
//!
//! This example loads a transition table from a JSON document.
//!
//! Key concepts:
//! - Tables are plain data, loadable with serde
//! - A `null` document is an absent configuration
//! - Rejected transitions report which lookup failed
//!
//! Run with: cargo run --example json_workflow

use retrace::{Fsm, FsmError, UnknownStateReason};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } }
    }
}"#;

fn main() -> Result<(), FsmError> {
    println!("=== Document Workflow Example ===\n");

    match Fsm::from_json("null") {
        Err(FsmError::InvalidConfig) => println!("null document rejected as expected"),
        other => println!("unexpected: {other:?}"),
    }

    let mut doc = Fsm::from_json(WORKFLOW)?;
    println!("States: {:?}", doc.states(None));

    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("Published: {}", doc.state());

    // "archived" is a target but never registered as a state.
    match doc.trigger("archive") {
        Err(FsmError::UnknownState {
            reason: UnknownStateReason::UnregisteredTarget { target },
            ..
        }) => println!("Cannot archive: '{target}' is not registered"),
        other => println!("unexpected: {other:?}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
