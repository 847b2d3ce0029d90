//! Door State Machine
//!
//! This example demonstrates the smallest useful machine: two states,
//! two events, and undo/redo over the visited states.
//!
//! Key concepts:
//! - Declaring a graph with the `state_graph!` macro
//! - Driving the machine with `trigger`
//! - Stepping backward and forward with `undo`/`redo`
//!
//! Run with: cargo run --example door

use retrace::core::StateMachine;
use retrace::state_graph;

fn main() {
    println!("=== Door State Machine ===\n");

    let graph = state_graph! {
        initial: "closed",
        "closed" => { "open" => "open" },
        "open" => { "close" => "closed" },
    }
    .expect("door graph is valid");

    let mut door = StateMachine::new(graph);
    println!("Initial state: {}", door.state());

    door.trigger("open").expect("closed handles open");
    println!("After 'open':  {}", door.state());

    door.trigger("close").expect("open handles close");
    println!("After 'close': {}", door.state());

    println!("\nStepping back through history:");
    while door.undo() {
        println!("  undo -> {}", door.state());
    }
    println!("  undo -> (nothing left, returns false)");

    println!("\nAnd forward again:");
    while door.redo() {
        println!("  redo -> {}", door.state());
    }
    println!("  redo -> (nothing left, returns false)");

    println!("\n=== Example Complete ===");
}
