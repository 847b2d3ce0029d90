//! Checkout Flow State Machine
//!
//! Builds a linear purchase flow with the fluent builder API and shows the
//! two error kinds: changing to an unknown state and triggering an event the
//! current state does not handle. Failed calls leave the machine untouched.
//!
//! Run with: cargo run --example checkout_flow

use retrace::builder::{StateBuilder, StateGraphBuilder};
use retrace::core::StateMachine;

fn main() {
    println!("=== Checkout Flow State Machine ===\n");

    let graph = StateGraphBuilder::new()
        .initial("cart")
        .state(StateBuilder::new("cart").on("checkout", "payment"))
        .state(
            StateBuilder::new("payment")
                .on("pay", "confirmed")
                .on("cancel", "cart"),
        )
        .state(StateBuilder::new("confirmed").on("refund", "cart"))
        .build()
        .expect("checkout graph is valid");

    let mut flow = StateMachine::new(graph);
    println!("Starting at: {}", flow.state());

    flow.trigger("checkout").unwrap();
    println!("After 'checkout': {}", flow.state());

    // Programmer mistakes are errors, not silent no-ops.
    match flow.trigger("ship") {
        Ok(()) => unreachable!("payment does not handle 'ship'"),
        Err(err) => println!("Rejected: {err}"),
    }
    match flow.change_state("warehouse") {
        Ok(_) => unreachable!("'warehouse' is not a declared state"),
        Err(err) => println!("Rejected: {err}"),
    }
    println!("Still at: {}", flow.state());

    flow.trigger("pay").unwrap();
    println!("\nAfter 'pay': {}", flow.state());

    // Buyer's remorse: walk the whole flow back.
    flow.undo();
    flow.undo();
    println!("After two undos: {}", flow.state());

    flow.reset();
    let settled = flow.state().to_string();
    println!("After reset: {settled} (undo available: {})", flow.undo());

    println!("\n=== Example Complete ===");
}
