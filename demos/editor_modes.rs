//! Editor Mode State Machine
//!
//! Models a modal editor's mode switching, and shows how a forward move
//! prunes the redo branch: after undoing back to normal mode, entering a
//! different mode discards the previously recorded future.
//!
//! Run with: cargo run --example editor_modes

use retrace::core::StateMachine;
use retrace::state_graph;

fn main() {
    println!("=== Editor Mode State Machine ===\n");

    let graph = state_graph! {
        initial: "normal",
        "normal" => { "insert" => "insert", "visual" => "visual", "command" => "command" },
        "insert" => { "escape" => "normal" },
        "visual" => { "escape" => "normal" },
        "command" => { "escape" => "normal" },
    }
    .expect("editor graph is valid");

    let mut editor = StateMachine::new(graph);

    println!("Modes that handle 'escape': {:?}", editor.states_handling("escape"));
    println!("All modes: {:?}\n", editor.states());

    editor.trigger("insert").unwrap();
    println!("-> {}", editor.state());
    editor.trigger("escape").unwrap();
    println!("-> {}", editor.state());
    editor.trigger("visual").unwrap();
    println!("-> {}", editor.state());

    editor.undo();
    println!("\nAfter undo: {}", editor.state());
    println!("Pending redo would restore: {:?}", editor.next_state());

    // A forward move discards the redo branch.
    editor.trigger("command").unwrap();
    let entered = editor.state().to_string();
    println!("\nEntered {entered} instead; redo available: {}", editor.redo());

    editor.clear_history();
    let cleared = editor.state().to_string();
    println!("\nAfter clear_history: {cleared} (undo available: {})", editor.undo());

    println!("\n=== Example Complete ===");
}
