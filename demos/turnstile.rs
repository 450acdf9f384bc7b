//! Turnstile State Machine
//!
//! This example demonstrates a two-state machine with a partial alphabet,
//! runtime error handling, and checkpoint/resume.
//!
//! Key concepts:
//! - Fluent builder construction
//! - Errors that never mutate the machine
//! - Saving and restoring a machine's position
//!
//! Run with: cargo run --example turnstile

use fsmkit::builder::FsmBuilder;
use fsmkit::checkpoint::Checkpoint;
use fsmkit::core::Fsm;
use fsmkit::{state_enum, symbol_enum};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

symbol_enum! {
    enum Event {
        Coin,
        Push,
    }
}

fn turnstile() -> Fsm<Turnstile, Event> {
    FsmBuilder::new()
        .states([Turnstile::Locked, Turnstile::Unlocked])
        .symbols([Event::Coin, Event::Push])
        .transition(Turnstile::Locked, Event::Coin, Turnstile::Unlocked)
        .transition(Turnstile::Unlocked, Event::Push, Turnstile::Locked)
        .initial(Turnstile::Locked)
        .accepting_states([Turnstile::Locked])
        .build()
        .expect("turnstile definition is valid")
}

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let mut fsm = turnstile();
    println!("Initial state: {:?}", fsm.state());

    fsm.input(Event::Coin).unwrap();
    println!("After Coin:    {:?}", fsm.state());

    // Pushing while unlocked re-locks; pushing while locked has no table
    // entry and is an error that leaves the machine where it was.
    fsm.input(Event::Push).unwrap();
    println!("After Push:    {:?}", fsm.state());

    match fsm.input(Event::Push) {
        Ok(()) => unreachable!(),
        Err(e) => println!("Push on locked: error ({e}), state stays {:?}", fsm.state()),
    }

    // Checkpoint the position, lose the machine, resume elsewhere.
    fsm.input(Event::Coin).unwrap();
    let json = fsm.checkpoint().to_json().unwrap();
    println!("\nCheckpoint: {json}");

    let mut resumed = turnstile();
    resumed.restore(Checkpoint::from_json(&json).unwrap()).unwrap();
    println!("Resumed state: {:?}", resumed.state());
    println!("Accepting:     {}", resumed.is_accepting());

    println!("\nHistory path: {:?}", resumed.history().get_path());
}
