//! Modulo-3 of a Binary String
//!
//! This example demonstrates the classic "mod three" automaton: a
//! three-state machine that consumes a binary string one digit at a time
//! and lands in the state whose payload is the number's remainder mod 3.
//!
//! Key concepts:
//! - State payloads (each state carries its remainder)
//! - Driving a machine from the characters of a string
//! - Accepting-state checks after the input is exhausted
//!
//! Run with: cargo run --example mod_three

use fsmkit::builder::FsmBuilder;
use fsmkit::core::Fsm;
use fsmkit::{state_enum, symbol_enum};

state_enum! {
    enum Remainder {
        S0,
        S1,
        S2,
    }
}

impl Remainder {
    fn value(&self) -> u32 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }
}

symbol_enum! {
    enum Bit {
        Zero = "0",
        One = "1",
    }
}

fn mod_three() -> Fsm<Remainder, Bit> {
    FsmBuilder::new()
        .states([Remainder::S0, Remainder::S1, Remainder::S2])
        .symbols([Bit::Zero, Bit::One])
        .transitions([
            (Remainder::S0, Bit::Zero, Remainder::S0),
            (Remainder::S0, Bit::One, Remainder::S1),
            (Remainder::S1, Bit::Zero, Remainder::S2),
            (Remainder::S1, Bit::One, Remainder::S0),
            (Remainder::S2, Bit::Zero, Remainder::S1),
            (Remainder::S2, Bit::One, Remainder::S2),
        ])
        .initial(Remainder::S0)
        .accepting_states([Remainder::S0, Remainder::S1, Remainder::S2])
        .build()
        .expect("mod-three definition is valid")
}

fn main() {
    println!("=== Modulo-3 Binary Automaton ===\n");

    let binary_strings = ["1101", "1110", "1111"];

    for bs in binary_strings {
        let mut fsm = mod_three();

        for c in bs.chars() {
            let bit = match c {
                '0' => Bit::Zero,
                '1' => Bit::One,
                _ => unreachable!(),
            };
            fsm.input(bit).expect("binary digits are in the alphabet");
        }

        if fsm.is_accepting() {
            println!("Input: {bs} Output: {}", fsm.state().value());
        }
    }

    println!("\nThe machine walks one table entry per digit:");
    println!("  state' = table[(state, digit)]");
    println!("and the terminal state's payload is the remainder mod 3.");
}
