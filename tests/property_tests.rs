//! Property-based tests for the machine engine.
//!
//! These tests use proptest to verify engine properties hold across many
//! randomly generated input sequences, using a binary modulo-3 automaton
//! as the workhorse definition.

use fsmkit::core::{Fsm, TransitionTable};
use fsmkit::{state_enum, symbol_enum};
use proptest::prelude::*;

state_enum! {
    enum Remainder {
        S0,
        S1,
        S2,
    }
}

impl Remainder {
    fn value(&self) -> u64 {
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
        Junk,
    }
}

fn mod_three_table() -> TransitionTable<Remainder, Bit> {
    [
        (Remainder::S0, Bit::Zero, Remainder::S0),
        (Remainder::S0, Bit::One, Remainder::S1),
        (Remainder::S1, Bit::Zero, Remainder::S2),
        (Remainder::S1, Bit::One, Remainder::S0),
        (Remainder::S2, Bit::Zero, Remainder::S1),
        (Remainder::S2, Bit::One, Remainder::S2),
    ]
    .into_iter()
    .collect()
}

fn mod_three() -> Fsm<Remainder, Bit> {
    Fsm::new(
        [Remainder::S0, Remainder::S1, Remainder::S2],
        [Bit::Zero, Bit::One],
        mod_three_table(),
        Remainder::S0,
        [Remainder::S0],
    )
    .unwrap()
}

prop_compose! {
    fn arbitrary_bits()(raw in prop::collection::vec(any::<bool>(), 0..48)) -> Vec<Bit> {
        raw.into_iter()
            .map(|b| if b { Bit::One } else { Bit::Zero })
            .collect()
    }
}

proptest! {
    // Two independently constructed machines driven with the same
    // sequence end in the same state.
    #[test]
    fn determinism_across_instances(bits in arbitrary_bits()) {
        let mut first = mod_three();
        let mut second = mod_three();

        first.run(bits.clone()).unwrap();
        second.run(bits).unwrap();

        prop_assert_eq!(first.state(), second.state());
        prop_assert_eq!(first.is_accepting(), second.is_accepting());
    }

    // After any sequence of successful inputs, the current state is a
    // member of the declared state set.
    #[test]
    fn current_state_stays_declared(bits in arbitrary_bits()) {
        let mut fsm = mod_three();
        fsm.run(bits).unwrap();
        prop_assert!(fsm.states().contains(fsm.state()));
    }

    // An out-of-alphabet symbol fails and leaves the state untouched,
    // no matter where in the sequence it lands.
    #[test]
    fn unknown_symbol_never_mutates(bits in arbitrary_bits()) {
        let mut fsm = mod_three();
        fsm.run(bits).unwrap();

        let before = fsm.state().clone();
        let records_before = fsm.history().records().len();

        prop_assert!(fsm.input(Bit::Junk).is_err());
        prop_assert_eq!(fsm.state(), &before);
        prop_assert_eq!(fsm.history().records().len(), records_before);
    }

    // A missing table entry fails and leaves the state untouched.
    #[test]
    fn missing_transition_never_mutates(zeros in 0usize..16) {
        // Partial table: S1 has no outgoing transitions at all.
        let table: TransitionTable<_, _> = [
            (Remainder::S0, Bit::Zero, Remainder::S0),
            (Remainder::S0, Bit::One, Remainder::S1),
        ]
        .into_iter()
        .collect();

        let mut fsm = Fsm::new(
            [Remainder::S0, Remainder::S1, Remainder::S2],
            [Bit::Zero, Bit::One],
            table,
            Remainder::S0,
            [Remainder::S0],
        )
        .unwrap();

        fsm.run(std::iter::repeat(Bit::Zero).take(zeros)).unwrap();
        fsm.input(Bit::One).unwrap();
        prop_assert_eq!(fsm.state(), &Remainder::S1);

        prop_assert!(fsm.input(Bit::Zero).is_err());
        prop_assert_eq!(fsm.state(), &Remainder::S1);
    }

    // is_accepting is true exactly when the current state is in the
    // accepting set, for every reachable state.
    #[test]
    fn accepting_matches_membership(bits in arbitrary_bits()) {
        let mut fsm = mod_three();
        fsm.run(bits).unwrap();
        prop_assert_eq!(
            fsm.is_accepting(),
            fsm.accepting_states().contains(fsm.state())
        );
    }

    // The automaton actually computes modulo 3 of the binary number.
    #[test]
    fn terminal_state_matches_arithmetic(bits in arbitrary_bits()) {
        let mut fsm = mod_three();
        fsm.run(bits.clone()).unwrap();

        let n = bits.iter().fold(0u64, |acc, bit| {
            (acc << 1) | match bit {
                Bit::One => 1,
                _ => 0,
            }
        });

        prop_assert_eq!(fsm.state().value(), n % 3);
    }

    // The history path starts at the initial state and has one hop per
    // consumed symbol.
    #[test]
    fn history_path_length_tracks_input(bits in arbitrary_bits()) {
        let mut fsm = mod_three();
        fsm.run(bits.clone()).unwrap();

        let path = fsm.history().get_path();
        if bits.is_empty() {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path.len(), bits.len() + 1);
            prop_assert_eq!(path[0], &Remainder::S0);
        }
    }
}
