//! Property tests for DFA construction, simulation and swapping.

use fa::{DFA, State};
use proptest::prelude::*;
use std::collections::HashSet;

const SYMBOLS: [char; 4] = ['a', 'b', 'c', 'd'];

/// A recipe for building a DFA, so that the same automaton can be built twice.
#[derive(Debug, Clone)]
struct Recipe {
    num_states: usize,
    num_symbols: usize,
    start: Option<usize>,
    finals: Vec<usize>,
    transitions: Vec<(usize, usize, usize)>,
}

impl Recipe {
    fn build(&self) -> DFA {
        let mut dfa = DFA::new();
        for symbol in &SYMBOLS[..self.num_symbols] {
            dfa.add_sigma(*symbol);
        }
        for i in 0..self.num_states {
            assert!(dfa.add_state(&name(i)));
        }
        if let Some(start) = self.start {
            assert!(dfa.set_start(&name(start)));
        }
        for &f in &self.finals {
            assert!(dfa.set_final(&name(f)));
        }
        for &(from, to, symbol) in &self.transitions {
            assert!(dfa.add_transition(&name(from), &name(to), SYMBOLS[symbol]));
        }
        dfa
    }
}

fn name(i: usize) -> String {
    format!("q{i}")
}

fn recipe() -> impl Strategy<Value = Recipe> {
    (1usize..6, 1usize..=SYMBOLS.len()).prop_flat_map(|(num_states, num_symbols)| {
        (
            proptest::option::of(0..num_states),
            proptest::collection::vec(0..num_states, 0..num_states + 1),
            proptest::collection::vec(
                (0..num_states, 0..num_states, 0..num_symbols),
                0..num_states * num_symbols * 2,
            ),
        )
            .prop_map(move |(start, finals, transitions)| Recipe {
                num_states,
                num_symbols,
                start,
                finals,
                transitions,
            })
    })
}

fn input() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(SYMBOLS.to_vec()), 0..8)
        .prop_map(|symbols| symbols.into_iter().collect())
}

/// Structural equality by name: states, alphabet, start, finals and delta.
fn assert_same_structure(left: &DFA, right: &DFA) {
    let names = |dfa: &DFA| dfa.states().map(|s| s.name().to_owned()).collect::<Vec<_>>();
    assert_eq!(names(left), names(right));
    assert_eq!(left.get_sigma(), right.get_sigma());
    assert_eq!(left.start_state(), right.start_state());
    assert_eq!(
        left.final_states().collect::<Vec<_>>(),
        right.final_states().collect::<Vec<_>>()
    );
    assert_eq!(
        left.transitions().collect::<Vec<_>>(),
        right.transitions().collect::<Vec<_>>()
    );
    assert_eq!(left.to_string(), right.to_string());
}

proptest! {
    #[test]
    fn duplicate_states_are_refused(recipe in recipe(), pick in any::<prop::sample::Index>()) {
        let mut dfa = recipe.build();
        let before = dfa.to_string();
        let existing = name(pick.index(recipe.num_states));

        prop_assert!(!dfa.add_state(&existing));
        prop_assert_eq!(dfa.num_states(), recipe.num_states);
        prop_assert_eq!(dfa.to_string(), before);
    }

    #[test]
    fn at_most_one_destination_per_key(recipe in recipe()) {
        let dfa = recipe.build();
        let mut seen = HashSet::new();
        for (from, symbol, _) in dfa.transitions() {
            prop_assert!(seen.insert((from.name().to_owned(), symbol)));
        }

        // The last write for each key wins.
        for &(from, to, symbol) in recipe.transitions.iter().rev() {
            let key = (name(from), SYMBOLS[symbol]);
            if seen.remove(&key) {
                let expected = State::new(name(to));
                prop_assert_eq!(dfa.transition(&key.0, key.1), Some(&expected));
            }
        }
        prop_assert!(seen.is_empty());
    }

    #[test]
    fn guarded_additions_do_not_mutate(recipe in recipe()) {
        let mut dfa = recipe.build();
        let before = dfa.to_string();
        let unknown = name(recipe.num_states);

        prop_assert!(!dfa.set_start(&unknown));
        prop_assert!(!dfa.set_final(&unknown));
        prop_assert!(!dfa.add_transition(&unknown, "q0", 'a'));
        prop_assert!(!dfa.add_transition("q0", &unknown, 'a'));
        prop_assert!(!dfa.add_transition("q0", "q0", 'z'));
        prop_assert_eq!(dfa.to_string(), before);
    }

    #[test]
    fn accepts_matches_run(recipe in recipe(), input in input()) {
        let dfa = recipe.build();
        let expected = dfa.run(&input).is_some_and(|state| dfa.is_final(state.name()));
        prop_assert_eq!(dfa.accepts(&input), expected);
    }

    #[test]
    fn empty_language_accepts_nothing(recipe in recipe(), input in input()) {
        let dfa = recipe.build();
        if dfa.is_empty() {
            prop_assert!(!dfa.accepts(&input));
            prop_assert!(!dfa.accepts("e"));
        }
    }

    #[test]
    fn swap_twice_is_identity(
        recipe in recipe(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let dfa = recipe.build();
        let a = SYMBOLS[a.index(recipe.num_symbols)];
        let b = SYMBOLS[b.index(recipe.num_symbols)];

        assert_same_structure(&dfa.swap(a, b).swap(a, b), &dfa);
        assert_same_structure(&dfa.swap(a, a), &dfa);
    }

    #[test]
    fn swap_relabels_transitions(recipe in recipe()) {
        prop_assume!(recipe.num_symbols >= 2);
        let dfa = recipe.build();
        let swapped = dfa.swap('a', 'b');

        for state in dfa.states() {
            prop_assert_eq!(swapped.transition(state.name(), 'a'), dfa.transition(state.name(), 'b'));
            prop_assert_eq!(swapped.transition(state.name(), 'b'), dfa.transition(state.name(), 'a'));
            for &other in &SYMBOLS[2..recipe.num_symbols] {
                prop_assert_eq!(swapped.transition(state.name(), other), dfa.transition(state.name(), other));
            }
        }
    }

    #[test]
    fn swap_result_is_independent(recipe in recipe()) {
        let dfa = recipe.build();
        let before = dfa.to_string();

        let mut swapped = dfa.swap('a', 'a');
        swapped.add_state("extra");
        swapped.add_sigma('z');
        swapped.set_final("extra");
        swapped.set_start("extra");
        swapped.add_transition("q0", "extra", 'a');

        prop_assert_eq!(dfa.to_string(), before);
        prop_assert!(dfa.get_state("extra").is_none());
    }

    #[test]
    fn rendering_is_deterministic(recipe in recipe()) {
        let first = recipe.build();
        let second = recipe.build();
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first.to_string(), first.to_string());
    }
}
