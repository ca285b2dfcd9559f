//! Deterministic finite automata.
//!
//! A [`DFA`] is built incrementally by name: states, alphabet symbols,
//! transitions, the start state and the accepting states. Once built it
//! answers membership queries with [`DFA::accepts`], produces relabeled
//! copies with [`DFA::swap`] and renders its full 5-tuple through
//! [`std::fmt::Display`].

pub mod automaton;
pub mod error;

pub use automaton::{DFA, EPSILON, State, StateId, StateSet, Symbol};
pub use error::DfaError;
