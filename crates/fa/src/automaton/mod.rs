//! Finite automaton implementation.
//!
//! This module provides:
//! - Name-keyed states stored in an insertion-ordered table
//! - A DFA with guarded incremental construction
//! - Simulation with an implicit dead state for missing transitions
//! - Symbol swapping and transition-table rendering

mod dfa;
mod state;
mod symbol;

pub use dfa::DFA;
pub use state::{State, StateId, StateSet};
pub use symbol::{EPSILON, Symbol, is_epsilon};
