//! Errors raised while building an automaton.

use crate::automaton::Symbol;
use thiserror::Error;

/// Reasons a construction call on a [`DFA`](crate::DFA) was refused.
///
/// The automaton is never mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DfaError {
    /// A state with this name already exists.
    #[error("state {name:?} already exists")]
    DuplicateState {
        /// The conflicting name.
        name: String,
    },

    /// No state with this name exists.
    #[error("unknown state {name:?}")]
    UnknownState {
        /// The name that was looked up.
        name: String,
    },

    /// The symbol has not been added to the alphabet.
    #[error("symbol {symbol:?} is not in the alphabet")]
    UnknownSymbol {
        /// The symbol that was looked up.
        symbol: Symbol,
    },
}
