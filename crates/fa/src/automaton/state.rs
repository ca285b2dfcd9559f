//! State types for automata.

use fixedbitset::FixedBitSet;
use std::borrow::Borrow;
use std::fmt;

/// Position of a state in its automaton's state table.
///
/// Ids are assigned in insertion order and never reused.
pub type StateId = usize;

/// A named automaton state.
///
/// The name is the identity: two states are equal iff their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    name: String,
}

impl State {
    /// Create a state with the given name. Any text is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The state's label, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Hash and Eq both derive from `name` alone, so probing a table by `&str`
// is consistent with probing it by `State`.
impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A set of state ids implemented using a fixed-size bit set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Insert a state into the set.
    pub fn insert(&mut self, state: StateId) {
        if state >= self.bits.len() {
            self.bits.grow(state + 1);
        }
        self.bits.insert(state);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        state < self.bits.len() && self.bits.contains(state)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in the set, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::with_capacity(0);
        for state in iter {
            set.insert(state);
        }
        set
    }
}
