//! Deterministic Finite Automaton (DFA) implementation.

use crate::automaton::state::{State, StateId, StateSet};
use crate::automaton::symbol::{Symbol, is_epsilon};
use crate::error::DfaError;
use indexmap::IndexSet;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use tracing::{debug, trace};

/// A Deterministic Finite Automaton.
///
/// States are addressed by name through the public API. Internally every
/// state lives once in `states` and everything else refers to it by its
/// [`StateId`], so cycles in the transition graph need no shared ownership.
#[derive(Debug, Clone)]
pub struct DFA {
    /// Q, in insertion order. A state's position is its id.
    states: IndexSet<State>,
    /// Sigma, in insertion order.
    sigma: IndexSet<Symbol>,
    /// Delta: (source, symbol) -> destination
    transitions: HashMap<(StateId, Symbol), StateId>,
    /// Start state (None if unset)
    start_state: Option<StateId>,
    /// Final (accepting) states, in designation order.
    final_states: IndexSet<StateId>,
}

impl DFA {
    /// Create a new empty DFA.
    pub fn new() -> Self {
        Self {
            states: IndexSet::new(),
            sigma: IndexSet::new(),
            transitions: HashMap::new(),
            start_state: None,
            final_states: IndexSet::new(),
        }
    }

    fn state_id(&self, name: &str) -> Result<StateId, DfaError> {
        self.states
            .get_index_of(name)
            .ok_or_else(|| DfaError::UnknownState {
                name: name.to_owned(),
            })
    }

    /// Add a new state and return its id.
    ///
    /// Fails if a state with this name already exists.
    pub fn try_add_state(&mut self, name: &str) -> Result<StateId, DfaError> {
        if self.states.contains(name) {
            return Err(DfaError::DuplicateState {
                name: name.to_owned(),
            });
        }
        let (id, _) = self.states.insert_full(State::new(name));
        Ok(id)
    }

    /// Add a new state. Returns false if the name is taken.
    pub fn add_state(&mut self, name: &str) -> bool {
        succeeded(self.try_add_state(name))
    }

    /// Designate the start state, replacing any previous one.
    pub fn try_set_start(&mut self, name: &str) -> Result<(), DfaError> {
        self.start_state = Some(self.state_id(name)?);
        Ok(())
    }

    /// Designate the start state. Returns false if no such state exists.
    pub fn set_start(&mut self, name: &str) -> bool {
        succeeded(self.try_set_start(name))
    }

    /// Add a final (accepting) state. Marking a state final twice is a no-op.
    pub fn try_set_final(&mut self, name: &str) -> Result<(), DfaError> {
        let id = self.state_id(name)?;
        self.final_states.insert(id);
        Ok(())
    }

    /// Add a final (accepting) state. Returns false if no such state exists.
    pub fn set_final(&mut self, name: &str) -> bool {
        succeeded(self.try_set_final(name))
    }

    /// Add a symbol to the alphabet if it is not already present.
    pub fn add_sigma(&mut self, symbol: Symbol) {
        self.sigma.insert(symbol);
    }

    /// Add a transition, overwriting any existing one for `(from, symbol)`.
    ///
    /// Both states must exist and `symbol` must be in the alphabet.
    pub fn try_add_transition(
        &mut self,
        from: &str,
        to: &str,
        symbol: Symbol,
    ) -> Result<(), DfaError> {
        let source = self.state_id(from)?;
        let destination = self.state_id(to)?;
        if !self.sigma.contains(&symbol) {
            return Err(DfaError::UnknownSymbol { symbol });
        }
        self.transitions.insert((source, symbol), destination);
        Ok(())
    }

    /// Add a transition. Returns false if a state or the symbol is unknown.
    pub fn add_transition(&mut self, from: &str, to: &str, symbol: Symbol) -> bool {
        succeeded(self.try_add_transition(from, to, symbol))
    }

    /// Check whether the automaton accepts `input`.
    ///
    /// [`EPSILON`](crate::EPSILON) denotes the empty string. An automaton
    /// without a start state accepts nothing, and a missing transition
    /// rejects immediately.
    pub fn accepts(&self, input: &str) -> bool {
        let accepted = self
            .run_id(input)
            .is_some_and(|state| self.final_states.contains(&state));
        trace!(input, accepted, "simulation finished");
        accepted
    }

    /// Run the automaton on `input` and return the state it stops in.
    ///
    /// Returns `None` if there is no start state or a transition is missing.
    pub fn run(&self, input: &str) -> Option<&State> {
        self.run_id(input)
            .and_then(|state| self.states.get_index(state))
    }

    fn run_id(&self, input: &str) -> Option<StateId> {
        let Some(mut current) = self.start_state else {
            trace!(input, "no start state");
            return None;
        };

        if is_epsilon(input) {
            return Some(current);
        }

        for symbol in input.chars() {
            let Some(&next) = self.transitions.get(&(current, symbol)) else {
                trace!(state = current, %symbol, "no transition");
                return None;
            };
            trace!(from = current, %symbol, to = next, "step");
            current = next;
        }

        Some(current)
    }

    /// Get the alphabet.
    pub fn get_sigma(&self) -> &IndexSet<Symbol> {
        &self.sigma
    }

    /// Look up a state by name.
    pub fn get_state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// Check if the named state is final. Unknown names are not final.
    pub fn is_final(&self, name: &str) -> bool {
        self.states
            .get_index_of(name)
            .is_some_and(|id| self.final_states.contains(&id))
    }

    /// Check if the named state is the start state.
    pub fn is_start(&self, name: &str) -> bool {
        self.start_state().is_some_and(|start| start.name() == name)
    }

    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Iterate over the states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    /// Get the start state.
    pub fn start_state(&self) -> Option<&State> {
        self.start_state.and_then(|id| self.states.get_index(id))
    }

    /// Iterate over the final states in the order they were designated.
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.final_states
            .iter()
            .filter_map(|&id| self.states.get_index(id))
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, from: &str, symbol: Symbol) -> Option<&State> {
        let source = self.states.get_index_of(from)?;
        self.destination(source, symbol)
    }

    fn destination(&self, source: StateId, symbol: Symbol) -> Option<&State> {
        self.transitions
            .get(&(source, symbol))
            .and_then(|&to| self.states.get_index(to))
    }

    /// Iterate over all transitions as `(from, symbol, to)`.
    ///
    /// Rows follow state insertion order and columns follow alphabet
    /// insertion order, matching the rendered table.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, Symbol, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .flat_map(move |(source, from)| {
                self.sigma.iter().filter_map(move |&symbol| {
                    let to = self.destination(source, symbol)?;
                    Some((from, symbol, to))
                })
            })
    }

    /// Find all states reachable from the start state.
    pub fn reachable_states(&self) -> StateSet {
        let mut visited = StateSet::with_capacity(self.states.len());
        let Some(start) = self.start_state else {
            return visited;
        };

        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(state) = queue.pop_front() {
            if visited.contains(state) {
                continue;
            }
            visited.insert(state);

            for &symbol in &self.sigma {
                if let Some(&next) = self.transitions.get(&(state, symbol)) {
                    if !visited.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        visited
    }

    /// Check if the DFA is empty (accepts no strings).
    pub fn is_empty(&self) -> bool {
        if self.start_state.is_none() || self.final_states.is_empty() {
            return true;
        }
        !self
            .reachable_states()
            .iter()
            .any(|state| self.final_states.contains(&state))
    }

    /// Return a new DFA with every `a`-transition relabeled `b` and vice versa.
    ///
    /// The copy is built from scratch by replaying this automaton's alphabet,
    /// states, start and final designations, then its transitions with the
    /// two symbols exchanged. `self` is left untouched.
    pub fn swap(&self, a: Symbol, b: Symbol) -> DFA {
        let mut swapped = DFA::new();

        for &symbol in &self.sigma {
            swapped.add_sigma(symbol);
        }
        for state in &self.states {
            swapped.add_state(state.name());
        }
        if let Some(start) = self.start_state() {
            swapped.set_start(start.name());
        }
        for state in self.final_states() {
            swapped.set_final(state.name());
        }

        let mut relabeled = 0usize;
        for (from, symbol, to) in self.transitions() {
            let symbol = if symbol == a {
                b
            } else if symbol == b {
                a
            } else {
                symbol
            };
            if swapped.add_transition(from.name(), to.name(), symbol) {
                relabeled += 1;
            }
        }

        debug!(%a, %b, transitions = relabeled, "swapped symbols");
        swapped
    }
}

impl Default for DFA {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " Q = {{")?;
        for state in &self.states {
            write!(f, " {state}")?;
        }
        writeln!(f, " }}")?;

        write!(f, "Sigma = {{")?;
        for symbol in &self.sigma {
            write!(f, " {symbol}")?;
        }
        writeln!(f, " }}")?;

        writeln!(f, "delta =")?;
        f.write_str("\t\t")?;
        for symbol in &self.sigma {
            write!(f, "{symbol}\t")?;
        }
        writeln!(f)?;

        // Generated from state and alphabet order, never from map order.
        for (source, state) in self.states.iter().enumerate() {
            write!(f, "\t{state}")?;
            for &symbol in &self.sigma {
                f.write_str("\t")?;
                if let Some(to) = self.destination(source, symbol) {
                    write!(f, "{to}")?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "q0 = {}", self.start_state().map_or("", State::name))?;

        write!(f, "F = {{")?;
        for state in self.final_states() {
            write!(f, " {state}")?;
        }
        writeln!(f, " }}")
    }
}

/// Collapse a construction result into the boolean contract.
fn succeeded<T>(result: Result<T, DfaError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "automaton mutation refused");
            false
        }
    }
}
