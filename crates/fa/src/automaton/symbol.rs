//! Symbol types for automata transitions.

/// An alphabet symbol. Input strings are consumed one `char` at a time.
pub type Symbol = char;

/// Input literal that stands for the empty string.
///
/// The empty sequence has no other spelling in the input convention, so this
/// value is reserved even when `'e'` is itself an alphabet symbol.
pub const EPSILON: &str = "e";

/// Check if an input denotes the empty string.
#[inline]
pub fn is_epsilon(input: &str) -> bool {
    input == EPSILON
}
