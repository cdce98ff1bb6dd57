/// The grammar engine.
///
/// Terminal, sequence and ordered-alternative matchers, the builder that
/// wires them into a grammar, and the matching algorithm.
pub mod core;

/// The arithmetic grammar.
///
/// A fixed composition of engine rules describing arithmetic expressions,
/// together with the names of its rules.
pub mod grammar;

/// The syntax tree.
///
/// Nodes produced by successful matches and their pre-order traversal.
pub mod node;
