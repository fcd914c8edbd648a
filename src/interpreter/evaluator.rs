/// Core evaluation logic.
///
/// Contains the main tree-walking dispatch over programs, statements,
/// blocks, and expressions, together with the `EvalResult` alias used by
/// every evaluation function.
pub mod core;

/// Lexical environments.
///
/// Defines the name-to-value frames that form the environment chain, shared
/// between closures and their defining scopes.
pub mod environment;

/// Prefix operator evaluation.
///
/// Implements logical NOT and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements arithmetic, comparison, and equality for the operand type
/// combinations that define them.
pub mod binary;

/// Index operator evaluation.
///
/// Implements array and string indexing, including negative-index wrapping
/// and out-of-range handling.
pub mod index;

/// Function application.
///
/// Handles calls to user-defined functions (closure environments, parameter
/// binding, return unwrapping) and dispatch into the builtin registry.
pub mod function;

/// The builtin registry.
///
/// The process-wide table of builtin functions (`len`, `first`, `rest`,
/// `push`, `puts`) with their arity constraints.
pub mod builtin;
