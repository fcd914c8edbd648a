/// Core expression parsing.
///
/// Contains the precedence table and the expression loop that drives the
/// prefix, infix, call, and index rules.
pub mod core;

/// Statement parsing.
///
/// Implements the statement forms (`let`, `return`, expression statements),
/// block parsing, and the program-level loop with its error accumulation
/// and statement-boundary recovery.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the token assertion primitive and the shared comma-separated
/// list parser.
pub mod utils;
