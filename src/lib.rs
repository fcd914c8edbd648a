//! # brio
//!
//! brio is a small, dynamically typed scripting language with integers,
//! booleans, strings, arrays, first-class functions with lexical closures,
//! conditionals, and a handful of builtins. This crate implements its full
//! pipeline: a lexer, a precedence-climbing token-driven parser, and a
//! tree-walking evaluator over a chain of shared environments.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    error::InterpretError,
    interpreter::{
        evaluator::{core::eval_program, environment::Environment},
        lexer::lex,
        parser::statement::parse_program,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree, together with the
/// canonical printer that renders any node back into parseable surface
/// syntax.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes deterministically for inspection and round-tripping.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Parse errors carry their source line; runtime errors
/// additionally fix the user-visible message strings of the language.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the environment model to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Houses the integer-width conversion helpers shared by indexing and the
/// length builtin.
pub mod util;

/// Runs a source string in the given environment and returns its terminal
/// value.
///
/// The source is tokenized and parsed first; if the parser reports any
/// errors, evaluation is not attempted and all of them are returned
/// together. Otherwise the program is evaluated and its final value (if the
/// last statement produced one) is returned. Passing the same environment
/// across calls preserves bindings between them, which is how the REPL
/// keeps its session state.
///
/// # Errors
/// Returns [`InterpretError::Parse`] when the source does not parse, and
/// [`InterpretError::Runtime`] when evaluation fails.
///
/// # Examples
/// ```
/// use brio::{
///     interpret,
///     interpreter::{evaluator::environment::Environment, value::Value},
/// };
///
/// let env = Environment::new();
///
/// let result = interpret("let adder = fn(x) { fn(y) { x + y } }; adder(2)(3);", &env);
/// assert_eq!(result.unwrap(), Some(Value::Integer(5)));
///
/// // Bindings persist in the environment across calls.
/// let result = interpret("adder(10)(5);", &env);
/// assert_eq!(result.unwrap(), Some(Value::Integer(15)));
/// ```
pub fn interpret(source: &str, env: &Rc<Environment>) -> Result<Option<Value>, InterpretError> {
    let tokens = lex(source);

    let (program, errors) = parse_program(&tokens);
    if !errors.is_empty() {
        return Err(InterpretError::Parse(errors));
    }

    eval_program(&program, env).map_err(InterpretError::Runtime)
}
