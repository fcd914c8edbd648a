/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an integer,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Handles integer, string, and boolean literals, identifiers, and
///   operators.
/// - Surfaces unrecognized input as `ILLEGAL` tokens instead of failing.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions, using token-driven prefix and infix rules ordered by
/// operator precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Accumulates grammar errors with line information instead of aborting.
/// - Recovers at statement boundaries so one pass reports every error.
pub mod parser;

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// manages the environment chain that gives closures their lexical scope,
/// and produces results. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals, and `return` unwinding.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;

/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged `Value` enum covering every type a
/// program can produce, along with the canonical boolean and null
/// constants, type names used in error messages, truthiness, and the
/// inspect formatting used by `puts` and the REPL.
pub mod value;
