use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The `Display` text of each variant is part of the language surface: these
/// are the messages a program's user sees (prefixed with `ERROR: ` by the
/// REPL), so the wording is stable and asserted verbatim by the test suite.
/// The source line is carried separately and exposed via [`Self::line`].
pub enum RuntimeError {
    /// A name was neither bound in the environment chain nor a builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An infix operator has no meaning for the given operand types.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A prefix operator has no meaning for its operand type.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type name of the operand.
        operand:  &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// Type name of the value that was called.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type name of the value being indexed.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A builtin received an argument of a type it does not accept.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the rejected argument.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many arguments were expected.
        want: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IdentifierNotFound { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::UnknownPrefixOperator { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::IndexNotSupported { line, .. }
            | Self::UnsupportedArgument { line, .. }
            | Self::WrongArgumentCount { line, .. }
            | Self::DivisionByZero { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, .. } => {
                write!(f, "identifier not found: {name}")
            },

            Self::TypeMismatch { left,
                                 operator,
                                 right,
                                 .. } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },

            Self::UnknownInfixOperator { left,
                                         operator,
                                         right,
                                         .. } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },

            Self::UnknownPrefixOperator { operator, operand, .. } => {
                write!(f, "unknown operator: {operator}{operand}")
            },

            Self::NotAFunction { type_name, .. } => write!(f, "not a function: {type_name}"),

            Self::IndexNotSupported { type_name, .. } => {
                write!(f, "index operator not supported: {type_name}")
            },

            Self::UnsupportedArgument { builtin, type_name, .. } => {
                write!(f, "argument to `{builtin}` not supported, got {type_name}")
            },

            Self::WrongArgumentCount { got, want, .. } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::DivisionByZero { .. } => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
