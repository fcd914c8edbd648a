#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The next token was not the one the grammar requires.
    UnexpectedToken {
        /// Description of the expected token type.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token appeared in leading position that no prefix rule handles.
    NoPrefixParseFunction {
        /// Description of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal could not be represented as an `i64`.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFunction { line, .. }
            | Self::InvalidIntegerLiteral { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Expected next token type to be '{expected}', found '{found}'."),

            Self::NoPrefixParseFunction { token, line } => {
                write!(f, "Error on line {line}: no prefix parse function for '{token}'.")
            },

            Self::InvalidIntegerLiteral { literal, line } => write!(f,
                                                                    "Error on line {line}: Could not parse '{literal}' as a 64-bit integer."),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
