/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// a program. Parse errors include unexpected tokens, tokens with no prefix
/// rule, unrepresentable integer literals, and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved identifiers, operator type mismatches, bad call targets, and
/// division by zero. Their display strings are the user-visible error
/// surface of the language.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The error type returned by [`crate::interpret`].
///
/// A source string can fail in one of two phases: the parser may reject it
/// (possibly with several accumulated errors), or the evaluator may fail at
/// runtime. Evaluation is never attempted when parse errors are present.
pub enum InterpretError {
    /// The parser reported one or more errors; the program was not run.
    Parse(Vec<ParseError>),
    /// The program parsed cleanly but evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                writeln!(f, "parser errors:")?;
                for error in errors {
                    writeln!(f, "\t{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for InterpretError {}
