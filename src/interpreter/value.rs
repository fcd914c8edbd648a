use std::rc::Rc;

use crate::{
    ast::Block,
    interpreter::evaluator::{builtin::BuiltinDef, environment::Environment},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: integers, booleans,
/// strings, arrays, the null value, functions (both user-defined closures
/// and builtins), and the internal return wrapper used to unwind `return`
/// statements through nested blocks.
///
/// Heap-backed variants are reference counted, so cloning a value is cheap
/// and arrays and strings are shared rather than copied. `push` builds a new
/// array instead of mutating, which keeps that sharing sound.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value. Only the canonical [`Value::TRUE`] and
    /// [`Value::FALSE`] constants are ever constructed by the evaluator.
    Bool(bool),
    /// A string of bytes.
    Str(Rc<String>),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// The null value.
    Null,
    /// A user-defined function bundled with its defining environment.
    Function(Rc<FunctionValue>),
    /// A builtin function from the process-wide registry.
    Builtin(&'static BuiltinDef),
    /// Internal wrapper produced by a `return` statement. It bubbles through
    /// enclosing blocks still wrapped and is unwrapped at the program level
    /// or when a function call completes; it is never observable to user
    /// code.
    Return(Box<Self>),
}

impl Value {
    /// The canonical `true` value.
    pub const TRUE: Self = Self::Bool(true);
    /// The canonical `false` value.
    pub const FALSE: Self = Self::Bool(false);
    /// The canonical null value.
    pub const NULL: Self = Self::Null;

    /// The type name used in error messages, e.g. `INTEGER` or `ARRAY`.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::NULL.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Null => "NULL",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
        }
    }

    /// Applies the truthiness rule used by conditions and `!`: `false` and
    /// `null` are falsy, everything else (including `0` and `""`) is truthy.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::FALSE.is_truthy());
    /// assert!(!Value::NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Builds a single-byte string, as produced by string indexing and by
    /// `first` on a string. Strings are byte sequences; a byte that is not
    /// valid UTF-8 on its own is rendered lossily when inspected.
    #[must_use]
    pub(crate) fn single_byte_str(byte: u8) -> Self {
        Self::Str(Rc::new(String::from_utf8_lossy(&[byte]).into_owned()))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::new(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(Rc::new(values))
    }
}

/// A user-defined function value.
///
/// The body is the AST parsed from the `fn` literal; the environment is a
/// shared reference to the scope that was active when the literal was
/// evaluated. That captured scope stays alive as long as the function value
/// does, which is what makes returned closures work.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment captured at the definition site.
    pub env:        Rc<Environment>,
}

// Environments are compared by identity here: structural comparison would
// chase the environment graph, which can contain this very function.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
        && self.body == other.body
        && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {}", function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
