use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::usize_to_i64_saturating,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the call-site
/// line number. It returns a value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin is variadic.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    Any,
}

/// A single entry in the builtin registry.
///
/// The registry is a static table, populated at compile time and read-only
/// thereafter. Builtins are resolved only after an environment lookup
/// misses, so user bindings shadow them.
#[derive(Debug)]
pub struct BuiltinDef {
    pub name:  &'static str,
    pub arity: Arity,
    func:      BuiltinFn,
}

// Two references into the static table are the same builtin exactly when
// the names match.
impl PartialEq for BuiltinDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines builtin functions by generating the registry table.
///
/// Each entry provides a string name, an arity specification, and a function
/// pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: len },
    "first" => { arity: Arity::Exact(1), func: first },
    "rest"  => { arity: Arity::Exact(1), func: rest },
    "push"  => { arity: Arity::Exact(2), func: push },
    "puts"  => { arity: Arity::Any,      func: puts },
}

/// Finds a builtin by name in the registry.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Invokes a builtin after checking its arity constraint.
///
/// # Errors
/// Returns `WrongArgumentCount` when a fixed-arity builtin receives the
/// wrong number of arguments, or whatever error the builtin itself raises.
pub fn apply(builtin: &BuiltinDef, args: &[Value], line: usize) -> EvalResult<Value> {
    if let Arity::Exact(want) = builtin.arity
       && args.len() != want
    {
        return Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                                      want,
                                                      line });
    }

    (builtin.func)(args, line)
}

/// Returns the length of an array or string as an integer.
///
/// String length is measured in bytes.
fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(Value::Integer(usize_to_i64_saturating(elements.len()))),
        Value::Str(value) => Ok(Value::Integer(usize_to_i64_saturating(value.len()))),
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                         type_name: other.type_name(),
                                                         line }),
    }
}

/// Returns the first element of an array, or the first byte of a string as
/// a single-character string. Empty input yields `null`.
fn first(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::NULL)),
        Value::Str(value) => {
            Ok(value.as_bytes()
                    .first()
                    .map_or(Value::NULL, |&byte| Value::single_byte_str(byte)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "first",
                                                         type_name: other.type_name(),
                                                         line }),
    }
}

/// Returns a new array or string with the first element removed.
///
/// Empty input yields `null`; a single-element input yields an empty
/// container.
fn rest(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(Value::NULL);
            }
            Ok(Value::from(elements[1..].to_vec()))
        },
        Value::Str(value) => {
            if value.is_empty() {
                return Ok(Value::NULL);
            }
            let bytes = &value.as_bytes()[1..];
            Ok(Value::from(String::from_utf8_lossy(bytes).into_owned()))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "rest",
                                                         type_name: other.type_name(),
                                                         line }),
    }
}

/// Returns a new array with the second argument appended.
///
/// The original array is not mutated; values that share it keep seeing the
/// old contents.
fn push(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Value::from(extended))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "push",
                                                         type_name: other.type_name(),
                                                         line }),
    }
}

/// Prints the inspect form of each argument on its own line and returns
/// `null`.
#[allow(clippy::unnecessary_wraps)]
fn puts(args: &[Value], _line: usize) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::NULL)
}
