use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::{i64_to_usize, usize_to_i64_saturating},
};

/// Evaluates an index expression on an already-evaluated collection.
///
/// Arrays indexed by an integer yield the element at that position; strings
/// yield a single-byte string. A negative index counts from the end
/// (`arr[-1]` is the last element). Any index that remains out of range
/// after wrapping yields `null`. Indexing anything else is an error.
///
/// # Parameters
/// - `collection`: The value being indexed.
/// - `index`: The index value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The element at the index, `null` when out of range, or an error for
/// unsupported operand types.
///
/// # Example
/// ```
/// use brio::interpreter::{evaluator::index::eval_index, value::Value};
///
/// let array = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(1), 1).unwrap(),
///            Value::Integer(20));
/// assert_eq!(eval_index(&array, &Value::Integer(-1), 1).unwrap(),
///            Value::Integer(20));
/// assert_eq!(eval_index(&array, &Value::Integer(2), 1).unwrap(), Value::NULL);
/// ```
pub fn eval_index(collection: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match (collection, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            Ok(array_index(elements, *index))
        },
        (Value::Str(value), Value::Integer(index)) => Ok(string_index(value, *index)),
        (other, _) => Err(RuntimeError::IndexNotSupported { type_name: other.type_name(),
                                                            line }),
    }
}

fn array_index(elements: &[Value], index: i64) -> Value {
    wrap_index(index, elements.len()).and_then(|index| elements.get(index))
                                     .cloned()
                                     .unwrap_or(Value::NULL)
}

fn string_index(value: &str, index: i64) -> Value {
    let bytes = value.as_bytes();
    wrap_index(index, bytes.len()).and_then(|index| bytes.get(index))
                                  .map_or(Value::NULL, |&byte| Value::single_byte_str(byte))
}

/// Resolves a possibly negative index against a container length.
///
/// Negative indices count from the end. The result is only a candidate
/// position; the caller still bounds-checks the upper end via `get`.
fn wrap_index(index: i64, length: usize) -> Option<usize> {
    let index = if index < 0 {
        index + usize_to_i64_saturating(length)
    } else {
        index
    };
    i64_to_usize(index)
}
