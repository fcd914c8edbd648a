use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operator applied to a value.
///
/// - `!` inverts truthiness: `!true` is `false`, `!null` is `true`, and any
///   other value (including `0`) negates to `false`.
/// - `-` negates an integer; applying it to any other type is an error.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `operand`: The already-evaluated operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use brio::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::Value},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negate, &Value::Integer(5), 1).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let inverted = eval_prefix(PrefixOperator::Not, &Value::NULL, 1).unwrap();
/// assert_eq!(inverted, Value::TRUE);
/// ```
pub fn eval_prefix(op: PrefixOperator, operand: &Value, line: usize) -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::from(!operand.is_truthy())),
        PrefixOperator::Negate => match operand {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator { operator: op,
                                                               operand:  other.type_name(),
                                                               line }),
        },
    }
}
