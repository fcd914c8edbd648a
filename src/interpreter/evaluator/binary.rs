use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an infix operation between two values.
///
/// Operands of two different types are rejected up front with a type
/// mismatch. Matching types dispatch to the integer, string, or boolean
/// rules; every other combination (nulls, arrays, functions) has no defined
/// operators.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use brio::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, value::Value},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
/// ```
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if left.type_name() != right.type_name() {
        return Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                operator: op,
                                                right: right.type_name(),
                                                line });
    }

    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix(op, *left, *right, line)
        },
        (Value::Str(left), Value::Str(right)) => match op {
            InfixOperator::Add => Ok(Value::from(format!("{left}{right}"))),
            _ => Err(unknown_operator(op, "STRING", line)),
        },
        (Value::Bool(left), Value::Bool(right)) => match op {
            // Booleans are canonical, so plain equality is identity.
            InfixOperator::Equal => Ok(Value::from(left == right)),
            InfixOperator::NotEqual => Ok(Value::from(left != right)),
            _ => Err(unknown_operator(op, "BOOLEAN", line)),
        },
        _ => Err(unknown_operator(op, left.type_name(), line)),
    }
}

/// Evaluates an infix operation on two integers.
///
/// Arithmetic wraps on overflow; division truncates toward zero and rejects
/// a zero divisor.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64, line: usize) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        InfixOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        InfixOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Integer(left.wrapping_div(right)))
        },
        InfixOperator::Less => Ok(Value::from(left < right)),
        InfixOperator::Greater => Ok(Value::from(left > right)),
        InfixOperator::Equal => Ok(Value::from(left == right)),
        InfixOperator::NotEqual => Ok(Value::from(left != right)),
    }
}

// Both operand types are known to match by the time this is reached.
fn unknown_operator(op: InfixOperator, type_name: &'static str, line: usize) -> RuntimeError {
    RuntimeError::UnknownInfixOperator { left: type_name,
                                         operator: op,
                                         right: type_name,
                                         line }
}
