use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin,
            core::{EvalResult, eval_block},
            environment::Environment,
        },
        value::Value,
    },
};

/// Applies a callable value to already-evaluated arguments.
///
/// For a user-defined function, a fresh environment is created whose outer
/// link is the function's captured environment, the parameters are bound
/// positionally, and the body block is evaluated there. A `return` from the
/// body is unwrapped before the result is handed back, so the wrapper never
/// escapes a call. Builtins dispatch through the registry. Anything else is
/// not callable.
///
/// # Parameters
/// - `function`: The callee value.
/// - `args`: Evaluated argument values, in call order.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The function's result.
///
/// # Errors
/// - `WrongArgumentCount` when the argument count does not match the
///   parameter count.
/// - `NotAFunction` when the callee is not a function or builtin.
pub fn apply_function(function: &Value, args: Vec<Value>, line: usize) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                              want: function.parameters.len(),
                                                              line });
            }

            let call_env = Environment::enclosed(Rc::clone(&function.env));
            for (parameter, value) in function.parameters.iter().zip(args) {
                call_env.set(parameter.clone(), value);
            }

            let result = eval_block(&function.body, &call_env)?.unwrap_or(Value::NULL);
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => builtin::apply(builtin, &args, line),
        other => Err(RuntimeError::NotAFunction { type_name: other.type_name(),
                                                  line }),
    }
}

/// Strips the [`Value::Return`] wrapper, if present, when a call completes.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
