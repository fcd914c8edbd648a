use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, environment::Environment, function, index, unary},
        value::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. `?` propagation gives every
/// evaluation path the short-circuit behavior: the first failing
/// sub-evaluation surfaces immediately, without evaluating its siblings.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program in the given environment.
///
/// Statements run in source order. A `return` at the top level (or bubbling
/// out of a nested block) ends the program immediately, unwrapped to its
/// inner value. The result is the value of the last executed statement, or
/// `None` when that statement produces nothing to show (a `let` binding).
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The environment to evaluate in, usually the global one.
///
/// # Returns
/// The terminal value of the program, if any.
///
/// # Example
/// ```
/// use brio::interpreter::{
///     evaluator::{core::eval_program, environment::Environment},
///     lexer::lex,
///     parser::statement::parse_program,
///     value::Value,
/// };
///
/// let (program, errors) = parse_program(&lex("let a = 5; a + 10;"));
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// let result = eval_program(&program, &env).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(15)));
/// ```
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Some(Value::Return(value)) = result {
            return Ok(Some(*value));
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// - `let` evaluates its value, binds it in the current environment
///   (latest write wins), and produces `None`.
/// - `return` wraps its value in [`Value::Return`] so enclosing blocks can
///   unwind.
/// - An expression statement produces its expression's value.
pub fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expr, .. } => Ok(Some(eval_expression(expr, env)?)),
    }
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a [`Value::Return`] produced inside the block is
/// passed upward still wrapped, so that enclosing blocks keep unwinding;
/// only the program level and function application unwrap it. Blocks do not
/// introduce a scope: a `let` inside a block binds in the enclosing
/// function's (or the global) environment.
pub fn eval_block(block: &Block, env: &Rc<Environment>) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Some(Value::Return(_))) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch point of the tree walker: literals construct
/// their value directly, identifiers resolve through the environment chain
/// and then the builtin registry, and compound forms recurse strictly left
/// to right.
pub fn eval_expression(expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value, .. } => Ok(Value::from(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::from(value.clone())),
        Expr::Identifier { name, line } => eval_identifier(name, *line, env),
        Expr::ArrayLiteral { elements, .. } => {
            let values = eval_expressions(elements, env)?;
            Ok(Value::from(values))
        },
        Expr::Prefix { op, right, line } => {
            let operand = eval_expression(right, env)?;
            unary::eval_prefix(*op, &operand, *line)
        },
        Expr::Infix { left, op, right, line } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*op, &left, &right, *line)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::Index { collection, index, line } => {
            let collection = eval_expression(collection, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&collection, &index, *line)
        },
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { callee, arguments, line } => {
            let function = eval_expression(callee, env)?;
            let args = eval_expressions(arguments, env)?;
            function::apply_function(&function, args, *line)
        },
    }
}

/// Evaluates a list of expressions left to right.
///
/// The first failing element aborts the whole list.
pub fn eval_expressions(exprs: &[Expr], env: &Rc<Environment>) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }

    Ok(values)
}

/// Resolves an identifier.
///
/// The environment chain is consulted first, then the builtin registry, so
/// user bindings shadow builtins of the same name.
fn eval_identifier(name: &str, line: usize, env: &Rc<Environment>) -> EvalResult<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string(),
                                           line })
}

/// Evaluates a conditional expression.
///
/// The condition is subject to the truthiness rule (`false` and `null` are
/// falsy, everything else is truthy). A falsy condition with no `else`
/// block yields `null`.
fn eval_if(condition: &Expr,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &Rc<Environment>)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    let result = if condition.is_truthy() {
        eval_block(consequence, env)?
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)?
    } else {
        None
    };

    Ok(result.unwrap_or(Value::NULL))
}
