use std::iter::Peekable;

use crate::{
    ast::{Block, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a complete token stream into a program.
///
/// Parsing never aborts: when a statement fails, the error is recorded, the
/// stream is skipped forward to the next statement boundary, and parsing
/// continues, so a single pass reports every statement-level error. The
/// returned program contains every statement that did parse; callers decide
/// whether a program accompanied by errors is worth evaluating (the
/// [`crate::interpret`] entry point refuses).
///
/// # Parameters
/// - `tokens`: The full token stream with line information.
///
/// # Returns
/// The parsed program and all accumulated parse errors.
///
/// # Example
/// ```
/// use brio::interpreter::{lexer::lex, parser::statement::parse_program};
///
/// let (program, errors) = parse_program(&lex("let x = 1; x + 2;"));
///
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
#[must_use]
pub fn parse_program(tokens: &[(Token, usize)]) -> (Program, Vec<ParseError>) {
    let mut statements = Vec::new();
    let mut errors = Vec::new();
    let mut tokens = tokens.iter().peekable();

    while tokens.peek().is_some() {
        match parse_statement(&mut tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(&mut tokens);
            },
        }
    }

    (Program { statements }, errors)
}

/// Skips forward to the next statement boundary after a parse error.
///
/// The boundary is the token after the next `;`, or the next `let` /
/// `return` keyword, whichever comes first.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Semicolon => {
                tokens.next();
                return;
            },
            Token::Let | Token::Return => return,
            _ => {
                tokens.next();
            },
        }
    }
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// Each form may be followed by an optional `;`, which is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let statement = match tokens.peek() {
        Some((Token::Let, _)) => parse_let_statement(tokens)?,
        Some((Token::Return, _)) => parse_return_statement(tokens)?,
        _ => parse_expression_statement(tokens)?,
    };

    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(statement)
}

/// Parses a binding of the form `let <identifier> = <expression>`.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = tokens.next().unwrap();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Let { name,
                        value,
                        line: *line })
}

/// Parses a `return <expression>` statement.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = tokens.next().unwrap();

    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Return { value,
                           line: *line })
}

/// Wraps a bare expression as a statement.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    let expr = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a block delimited by braces.
///
/// The opening `{` has already been consumed by the caller; statements are
/// parsed until the matching `}`. Running out of input before the closing
/// brace is an error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A [`Block`] containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Block { statements, line })
}
