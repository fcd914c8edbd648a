use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The literal text is preserved;
    /// conversion to `i64` happens in the parser so that malformed or
    /// overflowing literals surface as parse errors.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens. The value is the raw content between the
    /// quotes; no escape sequences are processed.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Line breaks are skipped but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Any input character no other rule recognizes. The rule has the lowest
    /// priority, so it only matches where every real token rule failed;
    /// lexing therefore cannot fail and the parser reports the bad token
    /// instead.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<'_, Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a string literal slice.
///
/// String literals may span lines; any newlines inside the literal are
/// counted toward the line tracker.
fn parse_string(lex: &mut logos::Lexer<'_, Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a source string into `(token, line)` pairs.
///
/// Lexing never fails: input the token rules do not recognize is emitted as
/// [`Token::Illegal`] carrying the offending text, and the parser reports it
/// as a token without a prefix rule. The end of the returned vector is the
/// end of input.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// All tokens in emission order, each paired with its source line.
///
/// # Example
/// ```
/// use brio::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let x = 5;");
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[1], (Token::Ident("x".to_string()), 1));
/// assert_eq!(tokens.len(), 5);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Ident(_) => "IDENT",
            Self::Illegal(_) => "ILLEGAL",
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Function => "fn",
            Self::Let => "let",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::NewLine | Self::Ignored => "",
        };
        write!(f, "{text}")
    }
}
