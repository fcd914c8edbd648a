/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms: literals, identifiers, prefix and
/// infix operations, conditionals, function literals, calls, and indexing.
/// Each variant carries the source line it was parsed from for error
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal. The value is the content between the quotes.
    StringLiteral {
        /// The literal content, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array literal expression (e.g. `[1, 2, 3]`).
    ArrayLiteral {
        /// Elements of the array, in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A prefix operation (`!expr` or `-expr`).
    Prefix {
        /// The prefix operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An infix operation (arithmetic, comparison, or equality).
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional expression with an optional `else` block.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call expression. The callee is an arbitrary expression so that
    /// function literals and returned closures can be called directly.
    Call {
        /// Expression producing the function to call.
        callee:    Box<Self>,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Index expression (e.g. `arr[0]` or `"abc"[1]`).
    Index {
        /// The collection being indexed.
        collection: Box<Self>,
        /// The index expression.
        index:      Box<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use brio::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units a program is made of. Blocks and function bodies
/// hold the same statement forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return` statement.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A brace-delimited sequence of statements, as used by `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// A parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

// The Display impls below are the canonical printer. Every node prints as
// valid surface syntax, with prefix and infix expressions fully
// parenthesized, so printing a program and parsing the output reproduces a
// structurally identical tree. Function values reuse this printer for their
// inspect form.

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "\"{value}\""),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn(")?;
                for (index, parameter) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {body}")
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { collection, index, .. } => write!(f, "({collection}[{index}])"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, " {statement}")?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

fn write_separated(f: &mut std::fmt::Formatter<'_>, items: &[Expr]) -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
