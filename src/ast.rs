/// An abstract syntax tree (AST) node representing one arithmetic expression.
///
/// `Expr` is a closed set of three shapes. Every composite node owns its
/// children, so a tree is acyclic and is never shared between two parses. The
/// parser builds a tree in one pass and nothing mutates it afterwards; both
/// the evaluator and the printer are read-only traversals that match on every
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, identifier or keyword constant, kept as written.
    ///
    /// Numeric interpretation is deferred to evaluation, which lets plain
    /// numbers and the `pi`/`e` keywords share one node.
    Literal {
        /// The lexeme exactly as it appeared in the source.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation (`-x` or `$x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An infix operation, explicit or synthesized by implicit
    /// multiplication.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Builds a literal node from its source text.
    #[must_use]
    pub fn literal(text: impl Into<String>, line: usize) -> Self {
        Self::Literal { text: text.into(),
                        line }
    }

    /// Builds a unary node owning `expr`.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self, line: usize) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr),
                        line }
    }

    /// Builds a binary node owning both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, line: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line }
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use prattle::ast::Expr;
    ///
    /// let expr = Expr::literal("42", 5);
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::UnaryOp { line, .. } | Self::BinaryOp { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`), also produced by implicit multiplication.
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// The source symbol of the operator, as written by the printer.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Square root (`$x`).
    Sqrt,
}

impl UnaryOperator {
    /// The source symbol of the operator, as written by the printer.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Sqrt => "$",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
