use std::fmt;

use crate::interpreter::token::Position;

/// Behaviour shared by every syntax tree node.
///
/// `Display` renders the canonical source form of a node. Prefix and infix
/// expressions are always wrapped in parentheses, so the rendering of a
/// parsed expression shows exactly how precedence was resolved.
pub trait Node: fmt::Display {
    /// The literal text of the token the node was built from.
    fn token_literal(&self) -> String;
}

/// The root of a parsed source file or REPL input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A name, either referenced in an expression or bound by `let` or a
/// function parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier text.
    pub name:     String,
    /// Source position of the identifier.
    pub position: Position,
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
    /// Position of the opening brace.
    pub position:   Position,
}

/// `let name = value;` or `let name[index] = value;`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The bound name.
    pub name:     Identifier,
    /// The key expression for index assignment, if present.
    pub index:    Option<Box<Expression>>,
    /// The value being bound.
    pub value:    Expression,
    /// Position of the `let` keyword.
    pub position: Position,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding or index assignment.
    Let(LetStatement),
    /// `return value;`
    Return {
        /// The returned expression.
        value:    Expression,
        /// Position of the `return` keyword.
        position: Position,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The expression.
        expression: Expression,
        /// Position of the first token of the expression.
        position:   Position,
    },
    /// A line comment, kept so that programs can be re-serialized.
    Comment {
        /// The comment text including its `#` or `//` leader.
        text:     String,
        /// Position of the comment.
        position: Position,
    },
}

/// Unary operators in prefix position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical not (`!`)
    Bang,
    /// Arithmetic negation (`-`)
    Minus,
    /// Bitwise complement (`~`)
    Tilde,
}

/// Binary operators.
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
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Logical right shift (`>>>`)
    UnsignedShiftRight,
    /// Logical and (`and`, `&&`)
    And,
    /// Logical or (`or`, `||`)
    Or,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A reference to a bound name.
    Identifier(Identifier),
    /// An integer literal.
    Integer {
        /// The value.
        value:    i64,
        /// Source position.
        position: Position,
    },
    /// A float literal.
    Float {
        /// The value.
        value:    f64,
        /// Source position.
        position: Position,
    },
    /// A string literal.
    Str {
        /// The string content, without quotes.
        value:    String,
        /// Source position.
        position: Position,
    },
    /// `true` or `false`.
    Boolean {
        /// The value.
        value:    bool,
        /// Source position.
        position: Position,
    },
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary operation.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
        /// Position of the `if` keyword.
        position:    Position,
    },
    /// `fn(a, b) { ... }`
    Function {
        /// Parameter names.
        parameters: Vec<Identifier>,
        /// The body.
        body:       BlockStatement,
        /// Position of the `fn` keyword.
        position:   Position,
    },
    /// `callee(arguments...)`
    Call {
        /// The expression producing the callee.
        function:  Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Position of the opening parenthesis.
        position:  Position,
    },
    /// `[a, b, c]`
    Array {
        /// Element expressions.
        elements: Vec<Self>,
        /// Position of the opening bracket.
        position: Position,
    },
    /// Point index `left[i]` or slice `left[i:j]`, where either bound of a
    /// slice may be omitted.
    Index {
        /// The indexed expression.
        left:      Box<Self>,
        /// The point index, or the start of a slice.
        index:     Option<Box<Self>>,
        /// `true` for slices.
        has_colon: bool,
        /// The end of a slice.
        end:       Option<Box<Self>>,
        /// Position of the opening bracket.
        position:  Position,
    },
    /// `{key: value, ...}`
    Hash {
        /// Key/value expression pairs in source order.
        pairs:    Vec<(Self, Self)>,
        /// Position of the opening brace.
        position: Position,
    },
    /// `while (condition) { ... }`
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body.
        body:      BlockStatement,
        /// Position of the `while` keyword.
        position:  Position,
    },
    /// `for (init; check; iterate) { ... }`
    For {
        /// Runs once before the loop.
        init:     Box<Statement>,
        /// Checked before every iteration.
        check:    Box<Self>,
        /// Runs after every iteration.
        iterate:  Box<Statement>,
        /// The loop body.
        body:     BlockStatement,
        /// Position of the `for` keyword.
        position: Position,
    },
    /// `x++` or `++x`.
    Increment {
        /// The operand, which must name a variable at run time.
        operand:  Box<Self>,
        /// `true` for `++x`.
        prefix:   bool,
        /// Position of the operator.
        position: Position,
    },
    /// `x--` or `--x`.
    Decrement {
        /// The operand, which must name a variable at run time.
        operand:  Box<Self>,
        /// `true` for `--x`.
        prefix:   bool,
        /// Position of the operator.
        position: Position,
    },
    /// `start..end` (inclusive) or `start...end` (exclusive).
    Range {
        /// Lower bound.
        start:     Box<Self>,
        /// Whether `end` itself is part of the range.
        inclusive: bool,
        /// Upper bound.
        end:       Box<Self>,
        /// Position of the range operator.
        position:  Position,
    },
}

impl Expression {
    /// Gets the source position of the node.
    /// ## Example
    /// ```
    /// use monkey::{ast::Expression, interpreter::token::Position};
    ///
    /// let expr = Expression::Integer { value:    5,
    ///                                  position: Position::new(4, 1, 5), };
    ///
    /// assert_eq!(expr.position().column, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Identifier(Identifier { position, .. })
            | Self::Integer { position, .. }
            | Self::Float { position, .. }
            | Self::Str { position, .. }
            | Self::Boolean { position, .. }
            | Self::Prefix { position, .. }
            | Self::Infix { position, .. }
            | Self::If { position, .. }
            | Self::Function { position, .. }
            | Self::Call { position, .. }
            | Self::Array { position, .. }
            | Self::Index { position, .. }
            | Self::Hash { position, .. }
            | Self::While { position, .. }
            | Self::For { position, .. }
            | Self::Increment { position, .. }
            | Self::Decrement { position, .. }
            | Self::Range { position, .. } => *position,
        }
    }
}

impl Statement {
    /// Gets the source position of the node.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Let(LetStatement { position, .. })
            | Self::Return { position, .. }
            | Self::Expression { position, .. }
            | Self::Comment { position, .. } => *position,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Bang => "!",
                        Self::Minus => "-",
                        Self::Tilde => "~",
                    })
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Pow, ShiftLeft, ShiftRight, Sub, UnsignedShiftRight,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            UnsignedShiftRight => ">>>",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `", "`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.index {
            Some(index) => write!(f, "let {}[{index}] = {};", self.name, self.value),
            None => write!(f, "let {} = {};", self.name, self.value),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(statement) => write!(f, "{statement}"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expression, .. } => write!(f, "{expression}"),
            Self::Comment { text, .. } => writeln!(f, "{text}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Float { value, .. } => write!(f, "{value}"),
            Self::Str { value, .. } => f.write_str(value),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body, .. } => {
                write!(f, "fn(")?;
                write_joined(f, parameters)?;
                write!(f, ") {body}")
            },
            Self::Call { function,
                         arguments,
                         .. } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::Array { elements, .. } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Index { left,
                          index,
                          has_colon,
                          end,
                          .. } => {
                write!(f, "({left}[")?;
                if let Some(index) = index {
                    write!(f, "{index}")?;
                }
                if *has_colon {
                    write!(f, ":")?;
                }
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                write!(f, "])")
            },
            Self::Hash { pairs, .. } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            },
            Self::While { condition, body, .. } => write!(f, "while ({condition}) {body}"),
            Self::For { init,
                        check,
                        iterate,
                        body,
                        .. } => {
                let init = init.to_string();
                let iterate = iterate.to_string();
                write!(f,
                       "for ({}; {check}; {}) {body}",
                       init.trim_end_matches(';'),
                       iterate.trim_end_matches(';'))
            },
            Self::Increment { operand, prefix, .. } => {
                if *prefix {
                    write!(f, "(++{operand})")
                } else {
                    write!(f, "({operand}++)")
                }
            },
            Self::Decrement { operand, prefix, .. } => {
                if *prefix {
                    write!(f, "(--{operand})")
                } else {
                    write!(f, "({operand}--)")
                }
            },
            Self::Range { start,
                          inclusive,
                          end,
                          .. } => {
                let operator = if *inclusive { ".." } else { "..." };
                write!(f, "({start}{operator}{end})")
            },
        }
    }
}

impl Node for Program {
    fn token_literal(&self) -> String {
        self.statements.first().map(Node::token_literal).unwrap_or_default()
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> String {
        "{".to_string()
    }
}

impl Node for Statement {
    fn token_literal(&self) -> String {
        match self {
            Self::Let(_) => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression { expression, .. } => expression.token_literal(),
            Self::Comment { text, .. } => text.clone(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> String {
        match self {
            Self::Identifier(identifier) => identifier.name.clone(),
            Self::Integer { value, .. } => value.to_string(),
            Self::Float { value, .. } => value.to_string(),
            Self::Str { value, .. } => value.clone(),
            Self::Boolean { value, .. } => value.to_string(),
            Self::Prefix { operator, .. } => operator.to_string(),
            Self::Infix { operator, .. } => operator.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::Function { .. } => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::Array { .. } | Self::Index { .. } => "[".to_string(),
            Self::Hash { .. } => "{".to_string(),
            Self::While { .. } => "while".to_string(),
            Self::For { .. } => "for".to_string(),
            Self::Increment { .. } => "++".to_string(),
            Self::Decrement { .. } => "--".to_string(),
            Self::Range { inclusive: true, .. } => "..".to_string(),
            Self::Range { inclusive: false, .. } => "...".to_string(),
        }
    }
}
