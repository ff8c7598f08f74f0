use logos::Logos;

/// A location in the source text.
///
/// `offset` is the byte offset of the first character of the token, `line`
/// and `column` are 1-based and are only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from its parts.
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset,
               line,
               column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a lexical token.
///
/// The variants carry no payload; the source text of a token lives in
/// [`Token::literal`]. Keywords are resolved by logos' `#[token]` entries,
/// which take priority over the identifier pattern for exact matches.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// A character the lexer does not recognise.
    Illegal,
    /// End of input.
    Eof,

    /// `# comment` or `// comment`, up to the end of the line.
    #[regex(r"#[^\n]*", allow_greedy = true)]
    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,

    /// Identifiers such as `x`, `_tmp` or `to-upper`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(-[a-zA-Z_][a-zA-Z0-9_]*)*")]
    Ident,
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Float literals such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// String literals delimited by `"` or `'`. An unterminated string runs
    /// to the end of input.
    #[regex(r#""[^"]*"?"#, allow_greedy = true)]
    #[regex(r"'[^']*'?", allow_greedy = true)]
    Str,

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
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    Power,
    /// `~`
    #[token("~")]
    Tilde,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `>>>`
    #[token(">>>")]
    UnsignedShiftRight,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    LtEq,
    /// `>=`
    #[token(">=")]
    GtEq,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `..`
    #[token("..")]
    Range,
    /// `...`
    #[token("...")]
    ExclusiveRange,

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

    /// `let`
    #[token("let")]
    Let,
    /// `fn` or `function`
    #[token("fn")]
    #[token("function")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `and` or `&&`
    #[token("and")]
    #[token("&&")]
    And,
    /// `or` or `||`
    #[token("or")]
    #[token("||")]
    Or,
    /// `as`
    #[token("as")]
    As,
    /// `import`
    #[token("import")]
    Import,

    /// Line feeds advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns the upper-case name used in diagnostics, e.g. `IDENT` or `==`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Power => "**",
            Self::Tilde => "~",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Range => "..",
            Self::ExclusiveRange => "...",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Let => "LET",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::And => "AND",
            Self::Or => "OR",
            Self::As => "AS",
            Self::Import => "IMPORT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bookkeeping carried by the logos lexer while it scans.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line, starting at 1.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

/// A lexical token: its kind, the source text it stands for, and where it
/// was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind:     TokenKind,
    /// The literal text. String tokens hold their content without quotes.
    pub literal:  String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self { kind,
               literal: literal.into(),
               position }
    }

    /// Returns `true` if the token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
