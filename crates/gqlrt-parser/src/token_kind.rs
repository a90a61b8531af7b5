/// The kind of a lexed token.
///
/// Literal values (`IntValue`, `FloatValue`) store only the raw source text;
/// materialization to runtime values happens when a
/// [`Value`](crate::ast::Value) is resolved. `StringValue` stores the
/// unescaped string content.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    /// A name or keyword, including `true`, `false`, and `null`.
    Name(String),

    /// Raw source text of an integer literal, including any negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(String),

    /// Raw source text of a float literal, including any negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(String),

    /// Unescaped content of a quoted string literal.
    StringValue(String),

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether `other` is the same kind of token, ignoring any carried text.
    pub fn same_kind_as(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// A short human-readable rendering for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ampersand => "`&`".to_string(),
            TokenKind::At => "`@`".to_string(),
            TokenKind::Bang => "`!`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::CurlyBraceClose => "`}`".to_string(),
            TokenKind::CurlyBraceOpen => "`{`".to_string(),
            TokenKind::Dollar => "`$`".to_string(),
            TokenKind::Ellipsis => "`...`".to_string(),
            TokenKind::Equals => "`=`".to_string(),
            TokenKind::ParenClose => "`)`".to_string(),
            TokenKind::ParenOpen => "`(`".to_string(),
            TokenKind::Pipe => "`|`".to_string(),
            TokenKind::SquareBracketClose => "`]`".to_string(),
            TokenKind::SquareBracketOpen => "`[`".to_string(),
            TokenKind::Name(name) => format!("`{name}`"),
            TokenKind::IntValue(text) => format!("integer `{text}`"),
            TokenKind::FloatValue(text) => format!("float `{text}`"),
            TokenKind::StringValue(_) => "string value".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}
