use crate::SourcePosition;
use crate::TokenKind;

/// A single lexed token.
///
/// Tokens are ephemeral: the parsers consume them immediately and only the
/// AST survives a parse. A token carries the doc-comment run that immediately
/// preceded it in source (a contiguous block of `#` comment lines, joined
/// with `\n`); declaration parsers take this as the declaration description.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourcePosition,
    pub doc_comment: Option<String>,
}
