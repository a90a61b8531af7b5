//! The lexer shared by the schema-document and query-document parsers.
//!
//! Both surfaces use one lexical grammar: names, punctuators, int/float/string
//! literals, and `#` comments. Commas are insignificant and treated as
//! whitespace. A contiguous run of comment lines is captured and attached to
//! the next token as its doc comment, which declaration parsers consume as
//! the declaration description.

use crate::ast::Ident;
use crate::SourcePosition;
use crate::SyntaxError;
use crate::Token;
use crate::TokenKind;
use smallvec::SmallVec;

type Result<T> = std::result::Result<T, SyntaxError>;

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// A fail-fast lexer with one-token lookahead.
pub struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`. The remaining text to
    /// lex is `&source[byte_offset..]`.
    byte_offset: usize,

    /// Current 1-based line number.
    line: usize,

    /// Current 1-based column number (in characters).
    col: usize,

    /// Comment lines accumulated since the last token was produced.
    pending_doc: SmallVec<[String; 2]>,

    /// Lookahead slot.
    peeked: Option<Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            byte_offset: 0,
            line: 1,
            col: 1,
            pending_doc: SmallVec::new(),
            peeked: None,
        }
    }

    // =========================================================================
    // Character-level scanning
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.byte_offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes one character, updating line/column tracking. A `\r\n` pair
    /// is consumed as a single newline.
    fn consume_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.byte_offset += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.col = 1;
            }
            '\r' => {
                self.line += 1;
                self.col = 1;
                if self.remaining().starts_with('\n') {
                    self.byte_offset += 1;
                }
            }
            _ => {
                self.col += 1;
            }
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        let mut newlines = 0;
        while let Some(ch) = self.peek_char() {
            match ch {
                // consume_char treats \r\n as a single newline.
                '\n' | '\r' => {
                    newlines += 1;
                    self.consume_char();
                }
                ' ' | '\t' | ',' | '\u{feff}' => {
                    self.consume_char();
                }
                _ => break,
            }
        }
        // A comment run is contiguous: one newline separates consecutive
        // comment lines (and a run from the token it documents); a blank
        // line ends the run.
        if newlines > 1 {
            self.pending_doc.clear();
        }
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col)
    }

    // =========================================================================
    // Token-level API
    // =========================================================================

    /// Peeks the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token> {
        if self.peeked.is_none() {
            let token = self.lex_token()?;
            self.peeked = Some(token);
        }
        match self.peeked.as_ref() {
            Some(token) => Ok(token),
            None => unreachable!("lookahead slot filled above"),
        }
    }

    /// Peeks the kind of the next token.
    pub fn peek_kind(&mut self) -> Result<&TokenKind> {
        Ok(&self.peek()?.kind)
    }

    /// The location of the next token.
    pub fn location(&mut self) -> Result<SourcePosition> {
        Ok(self.peek()?.location)
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Result<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lex_token(),
        }
    }

    /// Consumes the next token, failing unless it is the same kind as
    /// `expected`.
    pub fn expect(&mut self, expected: &TokenKind) -> Result<Token> {
        let token = self.peek()?;
        if token.kind.same_kind_as(expected) {
            self.next()
        } else {
            Err(SyntaxError::new(
                format!(
                    "expected {}, found {}",
                    expected.describe(),
                    token.kind.describe(),
                ),
                token.location,
            ))
        }
    }

    /// Consumes the next token if it is the same kind as `expected`; returns
    /// whether a token was consumed.
    pub fn eat(&mut self, expected: &TokenKind) -> Result<bool> {
        if self.peek()?.kind.same_kind_as(expected) {
            self.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a name token.
    pub fn consume_name(&mut self) -> Result<Ident> {
        let token = self.peek()?;
        match &token.kind {
            TokenKind::Name(_) => {
                let token = self.next()?;
                match token.kind {
                    TokenKind::Name(name) => Ok(Ident {
                        name,
                        location: token.location,
                    }),
                    _ => unreachable!("peeked kind checked above"),
                }
            }
            other => Err(SyntaxError::new(
                format!("expected a name, found {}", other.describe()),
                token.location,
            )),
        }
    }

    /// Consumes a name token, failing unless it spells `keyword`.
    pub fn consume_keyword(&mut self, keyword: &str) -> Result<SourcePosition> {
        let ident = self.consume_name()?;
        if ident.name == keyword {
            Ok(ident.location)
        } else {
            Err(SyntaxError::new(
                format!("expected `{keyword}`, found `{}`", ident.name),
                ident.location,
            ))
        }
    }

    /// Detaches and returns the doc-comment run preceding the next token.
    ///
    /// Declaration parsers call this at the head of a declaration; comment
    /// runs not claimed this way are discarded with their token.
    pub fn take_doc_comment(&mut self) -> Result<Option<String>> {
        self.peek()?;
        match self.peeked.as_mut() {
            Some(token) => Ok(token.doc_comment.take()),
            None => unreachable!("lookahead slot filled by peek"),
        }
    }

    // =========================================================================
    // Lexing
    // =========================================================================

    fn take_pending_doc(&mut self) -> Option<String> {
        if self.pending_doc.is_empty() {
            None
        } else {
            let lines: Vec<String> = std::mem::take(&mut self.pending_doc).into_vec();
            Some(lines.join("\n"))
        }
    }

    fn make_token(&mut self, kind: TokenKind, location: SourcePosition) -> Token {
        Token {
            kind,
            location,
            doc_comment: self.take_pending_doc(),
        }
    }

    fn single_char_token(&mut self, kind: TokenKind, location: SourcePosition) -> Token {
        self.consume_char();
        self.make_token(kind, location)
    }

    fn lex_token(&mut self) -> Result<Token> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            let ch = match self.peek_char() {
                None => return Ok(self.make_token(TokenKind::Eof, start)),
                Some(ch) => ch,
            };

            return match ch {
                '#' => {
                    self.lex_comment();
                    continue;
                }

                '!' => Ok(self.single_char_token(TokenKind::Bang, start)),
                '$' => Ok(self.single_char_token(TokenKind::Dollar, start)),
                '&' => Ok(self.single_char_token(TokenKind::Ampersand, start)),
                '(' => Ok(self.single_char_token(TokenKind::ParenOpen, start)),
                ')' => Ok(self.single_char_token(TokenKind::ParenClose, start)),
                ':' => Ok(self.single_char_token(TokenKind::Colon, start)),
                '=' => Ok(self.single_char_token(TokenKind::Equals, start)),
                '@' => Ok(self.single_char_token(TokenKind::At, start)),
                '[' => Ok(self.single_char_token(TokenKind::SquareBracketOpen, start)),
                ']' => Ok(self.single_char_token(TokenKind::SquareBracketClose, start)),
                '{' => Ok(self.single_char_token(TokenKind::CurlyBraceOpen, start)),
                '}' => Ok(self.single_char_token(TokenKind::CurlyBraceClose, start)),
                '|' => Ok(self.single_char_token(TokenKind::Pipe, start)),

                '.' => self.lex_ellipsis(start),
                '"' => self.lex_string(start),

                ch if is_name_start(ch) => Ok(self.lex_name(start)),
                ch if ch == '-' || ch.is_ascii_digit() => self.lex_number(start),

                other => Err(SyntaxError::new(
                    format!("unexpected character `{other}`"),
                    start,
                )),
            };
        }
    }

    /// Captures one `#` comment line into the pending doc-comment run.
    ///
    /// The leading `#` and at most one following space are stripped.
    fn lex_comment(&mut self) {
        self.consume_char();
        let rest = self.remaining();
        let line_len = memchr::memchr(b'\n', rest.as_bytes())
            .map(|idx| {
                if idx > 0 && rest.as_bytes()[idx - 1] == b'\r' {
                    idx - 1
                } else {
                    idx
                }
            })
            .unwrap_or(rest.len());
        let text = &rest[..line_len];
        self.byte_offset += line_len;
        self.col += text.chars().count();
        self.pending_doc
            .push(text.strip_prefix(' ').unwrap_or(text).to_string());
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> Result<Token> {
        for _ in 0..3 {
            if self.peek_char() != Some('.') {
                return Err(SyntaxError::new(
                    "expected `...`",
                    self.curr_position(),
                ));
            }
            self.consume_char();
        }
        Ok(self.make_token(TokenKind::Ellipsis, start))
    }

    fn lex_name(&mut self, start: SourcePosition) -> Token {
        let mut name = String::new();
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            name.push(ch);
            self.consume_char();
        }
        self.make_token(TokenKind::Name(name), start)
    }

    fn lex_number(&mut self, start: SourcePosition) -> Result<Token> {
        let mut text = String::new();
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            text.push('-');
            self.consume_char();
        }
        if !self.lex_digits(&mut text) {
            return Err(SyntaxError::new("invalid number literal", start));
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            text.push('.');
            self.consume_char();
            if !self.lex_digits(&mut text) {
                return Err(SyntaxError::new("invalid number literal", start));
            }
        }
        if let Some(ch @ ('e' | 'E')) = self.peek_char() {
            is_float = true;
            text.push(ch);
            self.consume_char();
            if let Some(sign @ ('+' | '-')) = self.peek_char() {
                text.push(sign);
                self.consume_char();
            }
            if !self.lex_digits(&mut text) {
                return Err(SyntaxError::new("invalid number literal", start));
            }
        }

        let kind = if is_float {
            TokenKind::FloatValue(text)
        } else {
            TokenKind::IntValue(text)
        };
        Ok(self.make_token(kind, start))
    }

    /// Appends a run of ASCII digits to `text`; returns whether at least one
    /// digit was present.
    fn lex_digits(&mut self, text: &mut String) -> bool {
        let mut any = false;
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            any = true;
            text.push(ch);
            self.consume_char();
        }
        any
    }

    fn lex_string(&mut self, start: SourcePosition) -> Result<Token> {
        self.consume_char();
        let mut value = String::new();
        loop {
            let ch = match self.peek_char() {
                None => {
                    return Err(SyntaxError::new("unterminated string value", start));
                }
                Some(ch) => ch,
            };
            match ch {
                '"' => {
                    self.consume_char();
                    return Ok(self.make_token(TokenKind::StringValue(value), start));
                }
                '\n' | '\r' => {
                    return Err(SyntaxError::new("unterminated string value", start));
                }
                '\\' => {
                    self.consume_char();
                    value.push(self.lex_escape_sequence()?);
                }
                other => {
                    value.push(other);
                    self.consume_char();
                }
            }
        }
    }

    fn lex_escape_sequence(&mut self) -> Result<char> {
        let loc = self.curr_position();
        let ch = match self.consume_char() {
            None => return Err(SyntaxError::new("unterminated escape sequence", loc)),
            Some(ch) => ch,
        };
        match ch {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000c}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = self
                        .consume_char()
                        .and_then(|ch| ch.to_digit(16))
                        .ok_or_else(|| {
                            SyntaxError::new("invalid unicode escape sequence", loc)
                        })?;
                    code = code * 16 + digit;
                }
                char::from_u32(code).ok_or_else(|| {
                    SyntaxError::new("invalid unicode escape sequence", loc)
                })
            }
            other => Err(SyntaxError::new(
                format!("invalid escape sequence `\\{other}`"),
                loc,
            )),
        }
    }
}
