//! Tests for the shared lexer.

use crate::Lexer;
use crate::SourcePosition;
use crate::TokenKind;

/// Lexes the whole source into a vec of token kinds (excluding EOF).
fn lex_kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source);
    let mut kinds = vec![];
    loop {
        let token = lexer.next().expect("source lexes cleanly");
        if token.kind == TokenKind::Eof {
            return kinds;
        }
        kinds.push(token.kind);
    }
}

#[test]
fn punctuators() {
    assert_eq!(lex_kinds("! $ & ( ) : = @ [ ] { } | ..."), vec![
        TokenKind::Bang,
        TokenKind::Dollar,
        TokenKind::Ampersand,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Colon,
        TokenKind::Equals,
        TokenKind::At,
        TokenKind::SquareBracketOpen,
        TokenKind::SquareBracketClose,
        TokenKind::CurlyBraceOpen,
        TokenKind::CurlyBraceClose,
        TokenKind::Pipe,
        TokenKind::Ellipsis,
    ]);
}

#[test]
fn names_and_keyword_likes() {
    assert_eq!(lex_kinds("query _private x2 null"), vec![
        TokenKind::Name("query".to_string()),
        TokenKind::Name("_private".to_string()),
        TokenKind::Name("x2".to_string()),
        TokenKind::Name("null".to_string()),
    ]);
}

#[test]
fn numbers() {
    assert_eq!(lex_kinds("0 -123 1.5 -1.23e-4 3E8"), vec![
        TokenKind::IntValue("0".to_string()),
        TokenKind::IntValue("-123".to_string()),
        TokenKind::FloatValue("1.5".to_string()),
        TokenKind::FloatValue("-1.23e-4".to_string()),
        TokenKind::FloatValue("3E8".to_string()),
    ]);
}

#[test]
fn strings_unescape() {
    assert_eq!(lex_kinds(r#""hello" "a\"b" "tab\there" "A""#), vec![
        TokenKind::StringValue("hello".to_string()),
        TokenKind::StringValue("a\"b".to_string()),
        TokenKind::StringValue("tab\there".to_string()),
        TokenKind::StringValue("A".to_string()),
    ]);
}

#[test]
fn commas_are_whitespace() {
    assert_eq!(lex_kinds("a, b,,c"), vec![
        TokenKind::Name("a".to_string()),
        TokenKind::Name("b".to_string()),
        TokenKind::Name("c".to_string()),
    ]);
}

#[test]
fn token_locations_are_one_based() {
    let mut lexer = Lexer::new("foo\n  bar");
    let foo = lexer.next().unwrap();
    assert_eq!(foo.location, SourcePosition::new(1, 1));
    let bar = lexer.next().unwrap();
    assert_eq!(bar.location, SourcePosition::new(2, 3));
}

#[test]
fn crlf_counts_as_one_newline() {
    let mut lexer = Lexer::new("a\r\nb\rc");
    lexer.next().unwrap();
    assert_eq!(lexer.next().unwrap().location, SourcePosition::new(2, 1));
    assert_eq!(lexer.next().unwrap().location, SourcePosition::new(3, 1));
}

/// A contiguous `#` comment run becomes the next token's doc comment, with
/// the `#` and one leading space stripped from each line.
#[test]
fn comment_run_attaches_to_next_token() {
    let mut lexer = Lexer::new(concat!(
        "# A user of the system.\n",
        "# Second line.\n",
        "type",
    ));
    let token = lexer.next().unwrap();
    assert_eq!(token.kind, TokenKind::Name("type".to_string()));
    assert_eq!(
        token.doc_comment.as_deref(),
        Some("A user of the system.\nSecond line."),
    );
}

/// A blank line ends a comment run; only the contiguous run immediately
/// preceding the token becomes its doc comment.
#[test]
fn blank_line_breaks_comment_run() {
    let mut lexer = Lexer::new(concat!(
        "# Stale paragraph.\n",
        "\n",
        "# Attached line.\n",
        "type",
    ));
    let token = lexer.next().unwrap();
    assert_eq!(token.doc_comment.as_deref(), Some("Attached line."));

    let mut lexer = Lexer::new("# Orphaned.\n\ntype");
    let token = lexer.next().unwrap();
    assert_eq!(token.doc_comment, None);
}

#[test]
fn comment_is_not_a_token() {
    assert_eq!(lex_kinds("a # trailing comment\nb"), vec![
        TokenKind::Name("a".to_string()),
        TokenKind::Name("b".to_string()),
    ]);
}

#[test]
fn unterminated_string_fails() {
    let mut lexer = Lexer::new("\"oops");
    let err = lexer.next().unwrap_err();
    assert_eq!(err.message(), "unterminated string value");
    assert_eq!(err.location(), SourcePosition::new(1, 1));
}

#[test]
fn unexpected_character_fails_with_location() {
    let mut lexer = Lexer::new("a ?");
    lexer.next().unwrap();
    let err = lexer.next().unwrap_err();
    assert_eq!(err.message(), "unexpected character `?`");
    assert_eq!(err.location(), SourcePosition::new(1, 3));
}

#[test]
fn lone_dot_fails() {
    let mut lexer = Lexer::new(".. x");
    let err = lexer.next().unwrap_err();
    assert_eq!(err.message(), "expected `...`");
}

#[test]
fn expect_mismatch_reports_both_kinds() {
    let mut lexer = Lexer::new("name");
    let err = lexer.expect(&TokenKind::Colon).unwrap_err();
    assert_eq!(err.message(), "expected `:`, found `name`");
}

#[test]
fn eof_is_sticky() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next().unwrap().kind, TokenKind::Eof);
}
