//! Lexer and recursive descent parsers for GraphQL schema documents and
//! query (executable) documents.
//!
//! Both document surfaces share one lexical grammar; the two top-level
//! productions are exposed as [`parse_schema`] and [`parse_query`]. Output is
//! an unresolved AST (see [`ast`]): type-name references are validated later
//! by the schema linker in `gqlrt-core`.

pub mod ast;
mod diagnostic;
mod lexer;
mod parser;
mod source_position;
mod syntax_error;
mod token;
mod token_kind;

pub use diagnostic::Diagnostic;
pub use diagnostic::DiagnosticKind;
pub use lexer::Lexer;
pub use parser::parse_query;
pub use parser::parse_schema;
pub use parser::Parser;
pub use source_position::SourcePosition;
pub use syntax_error::SyntaxError;
pub use token::Token;
pub use token_kind::TokenKind;

#[cfg(test)]
mod tests;
