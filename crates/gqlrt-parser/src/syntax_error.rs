use crate::Diagnostic;
use crate::SourcePosition;
use thiserror::Error;

/// A grammar or token-level violation encountered while lexing or parsing a
/// document.
///
/// Parsing is fail-fast: the first [`SyntaxError`] aborts the parse and no
/// resynchronization is attempted.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message} (at {location})")]
pub struct SyntaxError {
    pub(crate) message: String,
    pub(crate) location: SourcePosition,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, location: SourcePosition) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The single source location at which the violation was detected.
    pub fn location(&self) -> SourcePosition {
        self.location
    }

    /// Converts this error to the uniform structured [`Diagnostic`] form.
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::syntax(self.message.clone(), self.location)
    }
}
