use crate::SourcePosition;
use thiserror::Error;

/// Failure to materialize a [`Value`](crate::ast::Value) to a runtime value.
///
/// Lookups that could not be satisfied are explicit errors at this boundary;
/// none of them are fatal to the process.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("numeric literal `{text}` is out of range")]
    MalformedNumber {
        text: String,
        location: SourcePosition,
    },

    #[error("variable `${name}` is not defined")]
    UndefinedVariable {
        name: String,
        location: SourcePosition,
    },

    #[error("variable `${name}` is not allowed in a constant value")]
    VariableInConstValue {
        name: String,
        location: SourcePosition,
    },
}

impl ValueError {
    pub fn location(&self) -> SourcePosition {
        match self {
            ValueError::MalformedNumber { location, .. }
            | ValueError::UndefinedVariable { location, .. }
            | ValueError::VariableInConstValue { location, .. } => *location,
        }
    }
}
