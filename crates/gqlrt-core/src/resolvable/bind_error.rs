use gqlrt_parser::ast::OperationKind;
use gqlrt_parser::Diagnostic;
use gqlrt_parser::DiagnosticKind;
use gqlrt_parser::SourcePosition;
use thiserror::Error;

/// A host/schema mismatch detected while binding.
///
/// Binding happens once at startup; every variant is fatal to the build (a
/// required field with no capability is never skipped per-field), and a host
/// may reasonably treat it as fatal to the process.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BindError {
    #[error(
        "No host capability matches the `{field_name}` field on type \
        `{type_name}`"
    )]
    MissingCapability {
        type_name: String,
        field_name: String,
        location: Option<SourcePosition>,
    },

    #[error(
        "The schema declares a {operation} root operation, but no root value \
        was supplied for it"
    )]
    MissingRootValue { operation: OperationKind },

    #[error(
        "No capability surface is registered for the reachable object type \
        `{type_name}`"
    )]
    MissingSurface { type_name: String },

    #[error(
        "The {operation} root value has concrete type `{actual}`, but the \
        schema's {operation} root type is `{expected}`"
    )]
    RootValueTypeMismatch {
        operation: OperationKind,
        expected: String,
        actual: String,
    },

    #[error("The {operation} root value must be an object value")]
    RootValueNotObject { operation: OperationKind },
}

impl BindError {
    /// Converts this error to the uniform structured [`Diagnostic`] form.
    pub fn diagnostic(&self) -> Diagnostic {
        let locations = match self {
            BindError::MissingCapability { location, .. } => {
                location.into_iter().copied().collect()
            }
            _ => vec![],
        };
        Diagnostic::new(DiagnosticKind::Binding, self.to_string(), locations, None)
    }
}
