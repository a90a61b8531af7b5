use gqlrt_parser::ast::TypeRef;
use gqlrt_parser::SourcePosition;
use thiserror::Error;

/// An object type failed to structurally conform to an interface it declares
/// it implements.
///
/// Conformance is checked after linking, over the complete type table: an
/// implementing type must define a superset of the interface's fields, with
/// matching field types and matching argument types.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConformanceError {
    #[error(
        "The `{type_name}.{field_name}` field declares its `{argument_name}` \
        argument as `{actual}`, but `{interface_name}.{field_name}` declares \
        it as `{expected}`"
    )]
    ArgumentTypeMismatch {
        type_name: String,
        interface_name: String,
        field_name: String,
        argument_name: String,
        expected: TypeRef,
        actual: TypeRef,
        location: Option<SourcePosition>,
    },

    #[error(
        "The `{type_name}.{field_name}` field is declared as `{actual}`, \
        which does not match `{interface_name}.{field_name}` declared as \
        `{expected}`"
    )]
    FieldTypeMismatch {
        type_name: String,
        interface_name: String,
        field_name: String,
        expected: TypeRef,
        actual: TypeRef,
        location: Option<SourcePosition>,
    },

    #[error(
        "The `{type_name}` type declares that it implements `{target_name}`, \
        but `{target_name}` is not an interface type"
    )]
    ImplementsNonInterface {
        type_name: String,
        target_name: String,
        location: Option<SourcePosition>,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        but does not define a field named `{field_name}`"
    )]
    MissingField {
        type_name: String,
        interface_name: String,
        field_name: String,
        location: Option<SourcePosition>,
    },

    #[error(
        "The `{type_name}.{field_name}` field is missing the \
        `{argument_name}` argument required by `{interface_name}.{field_name}`"
    )]
    MissingFieldArgument {
        type_name: String,
        interface_name: String,
        field_name: String,
        argument_name: String,
        location: Option<SourcePosition>,
    },
}

impl ConformanceError {
    /// The declaration-site location, when the declaration came from source.
    pub fn location(&self) -> Option<SourcePosition> {
        match self {
            ConformanceError::ArgumentTypeMismatch { location, .. }
            | ConformanceError::FieldTypeMismatch { location, .. }
            | ConformanceError::ImplementsNonInterface { location, .. }
            | ConformanceError::MissingField { location, .. }
            | ConformanceError::MissingFieldArgument { location, .. } => *location,
        }
    }
}
