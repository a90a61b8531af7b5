use crate::schema::ConformanceError;
use crate::types::TypeKind;
use gqlrt_parser::ast::OperationKind;
use gqlrt_parser::Diagnostic;
use gqlrt_parser::DiagnosticKind;
use gqlrt_parser::SourcePosition;
use gqlrt_parser::SyntaxError;
use thiserror::Error;

/// Any failure while building a schema. Builds are fail-fast: the first
/// error aborts the build and no partial schema is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(transparent)]
    Conformance(#[from] ConformanceError),

    #[error(
        "The `{type_name}.{field_name}` field defines its `{argument_name}` \
        argument more than once"
    )]
    DuplicateArgumentDefinition {
        type_name: String,
        field_name: String,
        argument_name: String,
        location: SourcePosition,
    },

    #[error(
        "The `@{directive_name}` directive defines its `{argument_name}` \
        argument more than once"
    )]
    DuplicateDirectiveArgumentDefinition {
        directive_name: String,
        argument_name: String,
        location: SourcePosition,
    },

    #[error("The `@{directive_name}` directive is defined more than once")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location: SourcePosition,
    },

    #[error("The `{type_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        type_name: String,
        value_name: String,
        location: SourcePosition,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: SourcePosition,
    },

    #[error(
        "The schema binds its {operation} root operation to `{second_type_name}`, \
        but it is already bound to `{first_type_name}`"
    )]
    DuplicateOperationBinding {
        operation: OperationKind,
        first_type_name: String,
        second_type_name: String,
    },

    #[error("The `{type_name}` type is declared more than once")]
    DuplicateTypeDefinition {
        type_name: String,
        location: SourcePosition,
    },

    #[error("Attempted to extend `{type_name}`, but no such type is declared")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: SourcePosition,
    },

    #[error(
        "Attempted to extend `{type_name}` as {extension_kind}, but it is \
        declared as {declared_kind}"
    )]
    ExtensionKindMismatch {
        type_name: String,
        declared_kind: TypeKind,
        extension_kind: TypeKind,
        location: SourcePosition,
    },

    #[error("No query root operation type is defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "Type names beginning with `__` are reserved for introspection; \
        `{type_name}` cannot be declared"
    )]
    ReservedTypeName {
        type_name: String,
        location: SourcePosition,
    },

    #[error(
        "The schema binds its {operation} root operation to `{type_name}`, \
        which is not an object type"
    )]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_name: String,
        location: Option<SourcePosition>,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(
        "The `{union_name}` union declares `{member_name}` as a member, but \
        `{member_name}` is not an object type"
    )]
    UnionMemberNotObject {
        union_name: String,
        member_name: String,
        location: SourcePosition,
    },

    #[error("Unknown type `{type_name}`")]
    UnknownType {
        type_name: String,
        /// The reference site, not the declaration site.
        location: SourcePosition,
    },
}

impl SchemaBuildError {
    /// The stable rule tag for unknown-type-name resolution failures.
    pub const KNOWN_TYPE_NAMES: &'static str = "KnownTypeNames";

    /// Converts this error to the uniform structured [`Diagnostic`] form.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            SchemaBuildError::Syntax(err) => err.diagnostic(),

            SchemaBuildError::UnknownType { location, .. } => Diagnostic::new(
                DiagnosticKind::TypeResolution,
                self.to_string(),
                vec![*location],
                Some(Self::KNOWN_TYPE_NAMES),
            ),

            SchemaBuildError::Conformance(err) => Diagnostic::new(
                DiagnosticKind::Conformance,
                err.to_string(),
                err.location().into_iter().collect(),
                None,
            ),

            SchemaBuildError::DuplicateArgumentDefinition { location, .. }
            | SchemaBuildError::DuplicateDirectiveArgumentDefinition { location, .. }
            | SchemaBuildError::DuplicateDirectiveDefinition { location, .. }
            | SchemaBuildError::DuplicateEnumValueDefinition { location, .. }
            | SchemaBuildError::DuplicateFieldDefinition { location, .. }
            | SchemaBuildError::DuplicateTypeDefinition { location, .. }
            | SchemaBuildError::ExtensionOfUndefinedType { location, .. }
            | SchemaBuildError::ExtensionKindMismatch { location, .. }
            | SchemaBuildError::ReservedTypeName { location, .. }
            | SchemaBuildError::UnionMemberNotObject { location, .. } => Diagnostic::new(
                DiagnosticKind::Conformance,
                self.to_string(),
                vec![*location],
                None,
            ),

            SchemaBuildError::RootOperationTypeNotObject { location, .. } => {
                Diagnostic::new(
                    DiagnosticKind::Conformance,
                    self.to_string(),
                    location.into_iter().copied().collect(),
                    None,
                )
            }

            SchemaBuildError::DuplicateOperationBinding { .. }
            | SchemaBuildError::NoQueryOperationTypeDefined => Diagnostic::new(
                DiagnosticKind::Conformance,
                self.to_string(),
                vec![],
                None,
            ),
        }
    }
}
