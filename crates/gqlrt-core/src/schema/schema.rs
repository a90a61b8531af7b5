use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveDecl;
use crate::types::GraphQLType;
use gqlrt_parser::ast::OperationKind;
use gqlrt_parser::ast::TypeRef;
use indexmap::IndexMap;

/// A fully linked, conformance-checked, immutable schema.
///
/// Built once by [`SchemaBuilder`] and frozen; safe for unsynchronized
/// concurrent reads thereafter. Every [`TypeRef`] reachable from this schema
/// is guaranteed to resolve against [`Schema::types`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) root_operation_types: IndexMap<OperationKind, String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
    pub(crate) directives: IndexMap<String, DirectiveDecl>,
}

impl Schema {
    /// Helper that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Builds a schema from a single source string. This is the top-level
    /// entry point for the common case; errors carry the structured
    /// diagnostic form via [`SchemaBuildError::diagnostic`].
    pub fn parse(source: &str) -> Result<Schema, SchemaBuildError> {
        SchemaBuilder::new().load_str(source)?.build()
    }

    /// All declared types, in declaration order (built-ins first), keyed by
    /// name. Includes built-in scalars and the introspection meta types.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// All directive declarations, including injected built-ins
    /// (`@skip`, `@include`, `@deprecated`).
    pub fn directives(&self) -> &IndexMap<String, DirectiveDecl> {
        &self.directives
    }

    pub fn directive_named(&self, name: &str) -> Option<&DirectiveDecl> {
        self.directives.get(name)
    }

    /// Root operation bindings by operation kind. Always contains
    /// [`OperationKind::Query`].
    pub fn root_operation_types(&self) -> &IndexMap<OperationKind, String> {
        &self.root_operation_types
    }

    /// The declared root type for an operation kind.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        let name = self.root_operation_types.get(&kind)?;
        Some(
            self.types
                .get(name)
                .expect("root operation type is present in the type table"),
        )
    }

    /// The query root type. Schemas cannot be built without one.
    pub fn query_type(&self) -> &GraphQLType {
        self.root_operation_type(OperationKind::Query)
            .expect("schema was built with a query root type")
    }

    /// Resolves the innermost named reference of `type_ref` against the type
    /// table. For any reference reachable from this schema the linker has
    /// already guaranteed success.
    pub fn resolve(&self, type_ref: &TypeRef) -> Option<&GraphQLType> {
        self.types.get(type_ref.innermost_named().name.as_str())
    }
}
