//! AST node types for schema documents and query documents.
//!
//! Everything here is pure syntax: type-name references are unresolved
//! ([`NamedTypeRef`] carries only a name and a location) until the schema
//! linker validates them against a complete type table.

mod directive;
mod ident;
mod input_value;
mod operation_kind;
mod query_document;
mod schema_document;
mod type_ref;
mod value;
mod value_error;

pub use directive::Argument;
pub use directive::Directive;
pub use ident::Ident;
pub use input_value::InputValueDef;
pub use operation_kind::OperationKind;
pub use query_document::FieldSelection;
pub use query_document::FragmentDefinition;
pub use query_document::FragmentSpread;
pub use query_document::InlineFragment;
pub use query_document::OperationDefinition;
pub use query_document::QueryDocument;
pub use query_document::Selection;
pub use schema_document::Definition;
pub use schema_document::DirectiveDefinition;
pub use schema_document::EnumTypeDefinition;
pub use schema_document::EnumValueDefinition;
pub use schema_document::FieldDefinition;
pub use schema_document::InputObjectTypeDefinition;
pub use schema_document::InterfaceTypeDefinition;
pub use schema_document::ObjectTypeDefinition;
pub use schema_document::RootOperationBinding;
pub use schema_document::ScalarTypeDefinition;
pub use schema_document::SchemaDefinition;
pub use schema_document::SchemaDocument;
pub use schema_document::TypeDefinition;
pub use schema_document::TypeExtension;
pub use schema_document::UnionTypeDefinition;
pub use type_ref::NamedTypeRef;
pub use type_ref::TypeRef;
pub use value::ListValue;
pub use value::ObjectValue;
pub use value::ObjectValueField;
pub use value::ScalarKind;
pub use value::ScalarValue;
pub use value::Value;
pub use value::VariableRef;
pub use value::VariableValues;
pub use value_error::ValueError;
