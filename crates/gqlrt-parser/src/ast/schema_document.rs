use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::InputValueDef;
use crate::ast::NamedTypeRef;
use crate::ast::OperationKind;
use crate::ast::TypeRef;
use crate::SourcePosition;

/// A parsed schema document: the flat sequence of definitions as written,
/// unresolved and unmerged. The schema builder collects these into a symbol
/// table and links them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDocument {
    pub definitions: Vec<Definition>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    /// A `schema { ... }` block binding root operation types.
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    /// An `extend ...` declaration; application is deferred until every
    /// declaration has been collected.
    TypeExtension(TypeExtension),
    Directive(DirectiveDefinition),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub root_operations: Vec<RootOperationBinding>,
    pub directives: Vec<Directive>,
    pub location: SourcePosition,
}

/// One `query: TypeName` style entry of a `schema { ... }` block.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RootOperationBinding {
    pub operation: OperationKind,
    pub type_name: NamedTypeRef,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(def) => def.name.name.as_str(),
            TypeDefinition::Object(def) => def.name.name.as_str(),
            TypeDefinition::Interface(def) => def.name.name.as_str(),
            TypeDefinition::Union(def) => def.name.name.as_str(),
            TypeDefinition::Enum(def) => def.name.name.as_str(),
            TypeDefinition::InputObject(def) => def.name.name.as_str(),
        }
    }

    pub fn location(&self) -> SourcePosition {
        match self {
            TypeDefinition::Scalar(def) => def.location,
            TypeDefinition::Object(def) => def.location,
            TypeDefinition::Interface(def) => def.location,
            TypeDefinition::Union(def) => def.location,
            TypeDefinition::Enum(def) => def.location,
            TypeDefinition::InputObject(def) => def.location,
        }
    }

    /// The declaration keyword (`"type"`, `"enum"`, ...), for error messages.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDefinition::Scalar(_) => "scalar",
            TypeDefinition::Object(_) => "type",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Union(_) => "union",
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub name: Ident,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub name: Ident,
    pub interfaces: Vec<NamedTypeRef>,
    pub fields: Vec<FieldDefinition>,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub name: Ident,
    pub fields: Vec<FieldDefinition>,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub name: Ident,
    pub members: Vec<NamedTypeRef>,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub name: Ident,
    pub values: Vec<EnumValueDefinition>,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub name: Ident,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub name: Ident,
    pub fields: Vec<InputValueDef>,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

/// A field definition on an object or interface type:
/// `name(args): Type directives*`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub name: Ident,
    pub arguments: Vec<InputValueDef>,
    pub field_type: TypeRef,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
}

/// An `extend` declaration. The payload reuses the per-kind definition
/// shapes; the builder merges it into the target declaration after all
/// declarations are collected, so an extension may precede its target in
/// source.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExtension {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub name: Ident,
    pub arguments: Vec<InputValueDef>,
    /// Directive locations (`FIELD`, `OBJECT`, ...) as written.
    pub locations: Vec<String>,
    pub description: Option<String>,
    pub location: SourcePosition,
}
