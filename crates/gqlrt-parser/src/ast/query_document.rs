use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::InputValueDef;
use crate::ast::NamedTypeRef;
use crate::ast::OperationKind;
use crate::SourcePosition;

/// A parsed executable document: operations plus fragment declarations.
///
/// Selection trees are pure syntax; schema-aware validation (field existence,
/// fragment type applicability) belongs to the consumer.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct QueryDocument {
    pub operations: Vec<OperationDefinition>,
    pub fragments: Vec<FragmentDefinition>,
}

impl QueryDocument {
    /// Looks up a named operation.
    pub fn operation(&self, name: &str) -> Option<&OperationDefinition> {
        self.operations.iter().find(|op| {
            op.name.as_ref().is_some_and(|ident| ident.name == name)
        })
    }

    /// Looks up a named fragment declaration.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|frag| frag.name.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    /// `None` for an anonymous operation (including a bare `{...}` query).
    pub name: Option<Ident>,
    /// `$name: Type [= default]` entries; names stored without the sigil.
    pub variable_definitions: Vec<InputValueDef>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragment),
    FragmentSpread(FragmentSpread),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldSelection {
    pub alias: Option<Ident>,
    pub name: Ident,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    /// Empty for leaf fields.
    pub selection_set: Vec<Selection>,
    pub location: SourcePosition,
}

impl FieldSelection {
    /// The key this field's value appears under in a response: the alias
    /// when one is given, the field name otherwise.
    pub fn response_key(&self) -> &str {
        match &self.alias {
            Some(alias) => alias.name.as_str(),
            None => self.name.name.as_str(),
        }
    }

    /// Looks up an argument value by name.
    pub fn argument(&self, name: &str) -> Option<&crate::ast::Value> {
        self.arguments
            .iter()
            .find(|arg| arg.name.name == name)
            .map(|arg| &arg.value)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    /// `...on TypeName` carries a type condition; a bare `... { ... }` does
    /// not.
    pub type_condition: Option<NamedTypeRef>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub name: Ident,
    pub directives: Vec<Directive>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: Ident,
    pub type_condition: NamedTypeRef,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: SourcePosition,
}
