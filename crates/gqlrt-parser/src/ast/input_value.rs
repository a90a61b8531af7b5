use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::SourcePosition;

/// An input-value definition: `name: Type [= default] directives*`.
///
/// This one shape serves every typed-input position in both grammars: field
/// arguments, input-object fields, directive-definition arguments, and
/// operation variable definitions (where `name` is the variable name without
/// the `$` sigil).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDef {
    pub name: Ident,
    pub value_type: TypeRef,
    /// Parsed in constant mode; defaults can never reference variables.
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub description: Option<String>,
    pub location: SourcePosition,
    /// Location of the type annotation, distinct from the definition's own
    /// location for type-resolution diagnostics.
    pub type_location: SourcePosition,
}
