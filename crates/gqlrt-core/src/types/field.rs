use crate::DefLocation;
use gqlrt_parser::ast::Directive;
use gqlrt_parser::ast::InputValueDef;
use gqlrt_parser::ast::TypeRef;
use indexmap::IndexMap;

/// A field defined on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) arguments: IndexMap<String, InputValueDef>,
    pub(crate) field_type: TypeRef,
    pub(crate) directives: Vec<Directive>,
    pub(crate) description: Option<String>,
    pub(crate) def_location: DefLocation,
}

impl Field {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Argument definitions in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, InputValueDef> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValueDef> {
        self.arguments.get(name)
    }

    pub fn field_type(&self) -> &TypeRef {
        &self.field_type
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}
