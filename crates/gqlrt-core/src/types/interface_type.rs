use crate::types::Field;
use crate::DefLocation;
use gqlrt_parser::ast::Directive;
use indexmap::IndexMap;

/// An interface type: a named set of fields that implementing object types
/// must define.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    /// Names of the object types implementing this interface, computed by
    /// the linker in type-table order.
    pub(crate) possible_types: Vec<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) def_location: DefLocation,
}

impl InterfaceType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The concrete object types implementing this interface.
    pub fn possible_types(&self) -> &[String] {
        &self.possible_types
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}
