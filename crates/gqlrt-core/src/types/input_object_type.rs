use crate::DefLocation;
use gqlrt_parser::ast::Directive;
use gqlrt_parser::ast::InputValueDef;
use indexmap::IndexMap;

/// An input object type: a named set of input fields usable as an argument
/// type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputValueDef>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) def_location: DefLocation,
}

impl InputObjectType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Input fields in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputValueDef> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InputValueDef> {
        self.fields.get(name)
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}
