use crate::types::Field;
use crate::DefLocation;
use gqlrt_parser::ast::Directive;
use gqlrt_parser::ast::NamedTypeRef;
use indexmap::IndexMap;

/// An object type: a named set of output fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    /// Interfaces this object declares it implements, by name. The linker
    /// verifies each names a declared interface type and that this object
    /// conforms to it.
    pub(crate) interfaces: Vec<NamedTypeRef>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) def_location: DefLocation,
}

impl ObjectType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn interfaces(&self) -> &[NamedTypeRef] {
        &self.interfaces
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}
