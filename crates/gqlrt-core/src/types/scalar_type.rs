use crate::DefLocation;
use gqlrt_parser::ast::Directive;

/// A scalar type: a primitive leaf value.
///
/// The five built-in scalars (`Int`, `Float`, `String`, `Boolean`, `ID`) are
/// seeded into every schema with [`DefLocation::BuiltIn`]; custom scalars
/// come from `scalar` declarations.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) def_location: DefLocation,
}

impl ScalarType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == DefLocation::BuiltIn
    }
}
