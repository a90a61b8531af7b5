use crate::DefLocation;
use gqlrt_parser::ast::InputValueDef;
use indexmap::IndexMap;

/// A directive declaration: `directive @name(args) on LOC | LOC`.
///
/// The built-in `@skip`, `@include`, and `@deprecated` directives are
/// injected into every schema that does not declare them itself.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDecl {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    /// Valid usage locations (`FIELD`, `OBJECT`, ...) as written.
    pub(crate) locations: Vec<String>,
    pub(crate) arguments: IndexMap<String, InputValueDef>,
    pub(crate) def_location: DefLocation,
}

impl DirectiveDecl {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDef> {
        &self.arguments
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}
