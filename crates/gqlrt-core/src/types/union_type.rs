use crate::DefLocation;
use gqlrt_parser::ast::Directive;
use gqlrt_parser::ast::NamedTypeRef;

/// A union type: a value is exactly one of the member object types.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    /// Member references in declaration order. The linker verifies each
    /// names a declared object type.
    pub(crate) members: Vec<NamedTypeRef>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) def_location: DefLocation,
}

impl UnionType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn members(&self) -> &[NamedTypeRef] {
        &self.members
    }

    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|member| member.name.as_str())
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}
