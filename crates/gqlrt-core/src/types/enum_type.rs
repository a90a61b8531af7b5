use crate::DefLocation;
use gqlrt_parser::ast::Directive;

/// An enum type: a closed set of named leaf values.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) values: Vec<EnumValue>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) def_location: DefLocation,
}

impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == name)
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn def_location(&self) -> &DefLocation {
        &self.def_location
    }
}

/// One declared value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<Directive>,
}

impl EnumValue {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }
}
