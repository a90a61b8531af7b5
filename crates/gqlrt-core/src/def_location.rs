use gqlrt_parser::SourcePosition;

/// Where a schema element was defined.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DefLocation {
    /// Defined implicitly by the runtime: built-in scalars, built-in
    /// directives, and the introspection meta types.
    BuiltIn,
    /// Defined at a position in schema source supplied by the host.
    Source(SourcePosition),
}

impl DefLocation {
    /// The source position, when the element came from host-supplied source.
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            DefLocation::BuiltIn => None,
            DefLocation::Source(position) => Some(*position),
        }
    }
}
