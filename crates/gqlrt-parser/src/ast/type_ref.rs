use crate::SourcePosition;

/// An unresolved reference to a type, as written in source.
///
/// A `TypeRef` is produced without consulting any symbol table; the schema
/// linker later validates that every reachable [`NamedTypeRef`] names a
/// declared type. List/non-null wrapper nesting is preserved exactly.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    Named(NamedTypeRef),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

/// A reference to a type by name, carrying the reference-site location for
/// diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeRef {
    pub name: String,
    pub location: SourcePosition,
}

impl TypeRef {
    /// Recursively unwraps list/non-null wrappers down to the innermost named
    /// reference.
    pub fn innermost_named(&self) -> &NamedTypeRef {
        match self {
            TypeRef::Named(named) => named,
            TypeRef::List(of_type) | TypeRef::NonNull(of_type) => {
                of_type.innermost_named()
            }
        }
    }

    /// The reference-site location (of the innermost named reference).
    pub fn location(&self) -> SourcePosition {
        self.innermost_named().location
    }

    /// Whether a value of this type may be null at this nesting level.
    pub fn nullable(&self) -> bool {
        !matches!(self, TypeRef::NonNull(_))
    }

    /// Structural equality ignoring source locations: same wrapper nesting,
    /// same innermost name.
    pub fn is_equivalent_to(&self, other: &TypeRef) -> bool {
        match (self, other) {
            (TypeRef::Named(a), TypeRef::Named(b)) => a.name == b.name,
            (TypeRef::List(a), TypeRef::List(b)) => a.is_equivalent_to(b),
            (TypeRef::NonNull(a), TypeRef::NonNull(b)) => a.is_equivalent_to(b),
            _ => false,
        }
    }
}

impl std::fmt::Display for TypeRef {
    /// Prints the canonical source form: `Name`, `[Inner]`, `Inner!`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named(named) => write!(f, "{}", named.name),
            TypeRef::List(of_type) => write!(f, "[{of_type}]"),
            TypeRef::NonNull(of_type) => write!(f, "{of_type}!"),
        }
    }
}
