use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;
use crate::DefLocation;
use indexmap::IndexMap;

/// A declared type, one of the six named-type kinds.
///
/// Variants are matched exhaustively wherever a kind distinction matters, so
/// adding a kind is a compile-time-checked change.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Scalar(ty) => ty.name(),
            GraphQLType::Object(ty) => ty.name(),
            GraphQLType::Interface(ty) => ty.name(),
            GraphQLType::Union(ty) => ty.name(),
            GraphQLType::Enum(ty) => ty.name(),
            GraphQLType::InputObject(ty) => ty.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Scalar(ty) => ty.description(),
            GraphQLType::Object(ty) => ty.description(),
            GraphQLType::Interface(ty) => ty.description(),
            GraphQLType::Union(ty) => ty.description(),
            GraphQLType::Enum(ty) => ty.description(),
            GraphQLType::InputObject(ty) => ty.description(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            GraphQLType::Scalar(_) => TypeKind::Scalar,
            GraphQLType::Object(_) => TypeKind::Object,
            GraphQLType::Interface(_) => TypeKind::Interface,
            GraphQLType::Union(_) => TypeKind::Union,
            GraphQLType::Enum(_) => TypeKind::Enum,
            GraphQLType::InputObject(_) => TypeKind::InputObject,
        }
    }

    pub fn def_location(&self) -> &DefLocation {
        match self {
            GraphQLType::Scalar(ty) => ty.def_location(),
            GraphQLType::Object(ty) => ty.def_location(),
            GraphQLType::Interface(ty) => ty.def_location(),
            GraphQLType::Union(ty) => ty.def_location(),
            GraphQLType::Enum(ty) => ty.def_location(),
            GraphQLType::InputObject(ty) => ty.def_location(),
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            GraphQLType::Object(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            GraphQLType::Interface(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            GraphQLType::Union(ty) => Some(ty),
            _ => None,
        }
    }

    /// The field map, for the two kinds that define output fields.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Object(ty) => Some(ty.fields()),
            GraphQLType::Interface(ty) => Some(ty.fields()),
            _ => None,
        }
    }

    /// Whether this type may appear in input positions (argument and
    /// input-field annotations).
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) | GraphQLType::InputObject(_),
        )
    }

    /// Whether this type may appear in output positions (field result
    /// annotations).
    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }
}
