//! The resolved type graph: one struct per declared-type kind, keyed by name
//! in the schema's type table.
//!
//! Type references inside these structs stay name-keyed
//! ([`gqlrt_parser::ast::TypeRef`]); the linker guarantees every reachable
//! reference resolves against the frozen table, which is what lets
//! self-referential and mutually-referential type graphs exist without
//! ownership cycles.

mod directive_decl;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod interface_type;
mod object_type;
mod scalar_type;
mod type_kind;
mod union_type;

pub use directive_decl::DirectiveDecl;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_kind::TypeKind;
pub use union_type::UnionType;
