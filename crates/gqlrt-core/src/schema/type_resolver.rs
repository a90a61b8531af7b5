//! The linking pass: resolves every named type reference against the
//! complete type table, and the conformance pass that follows it.
//!
//! Resolution is a table lookup keyed by name, so self-referential and
//! mutually-referential type graphs link in one pass with no
//! construction-order recursion. An unknown name fails the build with the
//! referenced name and the reference-site location, tagged with the
//! `KnownTypeNames` rule.

use crate::schema::ConformanceError;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveDecl;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use gqlrt_parser::ast::NamedTypeRef;
use gqlrt_parser::ast::OperationKind;
use gqlrt_parser::ast::TypeRef;
use gqlrt_parser::SourcePosition;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Walks every named reference reachable from field definitions, argument
/// definitions, union member lists, interface-implements lists,
/// directive-definition arguments, and root operation bindings.
///
/// Returns the computed interface possible-types map
/// (interface name → implementing object names, in type-table order).
pub(crate) fn link<'a>(
    types: &IndexMap<String, GraphQLType>,
    directives: &IndexMap<String, DirectiveDecl>,
    root_bindings: impl Iterator<Item = (OperationKind, &'a str, SourcePosition)>,
) -> Result<IndexMap<String, Vec<String>>> {
    let mut possible_types: IndexMap<String, Vec<String>> = IndexMap::new();

    for schema_type in types.values() {
        match schema_type {
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) => {}

            GraphQLType::Object(obj) => {
                for field in obj.fields.values() {
                    check_field(types, field)?;
                }
                for iface_ref in &obj.interfaces {
                    match lookup(types, iface_ref)? {
                        GraphQLType::Interface(_) => {
                            possible_types
                                .entry(iface_ref.name.clone())
                                .or_default()
                                .push(obj.name.clone());
                        }
                        _ => {
                            return Err(ConformanceError::ImplementsNonInterface {
                                type_name: obj.name.clone(),
                                target_name: iface_ref.name.clone(),
                                location: Some(iface_ref.location),
                            }
                            .into());
                        }
                    }
                }
            }

            GraphQLType::Interface(iface) => {
                for field in iface.fields.values() {
                    check_field(types, field)?;
                }
            }

            GraphQLType::Union(union_type) => {
                for member in &union_type.members {
                    if !matches!(lookup(types, member)?, GraphQLType::Object(_)) {
                        return Err(SchemaBuildError::UnionMemberNotObject {
                            union_name: union_type.name.clone(),
                            member_name: member.name.clone(),
                            location: member.location,
                        });
                    }
                }
            }

            GraphQLType::InputObject(input_type) => {
                for field in input_type.fields.values() {
                    check_type_ref(types, &field.value_type)?;
                }
            }
        }
    }

    for decl in directives.values() {
        for arg in decl.arguments.values() {
            check_type_ref(types, &arg.value_type)?;
        }
    }

    for (operation, type_name, location) in root_bindings {
        match types.get(type_name) {
            None => {
                return Err(SchemaBuildError::UnknownType {
                    type_name: type_name.to_string(),
                    location,
                });
            }
            Some(GraphQLType::Object(_)) => {}
            Some(_) => {
                return Err(SchemaBuildError::RootOperationTypeNotObject {
                    operation,
                    type_name: type_name.to_string(),
                    location: Some(location),
                });
            }
        }
    }

    Ok(possible_types)
}

fn check_field(types: &IndexMap<String, GraphQLType>, field: &Field) -> Result<()> {
    check_type_ref(types, &field.field_type)?;
    for arg in field.arguments.values() {
        check_type_ref(types, &arg.value_type)?;
    }
    Ok(())
}

/// Follows list/non-null nesting down to the named reference and resolves it
/// by table lookup.
fn check_type_ref(types: &IndexMap<String, GraphQLType>, type_ref: &TypeRef) -> Result<()> {
    match type_ref {
        TypeRef::List(inner) | TypeRef::NonNull(inner) => check_type_ref(types, inner),
        TypeRef::Named(named) => lookup(types, named).map(|_| ()),
    }
}

fn lookup<'t>(
    types: &'t IndexMap<String, GraphQLType>,
    named: &NamedTypeRef,
) -> Result<&'t GraphQLType> {
    types
        .get(named.name.as_str())
        .ok_or_else(|| SchemaBuildError::UnknownType {
            type_name: named.name.clone(),
            location: named.location,
        })
}

/// Verifies that every object type defines a superset of each implemented
/// interface's fields, with matching field types and matching argument
/// types. Runs after [`link`], so implements-lists are known to name
/// interface types.
pub(crate) fn check_conformance(types: &IndexMap<String, GraphQLType>) -> Result<()> {
    for schema_type in types.values() {
        let GraphQLType::Object(obj) = schema_type else {
            continue;
        };
        for iface_ref in &obj.interfaces {
            let Some(GraphQLType::Interface(iface)) = types.get(iface_ref.name.as_str())
            else {
                continue;
            };
            check_object_conforms(obj, iface)?;
        }
    }
    Ok(())
}

fn check_object_conforms(
    obj: &ObjectType,
    iface: &InterfaceType,
) -> std::result::Result<(), ConformanceError> {
    for (field_name, iface_field) in iface.fields() {
        let Some(obj_field) = obj.fields.get(field_name.as_str()) else {
            return Err(ConformanceError::MissingField {
                type_name: obj.name.clone(),
                interface_name: iface.name.clone(),
                field_name: field_name.clone(),
                location: obj.def_location.position(),
            });
        };

        if !obj_field.field_type.is_equivalent_to(&iface_field.field_type) {
            return Err(ConformanceError::FieldTypeMismatch {
                type_name: obj.name.clone(),
                interface_name: iface.name.clone(),
                field_name: field_name.clone(),
                expected: iface_field.field_type.clone(),
                actual: obj_field.field_type.clone(),
                location: obj_field.def_location.position(),
            });
        }

        for (arg_name, iface_arg) in iface_field.arguments() {
            let Some(obj_arg) = obj_field.arguments.get(arg_name.as_str()) else {
                return Err(ConformanceError::MissingFieldArgument {
                    type_name: obj.name.clone(),
                    interface_name: iface.name.clone(),
                    field_name: field_name.clone(),
                    argument_name: arg_name.clone(),
                    location: obj_field.def_location.position(),
                });
            };
            if !obj_arg.value_type.is_equivalent_to(&iface_arg.value_type) {
                return Err(ConformanceError::ArgumentTypeMismatch {
                    type_name: obj.name.clone(),
                    interface_name: iface.name.clone(),
                    field_name: field_name.clone(),
                    argument_name: arg_name.clone(),
                    expected: iface_arg.value_type.clone(),
                    actual: obj_arg.value_type.clone(),
                    location: Some(obj_arg.type_location),
                });
            }
        }
    }
    Ok(())
}
