//! Synthesis of the introspection meta bindings.
//!
//! The meta object types (`__Schema`, `__Type`, ...) are bound by applying
//! the ordinary field-matching binder to the fixed introspection capability
//! surface, and every bound object then receives the three meta fields:
//! `__typename`, `__schema`, and `__type(name)`. Meta fields are inserted
//! after host fields and cannot be overridden by the host.

use crate::introspection;
use crate::introspection::TypeShape;
use crate::resolvable::binder;
use crate::resolvable::BindError;
use crate::resolvable::BoundField;
use crate::resolvable::BoundSchema;
use crate::resolvable::CapabilityFn;
use crate::resolvable::CapabilitySignature;
use crate::resolvable::FieldError;
use crate::resolvable::HostValue;
use crate::resolvable::ResolveRequest;
use crate::schema::Schema;
use crate::types::Field;
use crate::DefLocation;
use gqlrt_parser::ast::Ident;
use gqlrt_parser::ast::InputValueDef;
use gqlrt_parser::ast::NamedTypeRef;
use gqlrt_parser::ast::TypeRef;
use gqlrt_parser::SourcePosition;
use indexmap::IndexMap;
use std::sync::Arc;

pub(crate) fn synthesize(
    schema: &Arc<Schema>,
    bound: &mut BoundSchema,
) -> Result<(), BindError> {
    let registry = introspection::capability_registry();
    for type_name in introspection::META_OBJECT_TYPE_NAMES {
        let Some(obj) = schema.type_named(type_name).and_then(|ty| ty.as_object())
        else {
            continue;
        };
        let bound_obj =
            binder::bind_object_fields(obj, registry.surface_named(type_name))?;
        bound.objects.insert(type_name.to_string(), bound_obj);
    }

    let object_names: Vec<String> = bound.objects.keys().cloned().collect();
    for type_name in object_names {
        let typename = typename_binding(type_name.as_str());
        let schema_field = schema_binding(schema, type_name.as_str());
        let type_field = type_binding(schema, type_name.as_str());
        if let Some(obj) = bound.objects.get_mut(type_name.as_str()) {
            obj.fields.insert("__typename".to_string(), typename);
            obj.fields.insert("__schema".to_string(), schema_field);
            obj.fields.insert("__type".to_string(), type_field);
        }
    }
    Ok(())
}

/// A position for fields that exist in no source document.
fn synthetic_position() -> SourcePosition {
    SourcePosition::new(0, 0)
}

fn named_type_ref(name: &str) -> TypeRef {
    TypeRef::Named(NamedTypeRef {
        name: name.to_string(),
        location: synthetic_position(),
    })
}

fn meta_field_def(name: &str, field_type: TypeRef) -> Field {
    Field {
        name: name.to_string(),
        arguments: IndexMap::new(),
        field_type,
        directives: vec![],
        description: None,
        def_location: DefLocation::BuiltIn,
    }
}

fn meta_binding(field: Field, declaring_type: &str, callable: CapabilityFn) -> BoundField {
    BoundField {
        trace_label: format!("GraphQL field: {}.{}", declaring_type, field.name()),
        declaring_type: declaring_type.to_string(),
        signature: CapabilitySignature::default(),
        callable,
        field,
    }
}

/// `__typename: String!` — the dynamic, concrete type name of the resolved
/// value. For an object value this is the value's own type name, so it can
/// never report an interface or union name.
fn typename_binding(declaring_type: &str) -> BoundField {
    let fallback = declaring_type.to_string();
    let callable: CapabilityFn = Arc::new(move |req: ResolveRequest<'_>| {
        let concrete = match req.parent.type_name() {
            Some(name) => name.to_string(),
            None => fallback.clone(),
        };
        Ok(HostValue::leaf(concrete))
    });
    meta_binding(
        meta_field_def(
            "__typename",
            TypeRef::NonNull(Box::new(named_type_ref("String"))),
        ),
        declaring_type,
        callable,
    )
}

/// `__schema: __Schema` — introspection over the whole schema.
fn schema_binding(schema: &Arc<Schema>, declaring_type: &str) -> BoundField {
    let schema = Arc::clone(schema);
    let callable: CapabilityFn = Arc::new(move |_req: ResolveRequest<'_>| {
        Ok(introspection::schema_value(&schema))
    });
    meta_binding(
        meta_field_def("__schema", named_type_ref("__Schema")),
        declaring_type,
        callable,
    )
}

/// `__type(name: String!): __Type` — introspection over one named type.
fn type_binding(schema: &Arc<Schema>, declaring_type: &str) -> BoundField {
    let schema_for_call = Arc::clone(schema);
    let callable: CapabilityFn = Arc::new(move |req: ResolveRequest<'_>| {
        let name = req.args.require("name")?;
        let Some(name) = name.as_str() else {
            return Err(FieldError::new("argument `name` must be a string"));
        };
        if schema_for_call.type_named(name).is_some() {
            Ok(introspection::type_value(
                &schema_for_call,
                TypeShape::Named(name.to_string()),
            ))
        } else {
            Ok(HostValue::Null)
        }
    });

    let mut field = meta_field_def("__type", named_type_ref("__Type"));
    field.arguments.insert("name".to_string(), InputValueDef {
        name: Ident {
            name: "name".to_string(),
            location: synthetic_position(),
        },
        value_type: TypeRef::NonNull(Box::new(named_type_ref("String"))),
        default_value: None,
        directives: vec![],
        description: None,
        location: synthetic_position(),
        type_location: synthetic_position(),
    });
    meta_binding(field, declaring_type, callable)
}
