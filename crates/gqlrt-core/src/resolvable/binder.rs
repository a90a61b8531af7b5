//! The binding pass: a single name-matching walk over every object type
//! reachable from the schema's root operation types.

use crate::resolvable::meta;
use crate::resolvable::BindError;
use crate::resolvable::BoundField;
use crate::resolvable::BoundObject;
use crate::resolvable::BoundSchema;
use crate::resolvable::CapabilityRegistry;
use crate::resolvable::CapabilitySurface;
use crate::resolvable::HostValue;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use gqlrt_parser::ast::OperationKind;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::Arc;

type Result<T> = std::result::Result<T, BindError>;

/// The host-supplied root values, one per root operation kind the schema
/// declares. This is the collaborator contract with the host: the query root
/// is always required, the others only when the schema declares them.
#[derive(Debug)]
pub struct RootValues {
    pub query: HostValue,
    pub mutation: Option<HostValue>,
    pub subscription: Option<HostValue>,
}

impl RootValues {
    pub fn query(value: HostValue) -> Self {
        Self {
            query: value,
            mutation: None,
            subscription: None,
        }
    }

    pub fn with_mutation(mut self, value: HostValue) -> Self {
        self.mutation = Some(value);
        self
    }

    pub fn with_subscription(mut self, value: HostValue) -> Self {
        self.subscription = Some(value);
        self
    }
}

/// Binds a linked schema against the host's capability registry and root
/// values, producing an executable [`BoundSchema`].
///
/// Every schema field on a reachable object type must match a registered
/// capability by normalized name; a miss is a fatal [`BindError`], not a
/// per-field skip. The introspection meta fields (`__typename`, `__schema`,
/// `__type`) are synthesized afterwards on every bound object and are not
/// host-overridable.
pub fn bind(
    schema: &Arc<Schema>,
    registry: &CapabilityRegistry,
    roots: RootValues,
) -> Result<BoundSchema> {
    let mut objects = IndexMap::new();
    let mut interfaces = IndexMap::new();

    let mut queue: VecDeque<String> = schema
        .root_operation_types()
        .values()
        .cloned()
        .collect();
    let mut visited: HashSet<String> = HashSet::new();

    while let Some(type_name) = queue.pop_front() {
        if !visited.insert(type_name.clone()) {
            continue;
        }
        let Some(schema_type) = schema.type_named(type_name.as_str()) else {
            continue;
        };
        match schema_type {
            GraphQLType::Object(obj) => {
                enqueue_field_types(obj.fields(), &mut queue);
                for iface_ref in obj.interfaces() {
                    queue.push_back(iface_ref.name.clone());
                }
                // Meta objects are bound against the introspection surface
                // during synthesis, not the host registry.
                if !obj.name().starts_with("__") {
                    let surface = registry.surface_named(obj.name());
                    objects.insert(obj.name().to_string(), bind_object_fields(obj, surface)?);
                }
            }

            GraphQLType::Interface(iface) => {
                enqueue_field_types(iface.fields(), &mut queue);
                for possible in iface.possible_types() {
                    queue.push_back(possible.clone());
                }
                interfaces
                    .insert(iface.name().to_string(), iface.possible_types().to_vec());
            }

            GraphQLType::Union(union_type) => {
                for member in union_type.members() {
                    queue.push_back(member.name.clone());
                }
            }

            GraphQLType::Scalar(_) | GraphQLType::Enum(_) | GraphQLType::InputObject(_) => {}
        }
    }

    let root_values = check_root_values(schema, roots)?;

    let mut bound = BoundSchema {
        schema: Arc::clone(schema),
        objects,
        interfaces,
        root_values,
    };
    meta::synthesize(schema, &mut bound)?;

    log::debug!(
        "bound {} object type(s) and {} interface(s)",
        bound.objects.len(),
        bound.interfaces.len(),
    );
    Ok(bound)
}

fn enqueue_field_types(
    fields: &IndexMap<String, Field>,
    queue: &mut VecDeque<String>,
) {
    for field in fields.values() {
        queue.push_back(field.field_type().innermost_named().name.clone());
    }
}

/// Matches each of `obj`'s schema fields against `surface` by normalized
/// name. Shared between host-type binding and introspection meta-type
/// binding — the meta types go through exactly this path.
pub(crate) fn bind_object_fields(
    obj: &ObjectType,
    surface: Option<&CapabilitySurface>,
) -> Result<BoundObject> {
    let mut fields = IndexMap::new();
    for (field_name, field) in obj.fields() {
        let Some(capability) = surface.and_then(|surface| surface.find(field_name)) else {
            if surface.is_none() {
                return Err(BindError::MissingSurface {
                    type_name: obj.name().to_string(),
                });
            }
            return Err(BindError::MissingCapability {
                type_name: obj.name().to_string(),
                field_name: field_name.clone(),
                location: field.def_location().position(),
            });
        };
        fields.insert(field_name.clone(), BoundField {
            field: field.clone(),
            declaring_type: obj.name().to_string(),
            trace_label: format!("GraphQL field: {}.{}", obj.name(), field_name),
            signature: capability.signature.clone(),
            callable: Arc::clone(&capability.callable),
        });
    }
    Ok(BoundObject {
        type_name: obj.name().to_string(),
        fields,
    })
}

fn check_root_values(
    schema: &Arc<Schema>,
    roots: RootValues,
) -> Result<IndexMap<OperationKind, HostValue>> {
    let RootValues {
        query,
        mutation,
        subscription,
    } = roots;
    let supplied = [
        (OperationKind::Query, Some(query)),
        (OperationKind::Mutation, mutation),
        (OperationKind::Subscription, subscription),
    ];

    let mut root_values = IndexMap::new();
    for (operation, value) in supplied {
        let Some(expected) = schema.root_operation_types().get(&operation) else {
            continue;
        };
        let Some(value) = value else {
            return Err(BindError::MissingRootValue { operation });
        };
        match &value {
            HostValue::Object(object) if object.type_name() == expected => {}
            HostValue::Object(object) => {
                return Err(BindError::RootValueTypeMismatch {
                    operation,
                    expected: expected.clone(),
                    actual: object.type_name().to_string(),
                });
            }
            _ => return Err(BindError::RootValueNotObject { operation }),
        }
        root_values.insert(operation, value);
    }
    Ok(root_values)
}
