//! The fixed introspection machinery: the meta-schema source injected into
//! every schema, the introspection data model, and the capability surfaces
//! the meta types bind against.
//!
//! The meta types are declared in ordinary schema syntax and parsed by this
//! crate's own parser; their bindings are produced by the ordinary binder
//! matching meta-schema fields against the surfaces built here.

use crate::resolvable::CapabilityRegistry;
use crate::resolvable::CapabilitySurface;
use crate::resolvable::FieldError;
use crate::resolvable::HostValue;
use crate::resolvable::ResolveRequest;
use crate::schema::Schema;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use gqlrt_parser::ast::Directive;
use gqlrt_parser::ast::InputValueDef;
use gqlrt_parser::ast::OperationKind;
use gqlrt_parser::ast::TypeRef;
use std::sync::Arc;

/// Schema-syntax declarations of the built-in directives and the
/// introspection meta types, injected into every schema at build time.
pub(crate) const META_SCHEMA_SRC: &str = r#"
directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE

# A GraphQL service's collective type system capabilities.
type __Schema {
  types: [__Type!]!
  queryType: __Type!
  mutationType: __Type
  subscriptionType: __Type
  directives: [__Directive!]!
}

# The fundamental unit of the type system: a named type, or a list/non-null
# wrapper around one.
type __Type {
  kind: __TypeKind!
  name: String
  description: String
  fields(includeDeprecated: Boolean = false): [__Field!]
  interfaces: [__Type!]
  possibleTypes: [__Type!]
  enumValues(includeDeprecated: Boolean = false): [__EnumValue!]
  inputFields: [__InputValue!]
  ofType: __Type
}

type __Field {
  name: String!
  description: String
  args: [__InputValue!]!
  type: __Type!
  isDeprecated: Boolean!
  deprecationReason: String
}

type __InputValue {
  name: String!
  description: String
  type: __Type!
  defaultValue: String
}

type __EnumValue {
  name: String!
  description: String
  isDeprecated: Boolean!
  deprecationReason: String
}

type __Directive {
  name: String!
  description: String
  locations: [__DirectiveLocation!]!
  args: [__InputValue!]!
}

enum __TypeKind {
  SCALAR
  OBJECT
  INTERFACE
  UNION
  ENUM
  INPUT_OBJECT
  LIST
  NON_NULL
}

enum __DirectiveLocation {
  QUERY
  MUTATION
  SUBSCRIPTION
  FIELD
  FRAGMENT_DEFINITION
  FRAGMENT_SPREAD
  INLINE_FRAGMENT
  SCHEMA
  SCALAR
  OBJECT
  FIELD_DEFINITION
  ARGUMENT_DEFINITION
  INTERFACE
  UNION
  ENUM
  ENUM_VALUE
  INPUT_OBJECT
  INPUT_FIELD_DEFINITION
}
"#;

/// The meta types that carry field bindings.
pub(crate) const META_OBJECT_TYPE_NAMES: [&str; 6] = [
    "__Schema",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__Directive",
];

// =============================================================================
// Introspection data model
// =============================================================================

/// Host state behind a `__Schema` value.
pub(crate) struct SchemaIntrospection {
    pub schema: Arc<Schema>,
}

/// The shape a `__Type` value describes: a declared type by name, or a
/// list/non-null wrapper. Wrappers unwrap one level at a time through
/// `ofType`.
#[derive(Clone)]
pub(crate) enum TypeShape {
    Named(String),
    List(Box<TypeShape>),
    NonNull(Box<TypeShape>),
}

impl TypeShape {
    pub(crate) fn of(type_ref: &TypeRef) -> TypeShape {
        match type_ref {
            TypeRef::Named(named) => TypeShape::Named(named.name.clone()),
            TypeRef::List(inner) => TypeShape::List(Box::new(TypeShape::of(inner))),
            TypeRef::NonNull(inner) => TypeShape::NonNull(Box::new(TypeShape::of(inner))),
        }
    }
}

/// Host state behind a `__Type` value.
pub(crate) struct TypeIntrospection {
    pub schema: Arc<Schema>,
    pub shape: TypeShape,
}

/// Host state behind a `__Field` value.
pub(crate) struct FieldIntrospection {
    pub schema: Arc<Schema>,
    pub type_name: String,
    pub field_name: String,
}

impl FieldIntrospection {
    fn field(&self) -> Result<&Field, FieldError> {
        self.schema
            .type_named(self.type_name.as_str())
            .and_then(|ty| ty.fields())
            .and_then(|fields| fields.get(self.field_name.as_str()))
            .ok_or_else(|| FieldError::new("introspected field no longer exists"))
    }
}

/// Host state behind a `__InputValue` value.
pub(crate) struct InputValueIntrospection {
    pub schema: Arc<Schema>,
    pub def: InputValueDef,
}

/// Host state behind a `__EnumValue` value.
pub(crate) struct EnumValueIntrospection {
    pub value: EnumValue,
}

/// Host state behind a `__Directive` value.
pub(crate) struct DirectiveIntrospection {
    pub schema: Arc<Schema>,
    pub name: String,
}

// =============================================================================
// Value constructors
// =============================================================================

pub(crate) fn schema_value(schema: &Arc<Schema>) -> HostValue {
    HostValue::object("__Schema", SchemaIntrospection {
        schema: Arc::clone(schema),
    })
}

pub(crate) fn type_value(schema: &Arc<Schema>, shape: TypeShape) -> HostValue {
    HostValue::object("__Type", TypeIntrospection {
        schema: Arc::clone(schema),
        shape,
    })
}

fn field_value(schema: &Arc<Schema>, type_name: &str, field_name: &str) -> HostValue {
    HostValue::object("__Field", FieldIntrospection {
        schema: Arc::clone(schema),
        type_name: type_name.to_string(),
        field_name: field_name.to_string(),
    })
}

fn input_value_value(schema: &Arc<Schema>, def: &InputValueDef) -> HostValue {
    HostValue::object("__InputValue", InputValueIntrospection {
        schema: Arc::clone(schema),
        def: def.clone(),
    })
}

fn enum_value_value(value: &EnumValue) -> HostValue {
    HostValue::object("__EnumValue", EnumValueIntrospection {
        value: value.clone(),
    })
}

fn directive_value(schema: &Arc<Schema>, name: &str) -> HostValue {
    HostValue::object("__Directive", DirectiveIntrospection {
        schema: Arc::clone(schema),
        name: name.to_string(),
    })
}

fn opt_leaf(text: Option<&str>) -> HostValue {
    match text {
        Some(text) => HostValue::leaf(text),
        None => HostValue::Null,
    }
}

/// Reads the deprecation state off a directive list: whether `@deprecated`
/// is present, and its reason.
fn deprecation(directives: &[Directive]) -> (bool, Option<String>) {
    let Some(directive) = directives.iter().find(|d| d.name.name == "deprecated") else {
        return (false, None);
    };
    let reason = directive
        .argument("reason")
        .and_then(|value| value.resolve_const().ok())
        .and_then(|value| value.as_str().map(str::to_string))
        .or_else(|| Some("No longer supported".to_string()));
    (true, reason)
}

fn state<'a, T: 'static>(req: &ResolveRequest<'a>) -> Result<&'a T, FieldError> {
    req.parent
        .state::<T>()
        .ok_or_else(|| FieldError::new("introspection value has unexpected shape"))
}

fn include_deprecated(req: &ResolveRequest<'_>) -> bool {
    req.args
        .get("includeDeprecated")
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

// =============================================================================
// Capability surfaces
// =============================================================================

/// The fixed introspection capability registry the meta types bind against.
///
/// Capability names are the host-side snake_case spellings; the binder's
/// normalized matching maps them onto the camelCase meta-schema fields.
pub(crate) fn capability_registry() -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();
    schema_surface(registry.surface("__Schema"));
    type_surface(registry.surface("__Type"));
    field_surface(registry.surface("__Field"));
    input_value_surface(registry.surface("__InputValue"));
    enum_value_surface(registry.surface("__EnumValue"));
    directive_surface(registry.surface("__Directive"));
    registry
}

fn schema_surface(surface: &mut CapabilitySurface) {
    surface
        .capability("types", |req| {
            let intro = state::<SchemaIntrospection>(&req)?;
            Ok(HostValue::list(intro.schema.types().keys().map(|name| {
                type_value(&intro.schema, TypeShape::Named(name.clone()))
            })))
        })
        .capability("query_type", |req| {
            let intro = state::<SchemaIntrospection>(&req)?;
            let name = intro
                .schema
                .root_operation_types()
                .get(&OperationKind::Query)
                .expect("schema was built with a query root type")
                .clone();
            Ok(type_value(&intro.schema, TypeShape::Named(name)))
        })
        .capability("mutation_type", |req| {
            let intro = state::<SchemaIntrospection>(&req)?;
            Ok(root_type_value(intro, OperationKind::Mutation))
        })
        .capability("subscription_type", |req| {
            let intro = state::<SchemaIntrospection>(&req)?;
            Ok(root_type_value(intro, OperationKind::Subscription))
        })
        .capability("directives", |req| {
            let intro = state::<SchemaIntrospection>(&req)?;
            Ok(HostValue::list(
                intro
                    .schema
                    .directives()
                    .keys()
                    .map(|name| directive_value(&intro.schema, name)),
            ))
        });
}

fn root_type_value(intro: &SchemaIntrospection, kind: OperationKind) -> HostValue {
    match intro.schema.root_operation_types().get(&kind) {
        Some(name) => type_value(&intro.schema, TypeShape::Named(name.clone())),
        None => HostValue::Null,
    }
}

fn type_surface(surface: &mut CapabilitySurface) {
    surface
        .capability("kind", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            let kind = match &intro.shape {
                TypeShape::List(_) => "LIST",
                TypeShape::NonNull(_) => "NON_NULL",
                TypeShape::Named(name) => intro
                    .schema
                    .type_named(name.as_str())
                    .map(|ty| ty.kind().name())
                    .ok_or_else(|| FieldError::new("introspected type no longer exists"))?,
            };
            Ok(HostValue::leaf(kind))
        })
        .capability("name", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            match &intro.shape {
                TypeShape::Named(name) => Ok(HostValue::leaf(name.as_str())),
                _ => Ok(HostValue::Null),
            }
        })
        .capability("description", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            match &intro.shape {
                TypeShape::Named(name) => Ok(opt_leaf(
                    intro
                        .schema
                        .type_named(name.as_str())
                        .and_then(|ty| ty.description()),
                )),
                _ => Ok(HostValue::Null),
            }
        })
        .capability("fields", |req| {
            let include_deprecated = include_deprecated(&req);
            let intro = state::<TypeIntrospection>(&req)?;
            let TypeShape::Named(name) = &intro.shape else {
                return Ok(HostValue::Null);
            };
            let Some(fields) =
                intro.schema.type_named(name.as_str()).and_then(|ty| ty.fields())
            else {
                return Ok(HostValue::Null);
            };
            Ok(HostValue::list(
                fields
                    .values()
                    .filter(|field| {
                        include_deprecated || !deprecation(field.directives()).0
                    })
                    .map(|field| field_value(&intro.schema, name, field.name())),
            ))
        })
        .capability("interfaces", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            let TypeShape::Named(name) = &intro.shape else {
                return Ok(HostValue::Null);
            };
            match intro.schema.type_named(name.as_str()) {
                Some(GraphQLType::Object(obj)) => Ok(HostValue::list(
                    obj.interfaces().iter().map(|iface_ref| {
                        type_value(
                            &intro.schema,
                            TypeShape::Named(iface_ref.name.clone()),
                        )
                    }),
                )),
                _ => Ok(HostValue::Null),
            }
        })
        .capability("possible_types", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            let TypeShape::Named(name) = &intro.shape else {
                return Ok(HostValue::Null);
            };
            match intro.schema.type_named(name.as_str()) {
                Some(GraphQLType::Interface(iface)) => Ok(HostValue::list(
                    iface.possible_types().iter().map(|possible| {
                        type_value(&intro.schema, TypeShape::Named(possible.clone()))
                    }),
                )),
                Some(GraphQLType::Union(union_type)) => Ok(HostValue::list(
                    union_type.member_names().map(|member| {
                        type_value(&intro.schema, TypeShape::Named(member.to_string()))
                    }),
                )),
                _ => Ok(HostValue::Null),
            }
        })
        .capability("enum_values", |req| {
            let include_deprecated = include_deprecated(&req);
            let intro = state::<TypeIntrospection>(&req)?;
            let TypeShape::Named(name) = &intro.shape else {
                return Ok(HostValue::Null);
            };
            match intro.schema.type_named(name.as_str()) {
                Some(GraphQLType::Enum(enum_type)) => Ok(HostValue::list(
                    enum_type
                        .values()
                        .iter()
                        .filter(|value| {
                            include_deprecated || !deprecation(value.directives()).0
                        })
                        .map(enum_value_value),
                )),
                _ => Ok(HostValue::Null),
            }
        })
        .capability("input_fields", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            let TypeShape::Named(name) = &intro.shape else {
                return Ok(HostValue::Null);
            };
            match intro.schema.type_named(name.as_str()) {
                Some(GraphQLType::InputObject(input_type)) => Ok(HostValue::list(
                    input_type
                        .fields()
                        .values()
                        .map(|def| input_value_value(&intro.schema, def)),
                )),
                _ => Ok(HostValue::Null),
            }
        })
        .capability("of_type", |req| {
            let intro = state::<TypeIntrospection>(&req)?;
            match &intro.shape {
                TypeShape::List(inner) | TypeShape::NonNull(inner) => {
                    Ok(type_value(&intro.schema, (**inner).clone()))
                }
                TypeShape::Named(_) => Ok(HostValue::Null),
            }
        });
}

fn field_surface(surface: &mut CapabilitySurface) {
    surface
        .capability("name", |req| {
            let intro = state::<FieldIntrospection>(&req)?;
            Ok(HostValue::leaf(intro.field_name.as_str()))
        })
        .capability("description", |req| {
            let intro = state::<FieldIntrospection>(&req)?;
            Ok(opt_leaf(intro.field()?.description()))
        })
        .capability("args", |req| {
            let intro = state::<FieldIntrospection>(&req)?;
            Ok(HostValue::list(
                intro
                    .field()?
                    .arguments()
                    .values()
                    .map(|def| input_value_value(&intro.schema, def)),
            ))
        })
        .capability("type", |req| {
            let intro = state::<FieldIntrospection>(&req)?;
            let shape = TypeShape::of(intro.field()?.field_type());
            Ok(type_value(&intro.schema, shape))
        })
        .capability("is_deprecated", |req| {
            let intro = state::<FieldIntrospection>(&req)?;
            Ok(HostValue::leaf(deprecation(intro.field()?.directives()).0))
        })
        .capability("deprecation_reason", |req| {
            let intro = state::<FieldIntrospection>(&req)?;
            Ok(opt_leaf(
                deprecation(intro.field()?.directives()).1.as_deref(),
            ))
        });
}

fn input_value_surface(surface: &mut CapabilitySurface) {
    surface
        .capability("name", |req| {
            let intro = state::<InputValueIntrospection>(&req)?;
            Ok(HostValue::leaf(intro.def.name.name.as_str()))
        })
        .capability("description", |req| {
            let intro = state::<InputValueIntrospection>(&req)?;
            Ok(opt_leaf(intro.def.description.as_deref()))
        })
        .capability("type", |req| {
            let intro = state::<InputValueIntrospection>(&req)?;
            Ok(type_value(&intro.schema, TypeShape::of(&intro.def.value_type)))
        })
        .capability("default_value", |req| {
            let intro = state::<InputValueIntrospection>(&req)?;
            Ok(opt_leaf(
                intro
                    .def
                    .default_value
                    .as_ref()
                    .map(|value| value.to_string())
                    .as_deref(),
            ))
        });
}

fn enum_value_surface(surface: &mut CapabilitySurface) {
    surface
        .capability("name", |req| {
            let intro = state::<EnumValueIntrospection>(&req)?;
            Ok(HostValue::leaf(intro.value.name()))
        })
        .capability("description", |req| {
            let intro = state::<EnumValueIntrospection>(&req)?;
            Ok(opt_leaf(intro.value.description()))
        })
        .capability("is_deprecated", |req| {
            let intro = state::<EnumValueIntrospection>(&req)?;
            Ok(HostValue::leaf(deprecation(intro.value.directives()).0))
        })
        .capability("deprecation_reason", |req| {
            let intro = state::<EnumValueIntrospection>(&req)?;
            Ok(opt_leaf(deprecation(intro.value.directives()).1.as_deref()))
        });
}

fn directive_surface(surface: &mut CapabilitySurface) {
    surface
        .capability("name", |req| {
            let intro = state::<DirectiveIntrospection>(&req)?;
            Ok(HostValue::leaf(intro.name.as_str()))
        })
        .capability("description", |req| {
            let intro = state::<DirectiveIntrospection>(&req)?;
            Ok(opt_leaf(
                intro
                    .schema
                    .directive_named(intro.name.as_str())
                    .and_then(|decl| decl.description()),
            ))
        })
        .capability("locations", |req| {
            let intro = state::<DirectiveIntrospection>(&req)?;
            let locations = intro
                .schema
                .directive_named(intro.name.as_str())
                .map(|decl| decl.locations().to_vec())
                .unwrap_or_default();
            Ok(HostValue::list(locations.into_iter().map(HostValue::leaf)))
        })
        .capability("args", |req| {
            let intro = state::<DirectiveIntrospection>(&req)?;
            let Some(decl) = intro.schema.directive_named(intro.name.as_str()) else {
                return Ok(HostValue::list(vec![]));
            };
            Ok(HostValue::list(
                decl.arguments()
                    .values()
                    .map(|def| input_value_value(&intro.schema, def)),
            ))
        });
}
