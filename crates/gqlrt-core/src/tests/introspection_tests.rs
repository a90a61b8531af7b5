//! Tests for the synthesized introspection bindings.

use crate::resolvable::bind;
use crate::resolvable::ArgumentValues;
use crate::resolvable::BoundSchema;
use crate::resolvable::CapabilityRegistry;
use crate::resolvable::HostValue;
use crate::resolvable::RequestContext;
use crate::resolvable::RootValues;
use crate::schema::Schema;
use serde_json::json;
use std::sync::Arc;

fn bind_fixture() -> BoundSchema {
    let schema = Arc::new(
        Schema::parse(concat!(
            "type Query {\n",
            "  user: User\n",
            "  pets: [Pet!]\n",
            "}\n",
            "type User {\n",
            "  name: String\n",
            "  # Old identifier.\n",
            "  legacyId: ID @deprecated(reason: \"use name\")\n",
            "}\n",
            "type Cat { name: String }\n",
            "type Dog { name: String }\n",
            "union Pet = Cat | Dog\n",
            "enum Mood { HAPPY, GRUMPY @deprecated }\n",
            "input Filter { text: String = \"*\" }\n",
        ))
        .unwrap(),
    );

    let mut registry = CapabilityRegistry::new();
    registry
        .surface("Query")
        .capability("user", |_req| Ok(HostValue::object("User", ())))
        .capability("pets", |_req| Ok(HostValue::list(vec![])));
    registry
        .surface("User")
        .capability("name", |_req| Ok(HostValue::leaf("Sam")))
        .capability("legacy_id", |_req| Ok(HostValue::leaf("u1")));
    registry
        .surface("Cat")
        .capability("name", |_req| Ok(HostValue::leaf("Niko")));
    registry
        .surface("Dog")
        .capability("name", |_req| Ok(HostValue::leaf("Rex")));

    bind(
        &schema,
        &registry,
        RootValues::query(HostValue::object("Query", ())),
    )
    .unwrap()
}

fn invoke(
    bound: &BoundSchema,
    type_name: &str,
    field_name: &str,
    parent: &HostValue,
    args: ArgumentValues,
) -> HostValue {
    bound
        .binding(type_name, field_name)
        .unwrap_or_else(|| panic!("no binding for {type_name}.{field_name}"))
        .invoke(parent, &args, &RequestContext::empty())
        .expect("introspection invocation succeeds")
}

fn leaf(value: &HostValue) -> &serde_json::Value {
    match value {
        HostValue::Leaf(leaf) => leaf,
        other => panic!("expected a leaf, got {other:?}"),
    }
}

fn list(value: HostValue) -> Vec<HostValue> {
    match value {
        HostValue::List(values) => values,
        other => panic!("expected a list, got {other:?}"),
    }
}

/// Resolves `__type(name:)` on the query root to a `__Type` value.
fn type_of(bound: &BoundSchema, name: &str) -> HostValue {
    let mut args = ArgumentValues::new();
    args.insert("name", json!(name));
    let parent = HostValue::object("Query", ());
    invoke(bound, "Query", "__type", &parent, args)
}

#[test]
fn schema_types_enumerate_in_declaration_order() {
    let bound = bind_fixture();
    let parent = HostValue::object("Query", ());
    let schema_value = invoke(&bound, "Query", "__schema", &parent, ArgumentValues::new());
    assert_eq!(schema_value.type_name(), Some("__Schema"));

    let types = list(invoke(
        &bound,
        "__Schema",
        "types",
        &schema_value,
        ArgumentValues::new(),
    ));
    let names: Vec<String> = types
        .iter()
        .map(|ty| {
            leaf(&invoke(&bound, "__Type", "name", ty, ArgumentValues::new()))
                .as_str()
                .expect("declared types have names")
                .to_string()
        })
        .collect();

    // Built-in scalars seed the table, user types follow in declaration
    // order, the meta types come last.
    let user_declared: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !name.starts_with("__"))
        .skip(5)
        .collect();
    assert_eq!(
        user_declared,
        vec!["Query", "User", "Cat", "Dog", "Pet", "Mood", "Filter"],
    );
    assert!(names.iter().any(|name| name == "__Schema"));
}

#[test]
fn schema_query_type_and_directives() {
    let bound = bind_fixture();
    let parent = HostValue::object("Query", ());
    let schema_value = invoke(&bound, "Query", "__schema", &parent, ArgumentValues::new());

    let query_type = invoke(
        &bound,
        "__Schema",
        "queryType",
        &schema_value,
        ArgumentValues::new(),
    );
    let name = invoke(&bound, "__Type", "name", &query_type, ArgumentValues::new());
    assert_eq!(leaf(&name), &json!("Query"));

    let mutation_type = invoke(
        &bound,
        "__Schema",
        "mutationType",
        &schema_value,
        ArgumentValues::new(),
    );
    assert!(matches!(mutation_type, HostValue::Null));

    let directives = list(invoke(
        &bound,
        "__Schema",
        "directives",
        &schema_value,
        ArgumentValues::new(),
    ));
    let names: Vec<String> = directives
        .iter()
        .map(|directive| {
            leaf(&invoke(
                &bound,
                "__Directive",
                "name",
                directive,
                ArgumentValues::new(),
            ))
            .as_str()
            .expect("directives have names")
            .to_string()
        })
        .collect();
    for builtin in ["skip", "include", "deprecated"] {
        assert!(names.iter().any(|name| name == builtin));
    }
}

#[test]
fn type_lookup_by_name() {
    let bound = bind_fixture();

    let user = type_of(&bound, "User");
    assert_eq!(
        leaf(&invoke(&bound, "__Type", "kind", &user, ArgumentValues::new())),
        &json!("OBJECT"),
    );
    assert_eq!(
        leaf(&invoke(&bound, "__Type", "name", &user, ArgumentValues::new())),
        &json!("User"),
    );

    let missing = type_of(&bound, "Nope");
    assert!(matches!(missing, HostValue::Null));
}

#[test]
fn field_introspection_with_deprecation() {
    let bound = bind_fixture();
    let user = type_of(&bound, "User");

    // Default: deprecated fields are filtered out.
    let fields = list(invoke(&bound, "__Type", "fields", &user, ArgumentValues::new()));
    assert_eq!(fields.len(), 1);
    assert_eq!(
        leaf(&invoke(&bound, "__Field", "name", &fields[0], ArgumentValues::new())),
        &json!("name"),
    );

    let mut args = ArgumentValues::new();
    args.insert("includeDeprecated", json!(true));
    let fields = list(invoke(&bound, "__Type", "fields", &user, args));
    assert_eq!(fields.len(), 2);

    let legacy = &fields[1];
    assert_eq!(
        leaf(&invoke(&bound, "__Field", "isDeprecated", legacy, ArgumentValues::new())),
        &json!(true),
    );
    assert_eq!(
        leaf(&invoke(
            &bound,
            "__Field",
            "deprecationReason",
            legacy,
            ArgumentValues::new(),
        )),
        &json!("use name"),
    );
    assert_eq!(
        leaf(&invoke(&bound, "__Field", "description", legacy, ArgumentValues::new())),
        &json!("Old identifier."),
    );
}

#[test]
fn wrapper_types_unwrap_through_of_type() {
    let bound = bind_fixture();
    let query = type_of(&bound, "Query");
    let fields = list(invoke(&bound, "__Type", "fields", &query, ArgumentValues::new()));

    // `pets: [Pet!]` — LIST of NON_NULL of UNION.
    let pets_type = invoke(&bound, "__Field", "type", &fields[1], ArgumentValues::new());
    assert_eq!(
        leaf(&invoke(&bound, "__Type", "kind", &pets_type, ArgumentValues::new())),
        &json!("LIST"),
    );
    assert!(matches!(
        invoke(&bound, "__Type", "name", &pets_type, ArgumentValues::new()),
        HostValue::Null,
    ));

    let non_null = invoke(&bound, "__Type", "ofType", &pets_type, ArgumentValues::new());
    assert_eq!(
        leaf(&invoke(&bound, "__Type", "kind", &non_null, ArgumentValues::new())),
        &json!("NON_NULL"),
    );

    let pet = invoke(&bound, "__Type", "ofType", &non_null, ArgumentValues::new());
    assert_eq!(
        leaf(&invoke(&bound, "__Type", "kind", &pet, ArgumentValues::new())),
        &json!("UNION"),
    );

    let members = list(invoke(&bound, "__Type", "possibleTypes", &pet, ArgumentValues::new()));
    assert_eq!(members.len(), 2);
}

#[test]
fn enum_and_input_introspection() {
    let bound = bind_fixture();

    let mood = type_of(&bound, "Mood");
    let values = list(invoke(&bound, "__Type", "enumValues", &mood, ArgumentValues::new()));
    assert_eq!(values.len(), 1);
    assert_eq!(
        leaf(&invoke(&bound, "__EnumValue", "name", &values[0], ArgumentValues::new())),
        &json!("HAPPY"),
    );

    let mut args = ArgumentValues::new();
    args.insert("includeDeprecated", json!(true));
    let values = list(invoke(&bound, "__Type", "enumValues", &mood, args));
    assert_eq!(values.len(), 2);
    assert_eq!(
        leaf(&invoke(
            &bound,
            "__EnumValue",
            "deprecationReason",
            &values[1],
            ArgumentValues::new(),
        )),
        &json!("No longer supported"),
    );

    let filter = type_of(&bound, "Filter");
    let fields = list(invoke(&bound, "__Type", "inputFields", &filter, ArgumentValues::new()));
    assert_eq!(fields.len(), 1);
    assert_eq!(
        leaf(&invoke(
            &bound,
            "__InputValue",
            "defaultValue",
            &fields[0],
            ArgumentValues::new(),
        )),
        &json!("\"*\""),
    );
}
