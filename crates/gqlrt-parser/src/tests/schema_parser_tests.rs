//! Tests for schema-document parsing.

use crate::ast::Definition;
use crate::ast::OperationKind;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::parse_schema;
use crate::SourcePosition;

mod declarations {
    use super::*;

    #[test]
    fn object_with_fields_and_arguments() {
        let doc = parse_schema(concat!(
            "type User implements Node & Named {\n",
            "  id: ID!\n",
            "  friends(first: Int = 10, after: String): [User!]\n",
            "}\n",
        ))
        .unwrap();

        let Definition::Type(TypeDefinition::Object(obj)) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        assert_eq!(obj.name.name, "User");
        assert_eq!(
            obj.interfaces.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["Node", "Named"],
        );
        assert_eq!(obj.fields.len(), 2);

        let friends = &obj.fields[1];
        assert_eq!(friends.name.name, "friends");
        assert_eq!(friends.field_type.to_string(), "[User!]");
        assert_eq!(friends.arguments.len(), 2);
        assert_eq!(friends.arguments[0].name.name, "first");
        assert_eq!(friends.arguments[0].value_type.to_string(), "Int");
        assert!(friends.arguments[0].default_value.is_some());
        assert!(friends.arguments[1].default_value.is_none());
    }

    /// An implements list ends at the first non-`&` token, so a bodyless
    /// object does not swallow the following declaration.
    #[test]
    fn implements_list_stops_before_next_declaration() {
        let doc = parse_schema(concat!(
            "type Pet implements Named\n",
            "type Query { x: Int }\n",
        ))
        .unwrap();
        assert_eq!(doc.definitions.len(), 2);

        let Definition::Type(TypeDefinition::Object(pet)) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        assert_eq!(
            pet.interfaces.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["Named"],
        );
        assert!(matches!(
            &doc.definitions[1],
            Definition::Type(TypeDefinition::Object(query)) if query.name.name == "Query",
        ));
    }

    #[test]
    fn fieldless_object() {
        let doc = parse_schema("type Query").unwrap();
        let Definition::Type(TypeDefinition::Object(obj)) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        assert!(obj.fields.is_empty());
    }

    #[test]
    fn interface_and_scalar() {
        let doc = parse_schema(concat!(
            "interface Node { id: ID! }\n",
            "scalar Time @specifiedBy(url: \"https://example.test/time\")\n",
        ))
        .unwrap();

        assert!(matches!(
            &doc.definitions[0],
            Definition::Type(TypeDefinition::Interface(iface))
                if iface.name.name == "Node" && iface.fields.len() == 1,
        ));
        let Definition::Type(TypeDefinition::Scalar(scalar)) = &doc.definitions[1]
        else {
            panic!("expected a scalar type definition");
        };
        assert_eq!(scalar.name.name, "Time");
        assert_eq!(scalar.directives[0].name.name, "specifiedBy");
    }

    #[test]
    fn union_members_with_leading_pipe() {
        let doc = parse_schema("union Pet = | Cat | Dog").unwrap();
        let Definition::Type(TypeDefinition::Union(union_def)) = &doc.definitions[0]
        else {
            panic!("expected a union type definition");
        };
        assert_eq!(
            union_def.members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            vec!["Cat", "Dog"],
        );
    }

    #[test]
    fn enum_values_with_directives() {
        let doc = parse_schema(concat!(
            "enum Color {\n",
            "  RED\n",
            "  GREEN @deprecated(reason: \"use RED\")\n",
            "}\n",
        ))
        .unwrap();
        let Definition::Type(TypeDefinition::Enum(enum_def)) = &doc.definitions[0]
        else {
            panic!("expected an enum type definition");
        };
        assert_eq!(enum_def.values.len(), 2);
        assert_eq!(enum_def.values[0].name.name, "RED");
        assert_eq!(enum_def.values[1].directives[0].name.name, "deprecated");
    }

    #[test]
    fn input_object_fields() {
        let doc = parse_schema(concat!(
            "input Point {\n",
            "  x: Float! = 0.0\n",
            "  y: Float! = 0.0\n",
            "}\n",
        ))
        .unwrap();
        let Definition::Type(TypeDefinition::InputObject(input_def)) =
            &doc.definitions[0]
        else {
            panic!("expected an input object type definition");
        };
        assert_eq!(input_def.fields.len(), 2);
        assert!(input_def.fields[0].default_value.is_some());
    }

    #[test]
    fn directive_definition_with_locations() {
        let doc = parse_schema(
            "directive @auth(role: String!) on FIELD_DEFINITION | OBJECT",
        )
        .unwrap();
        let Definition::Directive(dir_def) = &doc.definitions[0] else {
            panic!("expected a directive definition");
        };
        assert_eq!(dir_def.name.name, "auth");
        assert_eq!(dir_def.arguments.len(), 1);
        assert_eq!(dir_def.locations, vec!["FIELD_DEFINITION", "OBJECT"]);
    }

    #[test]
    fn schema_block_binds_root_operations() {
        let doc = parse_schema(concat!(
            "schema {\n",
            "  query: QueryRoot\n",
            "  mutation: MutationRoot\n",
            "}\n",
        ))
        .unwrap();
        let Definition::Schema(schema_def) = &doc.definitions[0] else {
            panic!("expected a schema definition");
        };
        assert_eq!(schema_def.root_operations.len(), 2);
        assert_eq!(schema_def.root_operations[0].operation, OperationKind::Query);
        assert_eq!(schema_def.root_operations[0].type_name.name, "QueryRoot");
        assert_eq!(
            schema_def.root_operations[1].operation,
            OperationKind::Mutation,
        );
    }
}

mod descriptions {
    use super::*;

    #[test]
    fn doc_comments_become_descriptions() {
        let doc = parse_schema(concat!(
            "# A user of the system.\n",
            "# May be suspended.\n",
            "type User {\n",
            "  # Display name.\n",
            "  name: String\n",
            "  age: Int\n",
            "}\n",
        ))
        .unwrap();

        let Definition::Type(TypeDefinition::Object(obj)) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        assert_eq!(
            obj.description.as_deref(),
            Some("A user of the system.\nMay be suspended."),
        );
        assert_eq!(obj.fields[0].description.as_deref(), Some("Display name."));
        assert_eq!(obj.fields[1].description, None);
    }
}

mod directives {
    use super::*;

    /// `@a @b(x: 1)` parses into a two-element ordered list with `a` first.
    #[test]
    fn invocation_order_is_preserved() {
        let doc = parse_schema("type T { f: Int @a @b(x: 1) }").unwrap();
        let Definition::Type(TypeDefinition::Object(obj)) = &doc.definitions[0] else {
            panic!("expected an object type definition");
        };
        let directives = &obj.fields[0].directives;
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].name.name, "a");
        assert!(directives[0].arguments.is_empty());
        assert_eq!(directives[1].name.name, "b");
        assert_eq!(
            directives[1].argument("x").map(|v| v.to_string()),
            Some("1".to_string()),
        );
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extend_type_parses_as_deferred_extension() {
        let doc = parse_schema("extend type User { nickname: String }").unwrap();
        let Definition::TypeExtension(TypeExtension::Type(TypeDefinition::Object(
            obj,
        ))) = &doc.definitions[0]
        else {
            panic!("expected an object type extension");
        };
        assert_eq!(obj.name.name, "User");
        assert_eq!(obj.fields.len(), 1);
    }

    #[test]
    fn extend_schema_parses() {
        let doc = parse_schema("extend schema { mutation: MutationRoot }").unwrap();
        assert!(matches!(
            &doc.definitions[0],
            Definition::TypeExtension(TypeExtension::Schema(def))
                if def.root_operations.len() == 1,
        ));
    }

    #[test]
    fn extend_rejects_directive() {
        let err = parse_schema("extend directive @x on FIELD").unwrap_err();
        assert_eq!(
            err.message(),
            "unexpected `directive`, expected an extendable declaration",
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_declaration_keyword() {
        let err = parse_schema("frobnicate Foo").unwrap_err();
        assert_eq!(err.location(), SourcePosition::new(1, 1));
        assert!(err.message().starts_with("unexpected `frobnicate`"));
    }

    #[test]
    fn missing_colon_in_field() {
        let err = parse_schema("type T { f Int }").unwrap_err();
        assert_eq!(err.message(), "expected `:`, found `Int`");
        assert_eq!(err.location(), SourcePosition::new(1, 12));
    }

    #[test]
    fn schema_block_rejects_unknown_operation() {
        let err = parse_schema("schema { wibble: T }").unwrap_err();
        assert_eq!(
            err.message(),
            "unexpected `wibble`, expected `query`, `mutation`, or `subscription`",
        );
    }

    #[test]
    fn union_requires_members() {
        assert!(parse_schema("union U =").is_err());
    }
}
