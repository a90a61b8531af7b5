//! Tests for the two-phase schema builder.

use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::DefLocation;
use gqlrt_parser::ast::OperationKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn minimal_schema() -> Result<()> {
        let schema = Schema::parse("type Query { hello: String }")?;

        assert_eq!(
            schema.root_operation_types().get(&OperationKind::Query),
            Some(&"Query".to_string()),
        );
        assert!(schema.root_operation_types().get(&OperationKind::Mutation).is_none());
        assert_eq!(schema.query_type().name(), "Query");

        let query = schema.type_named("Query").unwrap().as_object().unwrap();
        assert_eq!(query.fields().len(), 1);
        assert_eq!(query.field("hello").unwrap().field_type().to_string(), "String");
        Ok(())
    }

    #[test]
    fn builtin_scalars_are_seeded() -> Result<()> {
        let schema = Schema::parse("type Query")?;
        for name in ["Int", "Float", "String", "Boolean", "ID"] {
            let scalar = schema.type_named(name).expect("built-in scalar exists");
            assert_eq!(scalar.def_location(), &DefLocation::BuiltIn);
        }
        Ok(())
    }

    #[test]
    fn builtin_directives_are_injected() -> Result<()> {
        let schema = Schema::parse("type Query")?;
        for name in ["skip", "include", "deprecated"] {
            let decl = schema.directive_named(name).expect("built-in directive exists");
            assert_eq!(decl.def_location(), &DefLocation::BuiltIn);
        }
        Ok(())
    }

    #[test]
    fn user_declared_builtin_directive_wins() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "type Query\n",
                "directive @deprecated(reason: String) on FIELD_DEFINITION\n",
            ))?
            .build()?;
        let decl = schema.directive_named("deprecated").unwrap();
        assert!(matches!(decl.def_location(), DefLocation::Source(_)));
        Ok(())
    }

    #[test]
    fn no_query_type_fails() {
        let result = Schema::parse("type Orphan { x: Int }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));
    }

    #[test]
    fn schema_block_overrides_default_root_names() -> Result<()> {
        let schema = Schema::parse(concat!(
            "type TheQuery { x: Int }\n",
            "type TheMutation { y: Int }\n",
            "schema {\n",
            "  query: TheQuery\n",
            "  mutation: TheMutation\n",
            "}\n",
        ))?;
        assert_eq!(schema.query_type().name(), "TheQuery");
        assert_eq!(
            schema
                .root_operation_type(OperationKind::Mutation)
                .map(|ty| ty.name()),
            Some("TheMutation"),
        );
        Ok(())
    }

    #[test]
    fn default_mutation_and_subscription_roots() -> Result<()> {
        let schema = Schema::parse(concat!(
            "type Query { x: Int }\n",
            "type Mutation { y: Int }\n",
            "type Subscription { z: Int }\n",
        ))?;
        assert_eq!(schema.root_operation_types().len(), 3);
        Ok(())
    }

    #[test]
    fn descriptions_are_preserved() -> Result<()> {
        let schema = Schema::parse(concat!(
            "# Root query type.\n",
            "type Query {\n",
            "  # Greets.\n",
            "  hello: String\n",
            "}\n",
        ))?;
        let query = schema.type_named("Query").unwrap();
        assert_eq!(query.description(), Some("Root query type."));
        let hello = query.as_object().unwrap().field("hello").unwrap();
        assert_eq!(hello.description(), Some("Greets."));
        Ok(())
    }
}

mod duplicates {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let result = Schema::parse(concat!(
            "type Query { x: Int }\n",
            "type Query { y: Int }\n",
        ));
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. }
                if type_name == "Query",
        ));
    }

    #[test]
    fn duplicate_type_across_sources() {
        let result = SchemaBuilder::new()
            .load_str("type User { id: ID }")
            .and_then(|builder| builder.load_str("type User { id: ID }"));
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. }
                if type_name == "User",
        ));
    }

    #[test]
    fn redeclaring_a_builtin_scalar() {
        let result = Schema::parse("type Query\nscalar Int");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { ref type_name, .. }
                if type_name == "Int",
        ));
    }

    #[test]
    fn duplicate_field_definition() {
        let result = Schema::parse("type Query { x: Int x: String }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldDefinition {
                ref type_name,
                ref field_name,
                ..
            } if type_name == "Query" && field_name == "x",
        ));
    }

    #[test]
    fn duplicate_enum_value() {
        let result = Schema::parse("type Query\nenum E { A A }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateEnumValueDefinition { ref value_name, .. }
                if value_name == "A",
        ));
    }

    #[test]
    fn duplicate_root_operation_binding() {
        let result = SchemaBuilder::new()
            .load_str("type A { x: Int }\nschema { query: A }")
            .and_then(|builder| builder.load_str("type B { x: Int }\nschema { query: B }"));
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateOperationBinding {
                operation: OperationKind::Query,
                ref first_type_name,
                ref second_type_name,
            } if first_type_name == "A" && second_type_name == "B",
        ));
    }

    #[test]
    fn reserved_type_name() {
        let result = Schema::parse("type __Shadow { x: Int }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ReservedTypeName { ref type_name, .. }
                if type_name == "__Shadow",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extension_applies_after_collection() -> Result<()> {
        // The extension precedes the declaration it extends.
        let schema = Schema::parse(concat!(
            "extend type User { nickname: String }\n",
            "type User { name: String }\n",
            "type Query { user: User }\n",
        ))?;
        let user = schema.type_named("User").unwrap().as_object().unwrap();
        assert_eq!(
            user.fields().keys().collect::<Vec<_>>(),
            vec!["name", "nickname"],
        );
        Ok(())
    }

    #[test]
    fn extend_union_and_enum() -> Result<()> {
        let schema = Schema::parse(concat!(
            "type Query { pet: Pet, color: Color }\n",
            "type Cat { name: String }\n",
            "type Dog { name: String }\n",
            "union Pet = Cat\n",
            "extend union Pet = Dog\n",
            "enum Color { RED }\n",
            "extend enum Color { GREEN }\n",
        ))?;

        let pet = schema.type_named("Pet").unwrap().as_union().unwrap();
        assert_eq!(pet.member_names().collect::<Vec<_>>(), vec!["Cat", "Dog"]);

        let GraphQLType::Enum(color) = schema.type_named("Color").unwrap() else {
            panic!("expected an enum type");
        };
        assert_eq!(color.values().len(), 2);
        Ok(())
    }

    #[test]
    fn extend_schema_binds_root() -> Result<()> {
        let schema = Schema::parse(concat!(
            "type Query { x: Int }\n",
            "type Writes { y: Int }\n",
            "extend schema { mutation: Writes }\n",
        ))?;
        assert_eq!(
            schema
                .root_operation_type(OperationKind::Mutation)
                .map(|ty| ty.name()),
            Some("Writes"),
        );
        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = Schema::parse("type Query\nextend type Ghost { x: Int }");
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. }
                if type_name == "Ghost",
        ));
    }

    #[test]
    fn extension_kind_mismatch() {
        let result = Schema::parse(concat!(
            "type Query { c: Color }\n",
            "type Color { x: Int }\n",
            "extend enum Color { RED }\n",
        ));
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionKindMismatch { ref type_name, .. }
                if type_name == "Color",
        ));
    }

    #[test]
    fn extension_duplicating_a_field() {
        let result = Schema::parse(concat!(
            "type Query { x: Int }\n",
            "extend type Query { x: String }\n",
        ));
        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldDefinition { ref field_name, .. }
                if field_name == "x",
        ));
    }
}

mod diagnostics {
    use super::*;

    #[test]
    fn syntax_errors_surface_through_build() {
        let err = Schema::parse("type {").unwrap_err();
        let SchemaBuildError::Syntax(syntax_err) = &err else {
            panic!("expected a syntax error, got {err:?}");
        };
        assert_eq!(syntax_err.message(), "expected a name, found `{`");
        assert_eq!(
            err.diagnostic().kind(),
            gqlrt_parser::DiagnosticKind::Syntax,
        );
    }
}
