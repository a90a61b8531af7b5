//! Tests for type-reference parsing and printing.

use crate::ast::Definition;
use crate::ast::TypeDefinition;
use crate::ast::TypeRef;
use crate::parse_schema;
use proptest::prelude::*;

/// Parses `type T { f: <annotation> }` and returns the field's type
/// reference.
fn parse_type_ref(annotation: &str) -> TypeRef {
    let doc = parse_schema(&format!("type T {{ f: {annotation} }}"))
        .expect("annotation parses");
    match &doc.definitions[0] {
        Definition::Type(TypeDefinition::Object(obj)) => {
            obj.fields[0].field_type.clone()
        }
        other => panic!("expected an object type, got {other:?}"),
    }
}

/// Parse-then-print round-trips to the same canonical text.
#[test]
fn print_round_trips() {
    for annotation in ["Name", "[Name]", "Name!", "[Name!]", "[[Name!]!]"] {
        assert_eq!(parse_type_ref(annotation).to_string(), annotation);
    }
}

#[test]
fn wrapper_nesting_is_preserved_exactly() {
    let parsed = parse_type_ref("[[Int!]]!");
    let TypeRef::NonNull(list) = parsed else {
        panic!("outer wrapper must be non-null");
    };
    let TypeRef::List(inner) = *list else {
        panic!("expected a list under the non-null");
    };
    let TypeRef::List(inner) = *inner else {
        panic!("expected a nested list");
    };
    let TypeRef::NonNull(named) = *inner else {
        panic!("expected a non-null around the name");
    };
    assert!(matches!(*named, TypeRef::Named(ref n) if n.name == "Int"));
}

#[test]
fn innermost_named() {
    let parsed = parse_type_ref("[[Frob!]!]");
    assert_eq!(parsed.innermost_named().name, "Frob");
}

#[test]
fn nullability() {
    assert!(parse_type_ref("Name").nullable());
    assert!(parse_type_ref("[Name!]").nullable());
    assert!(!parse_type_ref("Name!").nullable());
}

#[test]
fn double_bang_is_rejected() {
    let err = parse_schema("type T { f: Int!! }").unwrap_err();
    assert_eq!(err.message(), "expected a name, found `!`");
}

#[test]
fn unclosed_list_is_rejected() {
    assert!(parse_schema("type T { f: [Int }").is_err());
}

#[test]
fn equivalence_ignores_location() {
    let a = parse_type_ref("[Int!]");
    let b = parse_type_ref("[ Int! ]");
    assert!(a.is_equivalent_to(&b));
    assert!(!a.is_equivalent_to(&parse_type_ref("[Int]")));
    assert!(!a.is_equivalent_to(&parse_type_ref("Int!")));
}

/// Mirror of the wrapper grammar for generating printable annotations. A
/// non-null directly inside a non-null is not expressible in source, so the
/// generator never produces one.
#[derive(Clone, Debug)]
enum GenTy {
    Named(&'static str),
    List(Box<GenTy>),
    NonNull(Box<GenTy>),
}

impl GenTy {
    fn render(&self) -> String {
        match self {
            GenTy::Named(name) => (*name).to_string(),
            GenTy::List(inner) => format!("[{}]", inner.render()),
            GenTy::NonNull(inner) => format!("{}!", inner.render()),
        }
    }
}

fn arb_gen_ty() -> impl Strategy<Value = GenTy> {
    let leaf = prop::sample::select(vec!["Foo", "Bar", "Baz", "Int"])
        .prop_map(GenTy::Named);
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|ty| GenTy::List(Box::new(ty))),
            inner.prop_map(|ty| {
                let ty = match ty {
                    GenTy::NonNull(_) => GenTy::List(Box::new(ty)),
                    other => other,
                };
                GenTy::NonNull(Box::new(ty))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn arbitrary_annotations_round_trip(ty in arb_gen_ty()) {
        let rendered = ty.render();
        prop_assert_eq!(parse_type_ref(&rendered).to_string(), rendered);
    }
}
