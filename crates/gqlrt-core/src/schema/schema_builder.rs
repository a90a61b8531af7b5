//! The two-phase schema construction pipeline.
//!
//! Phase one ([`SchemaBuilder::load_str`]) parses source and collects
//! declarations into the builder without resolving anything; forward
//! references and extensions of not-yet-declared types are legal. Phase two
//! ([`SchemaBuilder::build`]) injects built-ins and the introspection meta
//! types, applies deferred extensions, links every type-name reference
//! against the complete table, checks interface conformance, resolves root
//! operation bindings, and freezes the result into an immutable [`Schema`].

use crate::introspection;
use crate::schema::type_resolver;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveDecl;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;
use crate::DefLocation;
use gqlrt_parser::ast;
use gqlrt_parser::ast::OperationKind;
use gqlrt_parser::SourcePosition;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// An explicit root operation binding from a `schema { ... }` block.
#[derive(Clone, Debug)]
struct RootBinding {
    type_name: String,
    location: SourcePosition,
}

/// Utility for building a [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: IndexMap<String, DirectiveDecl>,
    extensions: Vec<ast::TypeExtension>,
    root_bindings: IndexMap<OperationKind, RootBinding>,
    types: IndexMap<String, GraphQLType>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALAR_NAMES {
            types.insert(
                name.to_string(),
                GraphQLType::Scalar(ScalarType {
                    name: name.to_string(),
                    description: None,
                    directives: vec![],
                    def_location: DefLocation::BuiltIn,
                }),
            );
        }
        Self {
            directives: IndexMap::new(),
            extensions: vec![],
            root_bindings: IndexMap::new(),
            types,
        }
    }

    /// Parses `source` and collects its declarations. May be called multiple
    /// times; declarations from later sources see the same symbol table.
    pub fn load_str(mut self, source: &str) -> Result<Self> {
        let document = gqlrt_parser::parse_schema(source)?;
        log::trace!(
            "collected {} schema definition(s) from source",
            document.definitions.len(),
        );
        for definition in document.definitions {
            self.visit_definition(definition)?;
        }
        Ok(self)
    }

    /// Finishes the build: injects meta types and built-in directives,
    /// applies deferred extensions, links, checks conformance, and resolves
    /// root operation bindings.
    pub fn build(mut self) -> Result<Schema> {
        self.inject_meta_declarations()?;
        self.apply_extensions()?;

        let possible_types = type_resolver::link(
            &self.types,
            &self.directives,
            self.root_bindings
                .iter()
                .map(|(kind, binding)| {
                    (*kind, binding.type_name.as_str(), binding.location)
                }),
        )?;
        for (interface_name, object_names) in possible_types {
            if let Some(GraphQLType::Interface(iface)) =
                self.types.get_mut(interface_name.as_str())
            {
                iface.possible_types = object_names;
            }
        }

        type_resolver::check_conformance(&self.types)?;

        let root_operation_types = self.resolve_root_operations()?;
        log::debug!(
            "built schema: {} type(s), {} directive(s), roots {:?}",
            self.types.len(),
            self.directives.len(),
            root_operation_types.keys().collect::<Vec<_>>(),
        );

        Ok(Schema {
            root_operation_types,
            types: self.types,
            directives: self.directives,
        })
    }

    // =========================================================================
    // Phase one: collection
    // =========================================================================

    fn visit_definition(&mut self, definition: ast::Definition) -> Result<()> {
        match definition {
            ast::Definition::Schema(def) => self.visit_schema_block(def),
            ast::Definition::Type(def) => self.visit_type_def(def),
            ast::Definition::TypeExtension(ext) => {
                // Extension targets may be declared later in source, so
                // application is deferred until build().
                self.extensions.push(ext);
                Ok(())
            }
            ast::Definition::Directive(def) => self.visit_directive_def(def),
        }
    }

    fn visit_schema_block(&mut self, def: ast::SchemaDefinition) -> Result<()> {
        for binding in def.root_operations {
            if let Some(existing) = self.root_bindings.get(&binding.operation) {
                return Err(SchemaBuildError::DuplicateOperationBinding {
                    operation: binding.operation,
                    first_type_name: existing.type_name.clone(),
                    second_type_name: binding.type_name.name,
                });
            }
            self.root_bindings.insert(binding.operation, RootBinding {
                type_name: binding.type_name.name,
                location: binding.type_name.location,
            });
        }
        Ok(())
    }

    fn visit_type_def(&mut self, def: ast::TypeDefinition) -> Result<()> {
        if def.name().starts_with("__") {
            return Err(SchemaBuildError::ReservedTypeName {
                type_name: def.name().to_string(),
                location: def.location(),
            });
        }
        let location = def.location();
        let schema_type = convert_type_def(def, DefLocation::Source(location))?;
        self.add_type(schema_type, location)
    }

    fn add_type(&mut self, schema_type: GraphQLType, location: SourcePosition) -> Result<()> {
        let name = schema_type.name().to_string();
        if self.types.contains_key(name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name,
                location,
            });
        }
        self.types.insert(name, schema_type);
        Ok(())
    }

    fn visit_directive_def(&mut self, def: ast::DirectiveDefinition) -> Result<()> {
        if self.directives.contains_key(def.name.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.name,
                location: def.location,
            });
        }
        let decl = convert_directive_def(def, DefLocation::Source)?;
        self.directives.insert(decl.name.clone(), decl);
        Ok(())
    }

    // =========================================================================
    // Phase two helpers
    // =========================================================================

    /// Parses the fixed meta-schema source: introspection meta types are
    /// added to the type table, and the built-in directives are added unless
    /// the schema already declared them itself.
    fn inject_meta_declarations(&mut self) -> Result<()> {
        let document = gqlrt_parser::parse_schema(introspection::META_SCHEMA_SRC)?;
        for definition in document.definitions {
            match definition {
                ast::Definition::Type(def) => {
                    let location = def.location();
                    let schema_type = convert_type_def(def, DefLocation::BuiltIn)?;
                    self.add_type(schema_type, location)?;
                }
                ast::Definition::Directive(def) => {
                    if self.directives.contains_key(def.name.name.as_str()) {
                        continue;
                    }
                    let decl = convert_directive_def(def, |_| DefLocation::BuiltIn)?;
                    self.directives.insert(decl.name.clone(), decl);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn apply_extensions(&mut self) -> Result<()> {
        for extension in std::mem::take(&mut self.extensions) {
            match extension {
                ast::TypeExtension::Schema(def) => self.visit_schema_block(def)?,
                ast::TypeExtension::Type(def) => self.apply_type_extension(def)?,
            }
        }
        Ok(())
    }

    fn apply_type_extension(&mut self, ext: ast::TypeDefinition) -> Result<()> {
        let type_name = ext.name().to_string();
        let location = ext.location();
        let extension_kind = match &ext {
            ast::TypeDefinition::Scalar(_) => TypeKind::Scalar,
            ast::TypeDefinition::Object(_) => TypeKind::Object,
            ast::TypeDefinition::Interface(_) => TypeKind::Interface,
            ast::TypeDefinition::Union(_) => TypeKind::Union,
            ast::TypeDefinition::Enum(_) => TypeKind::Enum,
            ast::TypeDefinition::InputObject(_) => TypeKind::InputObject,
        };

        let Some(target) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                location,
            });
        };
        if target.kind() != extension_kind {
            return Err(SchemaBuildError::ExtensionKindMismatch {
                type_name,
                declared_kind: target.kind(),
                extension_kind,
                location,
            });
        }

        match (target, ext) {
            (GraphQLType::Scalar(target), ast::TypeDefinition::Scalar(mut ext)) => {
                target.directives.append(&mut ext.directives);
            }

            (GraphQLType::Object(target), ast::TypeDefinition::Object(mut ext)) => {
                target.directives.append(&mut ext.directives);
                for interface in ext.interfaces {
                    if !target.interfaces.iter().any(|i| i.name == interface.name) {
                        target.interfaces.push(interface);
                    }
                }
                for field_def in ext.fields {
                    let field = convert_field_def(type_name.as_str(), field_def)?;
                    if target.fields.contains_key(field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name,
                            field_name: field.name,
                            location,
                        });
                    }
                    target.fields.insert(field.name.clone(), field);
                }
            }

            (GraphQLType::Interface(target), ast::TypeDefinition::Interface(mut ext)) => {
                target.directives.append(&mut ext.directives);
                for field_def in ext.fields {
                    let field = convert_field_def(type_name.as_str(), field_def)?;
                    if target.fields.contains_key(field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name,
                            field_name: field.name,
                            location,
                        });
                    }
                    target.fields.insert(field.name.clone(), field);
                }
            }

            (GraphQLType::Union(target), ast::TypeDefinition::Union(mut ext)) => {
                target.directives.append(&mut ext.directives);
                for member in ext.members {
                    if !target.members.iter().any(|m| m.name == member.name) {
                        target.members.push(member);
                    }
                }
            }

            (GraphQLType::Enum(target), ast::TypeDefinition::Enum(mut ext)) => {
                target.directives.append(&mut ext.directives);
                for value_def in ext.values {
                    if target.values.iter().any(|v| v.name == value_def.name.name) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            type_name,
                            value_name: value_def.name.name,
                            location,
                        });
                    }
                    target.values.push(EnumValue {
                        name: value_def.name.name,
                        description: value_def.description,
                        directives: value_def.directives,
                    });
                }
            }

            (GraphQLType::InputObject(target), ast::TypeDefinition::InputObject(mut ext)) => {
                target.directives.append(&mut ext.directives);
                for field_def in ext.fields {
                    if target.fields.contains_key(field_def.name.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name,
                            field_name: field_def.name.name,
                            location,
                        });
                    }
                    target.fields.insert(field_def.name.name.clone(), field_def);
                }
            }

            // Kind agreement was checked above.
            _ => unreachable!("extension kind matches declared kind"),
        }
        Ok(())
    }

    fn resolve_root_operations(&self) -> Result<IndexMap<OperationKind, String>> {
        let mut root_operation_types = IndexMap::new();
        let kinds = [
            (OperationKind::Query, "Query"),
            (OperationKind::Mutation, "Mutation"),
            (OperationKind::Subscription, "Subscription"),
        ];
        for (kind, default_name) in kinds {
            if let Some(binding) = self.root_bindings.get(&kind) {
                root_operation_types.insert(kind, binding.type_name.clone());
            } else if let Some(GraphQLType::Object(_)) = self.types.get(default_name) {
                root_operation_types.insert(kind, default_name.to_string());
            }
        }
        if !root_operation_types.contains_key(&OperationKind::Query) {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        }
        Ok(root_operation_types)
    }
}

// =============================================================================
// AST-to-type-graph conversion
// =============================================================================

fn convert_type_def(
    def: ast::TypeDefinition,
    def_location: DefLocation,
) -> Result<GraphQLType> {
    match def {
        ast::TypeDefinition::Scalar(def) => Ok(GraphQLType::Scalar(ScalarType {
            name: def.name.name,
            description: def.description,
            directives: def.directives,
            def_location,
        })),

        ast::TypeDefinition::Object(def) => {
            let type_name = def.name.name;
            let mut fields = IndexMap::new();
            for field_def in def.fields {
                let field = convert_field_def(type_name.as_str(), field_def)?;
                if let Some(existing) = fields.insert(field.name.clone(), field) {
                    return Err(SchemaBuildError::DuplicateFieldDefinition {
                        type_name,
                        field_name: existing.name,
                        location: def.location,
                    });
                }
            }
            Ok(GraphQLType::Object(ObjectType {
                name: type_name,
                description: def.description,
                interfaces: def.interfaces,
                fields,
                directives: def.directives,
                def_location,
            }))
        }

        ast::TypeDefinition::Interface(def) => {
            let type_name = def.name.name;
            let mut fields = IndexMap::new();
            for field_def in def.fields {
                let field = convert_field_def(type_name.as_str(), field_def)?;
                if let Some(existing) = fields.insert(field.name.clone(), field) {
                    return Err(SchemaBuildError::DuplicateFieldDefinition {
                        type_name,
                        field_name: existing.name,
                        location: def.location,
                    });
                }
            }
            Ok(GraphQLType::Interface(InterfaceType {
                name: type_name,
                description: def.description,
                fields,
                possible_types: vec![],
                directives: def.directives,
                def_location,
            }))
        }

        ast::TypeDefinition::Union(def) => Ok(GraphQLType::Union(UnionType {
            name: def.name.name,
            description: def.description,
            members: def.members,
            directives: def.directives,
            def_location,
        })),

        ast::TypeDefinition::Enum(def) => {
            let type_name = def.name.name;
            let mut values: Vec<EnumValue> = vec![];
            for value_def in def.values {
                if values.iter().any(|v| v.name == value_def.name.name) {
                    return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                        type_name,
                        value_name: value_def.name.name,
                        location: value_def.name.location,
                    });
                }
                values.push(EnumValue {
                    name: value_def.name.name,
                    description: value_def.description,
                    directives: value_def.directives,
                });
            }
            Ok(GraphQLType::Enum(EnumType {
                name: type_name,
                description: def.description,
                values,
                directives: def.directives,
                def_location,
            }))
        }

        ast::TypeDefinition::InputObject(def) => {
            let type_name = def.name.name;
            let mut fields = IndexMap::new();
            for field_def in def.fields {
                let field_name = field_def.name.name.clone();
                let location = field_def.name.location;
                if fields.insert(field_name.clone(), field_def).is_some() {
                    return Err(SchemaBuildError::DuplicateFieldDefinition {
                        type_name,
                        field_name,
                        location,
                    });
                }
            }
            Ok(GraphQLType::InputObject(InputObjectType {
                name: type_name,
                description: def.description,
                fields,
                directives: def.directives,
                def_location,
            }))
        }
    }
}

fn convert_field_def(
    type_name: &str,
    def: ast::FieldDefinition,
) -> Result<Field> {
    let field_name = def.name.name;
    let mut arguments = IndexMap::new();
    for arg_def in def.arguments {
        let arg_name = arg_def.name.name.clone();
        let location = arg_def.name.location;
        if arguments.insert(arg_name.clone(), arg_def).is_some() {
            return Err(SchemaBuildError::DuplicateArgumentDefinition {
                type_name: type_name.to_string(),
                field_name,
                argument_name: arg_name,
                location,
            });
        }
    }
    Ok(Field {
        name: field_name,
        arguments,
        field_type: def.field_type,
        directives: def.directives,
        description: def.description,
        def_location: DefLocation::Source(def.location),
    })
}

fn convert_directive_def(
    def: ast::DirectiveDefinition,
    def_location: impl Fn(SourcePosition) -> DefLocation,
) -> Result<DirectiveDecl> {
    let directive_name = def.name.name;
    let mut arguments = IndexMap::new();
    for arg_def in def.arguments {
        let arg_name = arg_def.name.name.clone();
        let location = arg_def.name.location;
        if arguments.insert(arg_name.clone(), arg_def).is_some() {
            return Err(SchemaBuildError::DuplicateDirectiveArgumentDefinition {
                directive_name,
                argument_name: arg_name,
                location,
            });
        }
    }
    Ok(DirectiveDecl {
        name: directive_name,
        description: def.description,
        locations: def.locations,
        arguments,
        def_location: def_location(def.location),
    })
}
