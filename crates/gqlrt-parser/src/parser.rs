//! Recursive descent parser for GraphQL schema and query documents.
//!
//! One [`Parser`] serves both top-level grammars: [`Parser::parse_schema_document`]
//! reads keyword-led type-system declarations and
//! [`Parser::parse_query_document`] reads operations and fragment
//! declarations. The shared productions (values, directives, type
//! references, input-value definitions) live here as private methods.
//!
//! Parsing is fail-fast: the first [`SyntaxError`] aborts the parse. No
//! resynchronization is attempted and no partial document is produced.

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FieldSelection;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Ident;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDef;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::NamedTypeRef;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::QueryDocument;
use crate::ast::RootOperationBinding;
use crate::ast::ScalarKind;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarValue;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaDocument;
use crate::ast::Selection;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::TypeRef;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::VariableRef;
use crate::Lexer;
use crate::SourcePosition;
use crate::SyntaxError;
use crate::TokenKind;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Whether a value production permits `$variable` references.
///
/// Constant positions (schema-level directive arguments, default values)
/// reject variables with a syntax error at the reference site.
#[derive(Clone, Copy, Debug)]
enum ValueContext {
    Const,
    WithVariables,
}

/// Parses a schema-definition document.
pub fn parse_schema(source: &str) -> Result<SchemaDocument> {
    Parser::new(source).parse_schema_document()
}

/// Parses a query (executable) document.
pub fn parse_query(source: &str) -> Result<QueryDocument> {
    Parser::new(source).parse_query_document()
}

/// A recursive descent parser over [`Lexer`] for both GraphQL grammars.
pub struct Parser<'src> {
    lexer: Lexer<'src>,

    /// Current nesting depth for recursive productions (values, selection
    /// sets, type references). Bounds adversarial inputs like `[[[[...`.
    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    /// Far beyond any realistic document, but small enough to stay safe in
    /// debug builds with large stack frames.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            recursion_depth: 0,
        }
    }

    fn enter_recursion(&mut self) -> Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            Err(SyntaxError::new(
                "document exceeds maximum nesting depth",
                self.lexer.location()?,
            ))
        } else {
            Ok(())
        }
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Schema documents
    // =========================================================================

    pub fn parse_schema_document(mut self) -> Result<SchemaDocument> {
        let mut definitions = vec![];
        while !matches!(self.lexer.peek_kind()?, TokenKind::Eof) {
            definitions.push(self.parse_definition()?);
        }
        Ok(SchemaDocument { definitions })
    }

    fn parse_definition(&mut self) -> Result<Definition> {
        let description = self.lexer.take_doc_comment()?;
        let keyword = self.lexer.consume_name()?;
        let location = keyword.location;
        match keyword.name.as_str() {
            "schema" => Ok(Definition::Schema(self.parse_schema_block(location)?)),
            "scalar" => Ok(Definition::Type(TypeDefinition::Scalar(
                self.parse_scalar_type(description, location)?,
            ))),
            "type" => Ok(Definition::Type(TypeDefinition::Object(
                self.parse_object_type(description, location)?,
            ))),
            "interface" => Ok(Definition::Type(TypeDefinition::Interface(
                self.parse_interface_type(description, location)?,
            ))),
            "union" => Ok(Definition::Type(TypeDefinition::Union(
                self.parse_union_type(description, location)?,
            ))),
            "enum" => Ok(Definition::Type(TypeDefinition::Enum(
                self.parse_enum_type(description, location)?,
            ))),
            "input" => Ok(Definition::Type(TypeDefinition::InputObject(
                self.parse_input_object_type(description, location)?,
            ))),
            "directive" => Ok(Definition::Directive(
                self.parse_directive_definition(description, location)?,
            )),
            "extend" => Ok(Definition::TypeExtension(self.parse_type_extension()?)),
            other => Err(SyntaxError::new(
                format!(
                    "unexpected `{other}`, expected `schema`, `scalar`, `type`, \
                     `interface`, `union`, `enum`, `input`, `directive`, or \
                     `extend`"
                ),
                location,
            )),
        }
    }

    fn parse_schema_block(&mut self, location: SourcePosition) -> Result<SchemaDefinition> {
        let directives = self.parse_directives(ValueContext::Const)?;
        self.lexer.expect(&TokenKind::CurlyBraceOpen)?;
        let mut root_operations = vec![];
        while !self.lexer.eat(&TokenKind::CurlyBraceClose)? {
            let op_ident = self.lexer.consume_name()?;
            let operation = OperationKind::from_keyword(op_ident.name.as_str())
                .ok_or_else(|| {
                    SyntaxError::new(
                        format!(
                            "unexpected `{}`, expected `query`, `mutation`, or \
                             `subscription`",
                            op_ident.name,
                        ),
                        op_ident.location,
                    )
                })?;
            self.lexer.expect(&TokenKind::Colon)?;
            let type_ident = self.lexer.consume_name()?;
            root_operations.push(RootOperationBinding {
                operation,
                type_name: NamedTypeRef {
                    name: type_ident.name,
                    location: type_ident.location,
                },
            });
        }
        Ok(SchemaDefinition {
            root_operations,
            directives,
            location,
        })
    }

    fn parse_scalar_type(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<ScalarTypeDefinition> {
        let name = self.lexer.consume_name()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        Ok(ScalarTypeDefinition {
            name,
            directives,
            description,
            location,
        })
    }

    fn parse_object_type(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<ObjectTypeDefinition> {
        let name = self.lexer.consume_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        let fields = self.parse_field_definitions()?;
        Ok(ObjectTypeDefinition {
            name,
            interfaces,
            fields,
            directives,
            description,
            location,
        })
    }

    fn parse_interface_type(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<InterfaceTypeDefinition> {
        let name = self.lexer.consume_name()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        let fields = self.parse_field_definitions()?;
        Ok(InterfaceTypeDefinition {
            name,
            fields,
            directives,
            description,
            location,
        })
    }

    fn parse_union_type(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<UnionTypeDefinition> {
        let name = self.lexer.consume_name()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        self.lexer.expect(&TokenKind::Equals)?;
        self.lexer.eat(&TokenKind::Pipe)?;
        let mut members = vec![self.parse_named_type_ref()?];
        while self.lexer.eat(&TokenKind::Pipe)? {
            members.push(self.parse_named_type_ref()?);
        }
        Ok(UnionTypeDefinition {
            name,
            members,
            directives,
            description,
            location,
        })
    }

    fn parse_enum_type(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<EnumTypeDefinition> {
        let name = self.lexer.consume_name()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        let mut values = vec![];
        if self.lexer.eat(&TokenKind::CurlyBraceOpen)? {
            while !self.lexer.eat(&TokenKind::CurlyBraceClose)? {
                let value_description = self.lexer.take_doc_comment()?;
                let value_name = self.lexer.consume_name()?;
                let value_directives = self.parse_directives(ValueContext::Const)?;
                values.push(EnumValueDefinition {
                    name: value_name,
                    directives: value_directives,
                    description: value_description,
                });
            }
        }
        Ok(EnumTypeDefinition {
            name,
            values,
            directives,
            description,
            location,
        })
    }

    fn parse_input_object_type(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<InputObjectTypeDefinition> {
        let name = self.lexer.consume_name()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        let mut fields = vec![];
        if self.lexer.eat(&TokenKind::CurlyBraceOpen)? {
            while !self.lexer.eat(&TokenKind::CurlyBraceClose)? {
                fields.push(self.parse_input_value_def()?);
            }
        }
        Ok(InputObjectTypeDefinition {
            name,
            fields,
            directives,
            description,
            location,
        })
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<String>,
        location: SourcePosition,
    ) -> Result<DirectiveDefinition> {
        self.lexer.expect(&TokenKind::At)?;
        let name = self.lexer.consume_name()?;
        let arguments = if matches!(self.lexer.peek_kind()?, TokenKind::ParenOpen) {
            self.parse_argument_definitions()?
        } else {
            vec![]
        };
        self.lexer.consume_keyword("on")?;
        self.lexer.eat(&TokenKind::Pipe)?;
        let mut locations = vec![self.lexer.consume_name()?.name];
        while self.lexer.eat(&TokenKind::Pipe)? {
            locations.push(self.lexer.consume_name()?.name);
        }
        Ok(DirectiveDefinition {
            name,
            arguments,
            locations,
            description,
            location,
        })
    }

    fn parse_type_extension(&mut self) -> Result<TypeExtension> {
        let keyword = self.lexer.consume_name()?;
        let location = keyword.location;
        match keyword.name.as_str() {
            "schema" => Ok(TypeExtension::Schema(self.parse_schema_block(location)?)),
            "scalar" => Ok(TypeExtension::Type(TypeDefinition::Scalar(
                self.parse_scalar_type(None, location)?,
            ))),
            "type" => Ok(TypeExtension::Type(TypeDefinition::Object(
                self.parse_object_type(None, location)?,
            ))),
            "interface" => Ok(TypeExtension::Type(TypeDefinition::Interface(
                self.parse_interface_type(None, location)?,
            ))),
            "union" => Ok(TypeExtension::Type(TypeDefinition::Union(
                self.parse_union_type(None, location)?,
            ))),
            "enum" => Ok(TypeExtension::Type(TypeDefinition::Enum(
                self.parse_enum_type(None, location)?,
            ))),
            "input" => Ok(TypeExtension::Type(TypeDefinition::InputObject(
                self.parse_input_object_type(None, location)?,
            ))),
            other => Err(SyntaxError::new(
                format!("unexpected `{other}`, expected an extendable declaration"),
                location,
            )),
        }
    }

    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedTypeRef>> {
        let mut interfaces = vec![];
        let is_implements = matches!(
            self.lexer.peek_kind()?,
            TokenKind::Name(name) if name == "implements"
        );
        if !is_implements {
            return Ok(interfaces);
        }
        self.lexer.next()?;
        self.lexer.eat(&TokenKind::Ampersand)?;
        interfaces.push(self.parse_named_type_ref()?);
        while self.lexer.eat(&TokenKind::Ampersand)? {
            interfaces.push(self.parse_named_type_ref()?);
        }
        Ok(interfaces)
    }

    fn parse_field_definitions(&mut self) -> Result<Vec<FieldDefinition>> {
        let mut fields = vec![];
        if !self.lexer.eat(&TokenKind::CurlyBraceOpen)? {
            return Ok(fields);
        }
        while !self.lexer.eat(&TokenKind::CurlyBraceClose)? {
            fields.push(self.parse_field_definition()?);
        }
        Ok(fields)
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition> {
        let description = self.lexer.take_doc_comment()?;
        let name = self.lexer.consume_name()?;
        let location = name.location;
        let arguments = if matches!(self.lexer.peek_kind()?, TokenKind::ParenOpen) {
            self.parse_argument_definitions()?
        } else {
            vec![]
        };
        self.lexer.expect(&TokenKind::Colon)?;
        let field_type = self.parse_type_ref()?;
        let directives = self.parse_directives(ValueContext::Const)?;
        Ok(FieldDefinition {
            name,
            arguments,
            field_type,
            directives,
            description,
            location,
        })
    }

    fn parse_argument_definitions(&mut self) -> Result<Vec<InputValueDef>> {
        self.lexer.expect(&TokenKind::ParenOpen)?;
        let mut defs = vec![];
        while !self.lexer.eat(&TokenKind::ParenClose)? {
            defs.push(self.parse_input_value_def()?);
        }
        Ok(defs)
    }

    /// `name: Type [= default] directives*` — shared by field arguments,
    /// input-object fields, directive-definition arguments, and (with the
    /// leading `$` consumed by the caller) operation variable definitions.
    fn parse_input_value_def(&mut self) -> Result<InputValueDef> {
        let description = self.lexer.take_doc_comment()?;
        let name = self.lexer.consume_name()?;
        let location = name.location;
        self.lexer.expect(&TokenKind::Colon)?;
        let type_location = self.lexer.location()?;
        let value_type = self.parse_type_ref()?;
        let default_value = if self.lexer.eat(&TokenKind::Equals)? {
            Some(self.parse_value(ValueContext::Const)?)
        } else {
            None
        };
        let directives = self.parse_directives(ValueContext::Const)?;
        Ok(InputValueDef {
            name,
            value_type,
            default_value,
            directives,
            description,
            location,
            type_location,
        })
    }

    // =========================================================================
    // Shared productions: type references, directives, values
    // =========================================================================

    fn parse_named_type_ref(&mut self) -> Result<NamedTypeRef> {
        let ident = self.lexer.consume_name()?;
        Ok(NamedTypeRef {
            name: ident.name,
            location: ident.location,
        })
    }

    /// `[` Type `]` makes a list; a trailing `!` wraps the immediately
    /// preceding type in a non-null. `!!` fails on the ordinary
    /// token-expectation path of whatever follows.
    fn parse_type_ref(&mut self) -> Result<TypeRef> {
        self.enter_recursion()?;
        let inner = if self.lexer.eat(&TokenKind::SquareBracketOpen)? {
            let of_type = self.parse_type_ref()?;
            self.lexer.expect(&TokenKind::SquareBracketClose)?;
            TypeRef::List(Box::new(of_type))
        } else {
            TypeRef::Named(self.parse_named_type_ref()?)
        };
        self.exit_recursion();
        if self.lexer.eat(&TokenKind::Bang)? {
            Ok(TypeRef::NonNull(Box::new(inner)))
        } else {
            Ok(inner)
        }
    }

    fn parse_directives(&mut self, ctx: ValueContext) -> Result<Vec<Directive>> {
        let mut directives = vec![];
        while matches!(self.lexer.peek_kind()?, TokenKind::At) {
            let at = self.lexer.next()?;
            let ident = self.lexer.consume_name()?;
            let arguments = if matches!(self.lexer.peek_kind()?, TokenKind::ParenOpen) {
                self.parse_arguments(ctx)?
            } else {
                vec![]
            };
            directives.push(Directive {
                // The directive's location is the `@` sigil.
                name: Ident {
                    name: ident.name,
                    location: at.location,
                },
                arguments,
            });
        }
        Ok(directives)
    }

    fn parse_arguments(&mut self, ctx: ValueContext) -> Result<Vec<Argument>> {
        self.lexer.expect(&TokenKind::ParenOpen)?;
        let mut arguments = vec![];
        while !self.lexer.eat(&TokenKind::ParenClose)? {
            let name = self.lexer.consume_name()?;
            self.lexer.expect(&TokenKind::Colon)?;
            let value = self.parse_value(ctx)?;
            arguments.push(Argument { name, value });
        }
        Ok(arguments)
    }

    fn parse_value(&mut self, ctx: ValueContext) -> Result<Value> {
        self.enter_recursion()?;
        let value = self.parse_value_inner(ctx);
        self.exit_recursion();
        value
    }

    fn parse_value_inner(&mut self, ctx: ValueContext) -> Result<Value> {
        let location = self.lexer.location()?;
        match self.lexer.peek_kind()? {
            TokenKind::IntValue(_) => {
                let token = self.lexer.next()?;
                match token.kind {
                    TokenKind::IntValue(text) => Ok(Value::Scalar(ScalarValue {
                        kind: ScalarKind::Int,
                        text,
                        location,
                    })),
                    _ => unreachable!("peeked kind checked above"),
                }
            }

            TokenKind::FloatValue(_) => {
                let token = self.lexer.next()?;
                match token.kind {
                    TokenKind::FloatValue(text) => Ok(Value::Scalar(ScalarValue {
                        kind: ScalarKind::Float,
                        text,
                        location,
                    })),
                    _ => unreachable!("peeked kind checked above"),
                }
            }

            TokenKind::StringValue(_) => {
                let token = self.lexer.next()?;
                match token.kind {
                    TokenKind::StringValue(text) => Ok(Value::Scalar(ScalarValue {
                        kind: ScalarKind::String,
                        text,
                        location,
                    })),
                    _ => unreachable!("peeked kind checked above"),
                }
            }

            TokenKind::Name(_) => {
                let ident = self.lexer.consume_name()?;
                if ident.name == "null" {
                    Ok(Value::Null(location))
                } else {
                    // `true`, `false`, and enum values all lex as names; they
                    // stay in source form until materialization.
                    Ok(Value::Scalar(ScalarValue {
                        kind: ScalarKind::Name,
                        text: ident.name,
                        location,
                    }))
                }
            }

            TokenKind::Dollar => {
                self.lexer.next()?;
                let ident = self.lexer.consume_name()?;
                match ctx {
                    ValueContext::Const => Err(SyntaxError::new(
                        format!(
                            "variable `${}` is not allowed in a constant value",
                            ident.name,
                        ),
                        location,
                    )),
                    ValueContext::WithVariables => Ok(Value::Variable(VariableRef {
                        name: ident.name,
                        location,
                    })),
                }
            }

            TokenKind::SquareBracketOpen => {
                self.lexer.next()?;
                let mut entries = vec![];
                while !self.lexer.eat(&TokenKind::SquareBracketClose)? {
                    entries.push(self.parse_value(ctx)?);
                }
                Ok(Value::list(entries, location))
            }

            TokenKind::CurlyBraceOpen => {
                self.lexer.next()?;
                let mut fields = vec![];
                while !self.lexer.eat(&TokenKind::CurlyBraceClose)? {
                    let name = self.lexer.consume_name()?;
                    self.lexer.expect(&TokenKind::Colon)?;
                    let value = self.parse_value(ctx)?;
                    fields.push((name, value));
                }
                Ok(Value::object(fields, location))
            }

            other => Err(SyntaxError::new(
                format!("unexpected {}, expected a value", other.describe()),
                location,
            )),
        }
    }

    // =========================================================================
    // Query documents
    // =========================================================================

    pub fn parse_query_document(mut self) -> Result<QueryDocument> {
        let mut operations = vec![];
        let mut fragments = vec![];
        loop {
            match self.lexer.peek_kind()? {
                TokenKind::Eof => break,

                // A bare selection set is an anonymous query.
                TokenKind::CurlyBraceOpen => {
                    let location = self.lexer.location()?;
                    let selection_set = self.parse_selection_set()?;
                    operations.push(OperationDefinition {
                        kind: OperationKind::Query,
                        name: None,
                        variable_definitions: vec![],
                        directives: vec![],
                        selection_set,
                        location,
                    });
                }

                TokenKind::Name(_) => {
                    let keyword = self.lexer.consume_name()?;
                    let location = keyword.location;
                    match keyword.name.as_str() {
                        "query" => operations
                            .push(self.parse_operation(OperationKind::Query, location)?),
                        "mutation" => operations
                            .push(self.parse_operation(OperationKind::Mutation, location)?),
                        "subscription" => operations.push(
                            self.parse_operation(OperationKind::Subscription, location)?,
                        ),
                        "fragment" => {
                            fragments.push(self.parse_fragment_definition(location)?)
                        }
                        other => {
                            return Err(SyntaxError::new(
                                format!(
                                    "unexpected `{other}`, expected `query`, \
                                     `mutation`, `subscription`, or `fragment`"
                                ),
                                location,
                            ));
                        }
                    }
                }

                other => {
                    return Err(SyntaxError::new(
                        format!(
                            "unexpected {}, expected an operation or fragment \
                             declaration",
                            other.describe(),
                        ),
                        self.lexer.location()?,
                    ));
                }
            }
        }
        Ok(QueryDocument {
            operations,
            fragments,
        })
    }

    fn parse_operation(
        &mut self,
        kind: OperationKind,
        location: SourcePosition,
    ) -> Result<OperationDefinition> {
        let name = if matches!(self.lexer.peek_kind()?, TokenKind::Name(_)) {
            Some(self.lexer.consume_name()?)
        } else {
            None
        };

        let mut variable_definitions = vec![];
        if self.lexer.eat(&TokenKind::ParenOpen)? {
            while !self.lexer.eat(&TokenKind::ParenClose)? {
                let dollar_location = self.lexer.location()?;
                self.lexer.expect(&TokenKind::Dollar)?;
                let mut def = self.parse_input_value_def()?;
                // The definition's own location covers the `$` sigil.
                def.location = dollar_location;
                variable_definitions.push(def);
            }
        }

        let directives = self.parse_directives(ValueContext::WithVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            location,
        })
    }

    fn parse_fragment_definition(
        &mut self,
        location: SourcePosition,
    ) -> Result<FragmentDefinition> {
        let name = self.lexer.consume_name()?;
        self.lexer.consume_keyword("on")?;
        let type_condition = self.parse_named_type_ref()?;
        let directives = self.parse_directives(ValueContext::WithVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location,
        })
    }

    fn parse_selection_set(&mut self) -> Result<Vec<Selection>> {
        self.enter_recursion()?;
        self.lexer.expect(&TokenKind::CurlyBraceOpen)?;
        let mut selections = vec![];
        while !self.lexer.eat(&TokenKind::CurlyBraceClose)? {
            selections.push(self.parse_selection()?);
        }
        self.exit_recursion();
        Ok(selections)
    }

    fn parse_selection(&mut self) -> Result<Selection> {
        if matches!(self.lexer.peek_kind()?, TokenKind::Ellipsis) {
            self.parse_fragment_selection()
        } else {
            Ok(Selection::Field(self.parse_field_selection()?))
        }
    }

    /// Disambiguates the three `...` forms: a spread of a named fragment, an
    /// inline fragment with a type condition (`...on T`), and an inline
    /// fragment without one (`... { ... }`).
    fn parse_fragment_selection(&mut self) -> Result<Selection> {
        let location = self.lexer.location()?;
        self.lexer.expect(&TokenKind::Ellipsis)?;

        let mut type_condition = None;
        if matches!(self.lexer.peek_kind()?, TokenKind::Name(_)) {
            let ident = self.lexer.consume_name()?;
            if ident.name != "on" {
                let directives = self.parse_directives(ValueContext::WithVariables)?;
                return Ok(Selection::FragmentSpread(FragmentSpread {
                    name: ident,
                    directives,
                    location,
                }));
            }
            type_condition = Some(self.parse_named_type_ref()?);
        }

        let directives = self.parse_directives(ValueContext::WithVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            location,
        }))
    }

    fn parse_field_selection(&mut self) -> Result<FieldSelection> {
        let first = self.lexer.consume_name()?;
        let location = first.location;
        let (alias, name) = if self.lexer.eat(&TokenKind::Colon)? {
            (Some(first), self.lexer.consume_name()?)
        } else {
            (None, first)
        };

        let arguments = if matches!(self.lexer.peek_kind()?, TokenKind::ParenOpen) {
            self.parse_arguments(ValueContext::WithVariables)?
        } else {
            vec![]
        };
        let directives = self.parse_directives(ValueContext::WithVariables)?;
        let selection_set = if matches!(self.lexer.peek_kind()?, TokenKind::CurlyBraceOpen) {
            self.parse_selection_set()?
        } else {
            vec![]
        };

        Ok(FieldSelection {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location,
        })
    }
}
