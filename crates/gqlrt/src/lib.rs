//! A GraphQL runtime front-end.
//!
//! `gqlrt` turns schema-definition source and query-document source into
//! validated, executable structures for a request-time execution engine:
//!
//! - [`parse_query`] parses an executable document into operations,
//!   fragments, and selection trees.
//! - [`Schema::parse`] (or [`SchemaBuilder`]) collects schema declarations,
//!   links every type-name reference, checks interface conformance, and
//!   freezes an immutable [`Schema`].
//! - [`resolvable::bind`] matches the schema's fields against host-supplied
//!   capabilities and produces a [`resolvable::BoundSchema`] with
//!   introspection (`__schema`, `__type`, `__typename`) built in.
//!
//! ```
//! use gqlrt::resolvable::{bind, CapabilityRegistry, HostValue, RootValues};
//! use gqlrt::Schema;
//! use std::sync::Arc;
//!
//! let schema = Arc::new(Schema::parse("type Query { hello: String }")?);
//!
//! let mut registry = CapabilityRegistry::new();
//! registry
//!     .surface("Query")
//!     .capability("hello", |_req| Ok(HostValue::leaf("Hello world!")));
//!
//! let bound = bind(
//!     &schema,
//!     &registry,
//!     RootValues::query(HostValue::object("Query", ())),
//! )?;
//! assert!(bound.binding("Query", "hello").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use gqlrt_core::resolvable;
pub use gqlrt_core::schema;
pub use gqlrt_core::types;
pub use gqlrt_core::DefLocation;
pub use gqlrt_core::ConformanceError;
pub use gqlrt_core::Schema;
pub use gqlrt_core::SchemaBuildError;
pub use gqlrt_core::SchemaBuilder;
pub use gqlrt_parser::ast;
pub use gqlrt_parser::parse_query;
pub use gqlrt_parser::parse_schema;
pub use gqlrt_parser::Diagnostic;
pub use gqlrt_parser::DiagnosticKind;
pub use gqlrt_parser::SourcePosition;
pub use gqlrt_parser::SyntaxError;
