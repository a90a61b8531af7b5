//! Core schema machinery for `gqlrt`: the resolved type graph, the
//! two-phase [`SchemaBuilder`](schema::SchemaBuilder) pipeline
//! (collect → link → conformance-check → freeze), and the
//! [`resolvable`] binder that matches schema fields to host capabilities and
//! synthesizes introspection support.

mod def_location;
mod introspection;
pub mod resolvable;
pub mod schema;
pub mod types;

pub use def_location::DefLocation;
pub use schema::ConformanceError;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;

#[cfg(test)]
mod tests;
