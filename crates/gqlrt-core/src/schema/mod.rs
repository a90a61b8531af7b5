mod conformance_error;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod type_resolver;

pub use conformance_error::ConformanceError;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
