//! The reflection-style binder: matches resolved schema fields against
//! host-exposed capabilities by name, producing an executable
//! [`BoundSchema`] for a request-time execution engine.
//!
//! The host's coupling point is the [`CapabilityRegistry`]: an explicit
//! per-type table of named, invocable field capabilities (the
//! statically-typed rendition of runtime reflection), plus one root
//! [`HostValue`] per declared root operation kind.

mod argument_values;
mod bind_error;
mod binder;
mod bound_schema;
mod capability;
mod capability_registry;
mod host_value;
mod meta;

pub use argument_values::ArgumentValues;
pub use bind_error::BindError;
pub use binder::bind;
pub use binder::RootValues;
pub use bound_schema::BoundField;
pub use bound_schema::BoundObject;
pub use bound_schema::BoundSchema;
pub use capability::Capability;
pub use capability::CapabilityFn;
pub use capability::CapabilitySignature;
pub use capability::FieldError;
pub use capability::RequestContext;
pub use capability::ResolveRequest;
pub use capability_registry::CapabilityRegistry;
pub use capability_registry::CapabilitySurface;
pub use host_value::HostObject;
pub use host_value::HostValue;
