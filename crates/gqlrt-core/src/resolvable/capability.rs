use crate::resolvable::ArgumentValues;
use crate::resolvable::HostValue;
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;

/// Everything a capability invocation receives: the parent value it resolves
/// against, the materialized field arguments, and the per-request host
/// context.
pub struct ResolveRequest<'a> {
    pub parent: &'a HostValue,
    pub args: &'a ArgumentValues,
    pub ctx: &'a RequestContext,
}

/// The normalized callable shape every capability is adapted into.
pub type CapabilityFn =
    Arc<dyn Fn(ResolveRequest<'_>) -> Result<HostValue, FieldError> + Send + Sync>;

/// One invocable field capability exposed by the host for a schema type.
#[derive(Clone)]
pub struct Capability {
    pub(crate) callable: CapabilityFn,
    pub(crate) signature: CapabilitySignature,
}

impl Capability {
    pub fn new(
        callable: impl Fn(ResolveRequest<'_>) -> Result<HostValue, FieldError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            callable: Arc::new(callable),
            signature: CapabilitySignature::default(),
        }
    }

    /// Declares the parameter names this capability consumes from the field's
    /// argument list.
    pub fn with_parameters(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.signature.parameter_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Marks this capability as consuming the per-request context.
    pub fn with_context(mut self) -> Self {
        self.signature.takes_context = true;
        self
    }

    /// Marks this capability as having a meaningful error return (as opposed
    /// to being infallible for well-typed input).
    pub fn fallible(mut self) -> Self {
        self.signature.returns_error = true;
        self
    }

    pub fn signature(&self) -> &CapabilitySignature {
        &self.signature
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capability")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// The declared shape of a capability, kept on the binding for diagnostics
/// and for the execution engine's argument packing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CapabilitySignature {
    pub(crate) parameter_names: Vec<String>,
    pub(crate) takes_context: bool,
    pub(crate) returns_error: bool,
}

impl CapabilitySignature {
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    pub fn takes_context(&self) -> bool {
        self.takes_context
    }

    pub fn returns_error(&self) -> bool {
        self.returns_error
    }
}

/// An error produced by a capability at request time.
///
/// Field errors surface through the execution engine's response; they never
/// abort the process.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Opaque per-request state threaded to capabilities that ask for it.
#[derive(Clone, Default)]
pub struct RequestContext {
    state: Option<Arc<dyn Any + Send + Sync>>,
}

impl RequestContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_state(state: impl Any + Send + Sync) -> Self {
        Self {
            state: Some(Arc::new(state)),
        }
    }

    pub fn state<T: 'static>(&self) -> Option<&T> {
        self.state.as_ref()?.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("has_state", &self.state.is_some())
            .finish()
    }
}
