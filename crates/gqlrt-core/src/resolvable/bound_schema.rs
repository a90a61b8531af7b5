use crate::resolvable::ArgumentValues;
use crate::resolvable::CapabilityFn;
use crate::resolvable::CapabilitySignature;
use crate::resolvable::FieldError;
use crate::resolvable::HostValue;
use crate::resolvable::RequestContext;
use crate::resolvable::ResolveRequest;
use crate::schema::Schema;
use crate::types::Field;
use gqlrt_parser::ast::OperationKind;
use indexmap::IndexMap;
use std::sync::Arc;

/// The executable output of the binder: the frozen schema plus, for every
/// reachable object type, its field bindings. Immutable and safe for
/// unsynchronized concurrent reads; the execution engine may invoke bindings
/// from multiple threads.
pub struct BoundSchema {
    pub(crate) schema: Arc<Schema>,
    pub(crate) objects: IndexMap<String, BoundObject>,
    /// Interface name → concrete implementing type names. Field dispatch for
    /// an interface-typed value goes through the concrete object's binding.
    pub(crate) interfaces: IndexMap<String, Vec<String>>,
    pub(crate) root_values: IndexMap<OperationKind, HostValue>,
}

impl BoundSchema {
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Binding lookup by (declaring type name, field name) — the execution
    /// engine's sole entry point into resolution.
    pub fn binding(&self, type_name: &str, field_name: &str) -> Option<&BoundField> {
        self.objects.get(type_name)?.field(field_name)
    }

    pub fn object(&self, type_name: &str) -> Option<&BoundObject> {
        self.objects.get(type_name)
    }

    /// The concrete types an interface-typed value may dispatch to.
    pub fn possible_types(&self, interface_name: &str) -> Option<&[String]> {
        self.interfaces
            .get(interface_name)
            .map(|names| names.as_slice())
    }

    /// The host-supplied root value for an operation kind.
    pub fn root_value(&self, kind: OperationKind) -> Option<&HostValue> {
        self.root_values.get(&kind)
    }
}

impl std::fmt::Debug for BoundSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundSchema")
            .field("objects", &self.objects.keys().collect::<Vec<_>>())
            .field("roots", &self.root_values.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// The executable binding for one object type.
#[derive(Debug)]
pub struct BoundObject {
    pub(crate) type_name: String,
    pub(crate) fields: IndexMap<String, BoundField>,
}

impl BoundObject {
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Bound fields in declaration order, the synthesized meta fields last.
    pub fn fields(&self) -> &IndexMap<String, BoundField> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&BoundField> {
        self.fields.get(name)
    }
}

/// One schema field wired to a concrete host capability.
pub struct BoundField {
    /// The resolved schema field definition this binding serves.
    pub(crate) field: Field,
    pub(crate) declaring_type: String,
    /// Diagnostic label for the execution engine's tracing, e.g.
    /// `"GraphQL field: Query.hello"`.
    pub(crate) trace_label: String,
    pub(crate) signature: CapabilitySignature,
    pub(crate) callable: CapabilityFn,
}

impl BoundField {
    pub fn name(&self) -> &str {
        self.field.name()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn declaring_type(&self) -> &str {
        self.declaring_type.as_str()
    }

    pub fn trace_label(&self) -> &str {
        self.trace_label.as_str()
    }

    pub fn signature(&self) -> &CapabilitySignature {
        &self.signature
    }

    /// Invokes the bound capability.
    pub fn invoke(
        &self,
        parent: &HostValue,
        args: &ArgumentValues,
        ctx: &RequestContext,
    ) -> Result<HostValue, FieldError> {
        (self.callable)(ResolveRequest { parent, args, ctx })
    }
}

impl std::fmt::Debug for BoundField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundField")
            .field("trace_label", &self.trace_label)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
