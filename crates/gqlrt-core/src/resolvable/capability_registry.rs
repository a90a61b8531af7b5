use crate::resolvable::Capability;
use crate::resolvable::FieldError;
use crate::resolvable::HostValue;
use crate::resolvable::ResolveRequest;
use indexmap::IndexMap;

/// Reduces a name to its match key: lowercase, underscores stripped. This is
/// the normalized naming convention under which schema fields match host
/// capabilities, so a `full_name` capability serves a `fullName` field.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|ch| *ch != '_')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// The host's capability surface, keyed by schema type name.
///
/// Populated once before binding; the binder performs a single name-matching
/// pass over it and never consults the host again.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    surfaces: IndexMap<String, CapabilitySurface>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The capability surface for a schema object type, created on first
    /// access.
    pub fn surface(&mut self, type_name: impl Into<String>) -> &mut CapabilitySurface {
        let type_name = type_name.into();
        self.surfaces
            .entry(type_name.clone())
            .or_insert_with(|| CapabilitySurface {
                type_name,
                capabilities: IndexMap::new(),
            })
    }

    pub(crate) fn surface_named(&self, type_name: &str) -> Option<&CapabilitySurface> {
        self.surfaces.get(type_name)
    }
}

/// The named capabilities one host value exposes for one schema type.
#[derive(Debug)]
pub struct CapabilitySurface {
    type_name: String,
    capabilities: IndexMap<String, Capability>,
}

impl CapabilitySurface {
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Registers a capability under the host's own name for it (snake_case
    /// is fine; matching is normalized).
    pub fn capability(
        &mut self,
        name: impl Into<String>,
        callable: impl Fn(ResolveRequest<'_>) -> Result<HostValue, FieldError>
            + Send
            + Sync
            + 'static,
    ) -> &mut Self {
        self.provide(name, Capability::new(callable))
    }

    /// Registers a fully described [`Capability`].
    pub fn provide(&mut self, name: impl Into<String>, capability: Capability) -> &mut Self {
        self.capabilities.insert(name.into(), capability);
        self
    }

    /// Finds a capability whose normalized name matches the (normalized)
    /// schema field name.
    pub(crate) fn find(&self, field_name: &str) -> Option<&Capability> {
        let wanted = normalize_name(field_name);
        self.capabilities
            .iter()
            .find(|(name, _)| normalize_name(name) == wanted)
            .map(|(_, capability)| capability)
    }
}
