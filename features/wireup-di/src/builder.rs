use std::collections::BTreeMap;

use crate::{
    errors::ResolveError,
    factories::{ComponentFactory, DynFactory},
    initiator::{self, Resolution},
    registry::Registry,
    spec::ComponentSpec,
    types::{Injectable, Instance},
};

/// Collects factory kinds, pre-built instances and specifications, then
/// resolves them into a [Registry].
///
/// The specification mapping is unordered: entries may reference names whose
/// specifications arrive later, and resolution sorts it out.
pub struct GraphBuilder {
    /// Registered factories, keyed by the kind identifier specs select
    kinds: BTreeMap<&'static str, Box<dyn DynFactory>>,
    /// Already constructed instances to pre-bind before the first pass
    seeds: Vec<(String, Instance)>,
    /// The name -> specification mapping, in the order it was given
    specs: Vec<(String, ComponentSpec)>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            kinds: BTreeMap::new(),
            seeds: Vec::new(),
            specs: Vec::new(),
        }
    }

    /// Register the factory for one component kind.
    ///
    /// Registering the same kind again replaces the earlier factory.
    pub fn register<Factory: ComponentFactory + 'static>(mut self, factory: Factory) -> Self {
        self.kinds.insert(Factory::KIND, Box::new(factory));
        self
    }

    /// Pre-bind an already constructed instance under `name`; specifications
    /// may reference it like any resolved entry.
    pub fn with_instance<T: Injectable>(mut self, name: impl Into<String>, value: T) -> Self {
        self.seeds.push((name.into(), Instance::new(value)));
        self
    }

    /// Add one named specification.
    ///
    /// Names are unique within the mapping; a later spec for the same name
    /// replaces the earlier one.
    pub fn with_spec(mut self, name: impl Into<String>, spec: ComponentSpec) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "component names must be non-empty");

        self.specs.retain(|(existing, _)| *existing != name);
        self.specs.push((name, spec));
        self
    }

    pub fn with_specs(
        mut self,
        specs: impl IntoIterator<Item = (String, ComponentSpec)>,
    ) -> Self {
        for (name, spec) in specs {
            self = self.with_spec(name, spec);
        }
        self
    }

    /// Resolve and return whatever could be constructed.
    ///
    /// Entries still unresolved at the fixed point are absent from the
    /// result; they are reported through a single `warn` log and nowhere
    /// else. Callers that need leftovers surfaced use [try_build](Self::try_build).
    pub fn build(self) -> Registry {
        self.resolve().registry
    }

    /// Resolve, failing if any entry is left over at the fixed point
    pub fn try_build(self) -> Result<Registry, ResolveError> {
        let resolution = self.resolve();
        if resolution.unresolved.is_empty() {
            Ok(resolution.registry)
        } else {
            Err(ResolveError {
                passes: resolution.passes,
                entries: resolution.unresolved,
            })
        }
    }

    /// Resolve, keeping the full outcome: registry, pass count, leftovers
    pub fn resolve(self) -> Resolution {
        let mut registry = Registry::new();
        for (name, instance) in self.seeds {
            if let Err(error) = registry.bind(&name, instance) {
                tracing::warn!("dropping duplicate seed instance: {error}");
            }
        }

        initiator::resolve(&self.kinds, registry, self.specs)
    }
}
