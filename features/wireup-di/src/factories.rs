use crate::{
    errors::ValidationError,
    registry::Registry,
    spec::Arguments,
    types::{Injectable, Instance},
};

/// Everything a factory may look at while constructing one entry: the
/// entry's name, its declared arguments, and the registry as populated so
/// far in the current pass.
pub struct BuildContext<'a> {
    pub name: &'a str,
    pub args: &'a Arguments,
    pub registry: &'a Registry,
}

/// A factory constructing instances of one component kind.
///
/// Factories validate eagerly: the first argument that fails aborts
/// construction, and the partially built component is discarded. An argument
/// that still names an unbound reference is an ordinary validation failure
/// here; the resolution loop turns it into a deferral.
pub trait ComponentFactory: Send + Sync {
    type Provides: Injectable;

    /// Identifier a [ComponentSpec](crate::spec::ComponentSpec) selects this
    /// factory by
    const KIND: &'static str;

    fn construct(&self, ctx: &BuildContext<'_>) -> Result<Self::Provides, ValidationError>;
}

/// Wrapper trait for factories, providing type-erased instances
pub trait DynFactory: Send + Sync {
    fn kind(&self) -> &'static str;

    fn construct(&self, ctx: &BuildContext<'_>) -> Result<Instance, ValidationError>;
}

// Impl DynFactory for any ComponentFactory
impl<T: Injectable, SpecificFactory: ComponentFactory<Provides = T>> DynFactory
    for SpecificFactory
{
    fn kind(&self) -> &'static str {
        SpecificFactory::KIND
    }

    fn construct(&self, ctx: &BuildContext<'_>) -> Result<Instance, ValidationError> {
        // Forward the call to the specific implementation
        SpecificFactory::construct(self, ctx).map(Instance::new)
    }
}
