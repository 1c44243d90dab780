use std::{any::type_name, collections::BTreeMap, fmt::Debug, sync::Arc};

use crate::{
    errors::{BindError, RequireError},
    types::{Injectable, Instance},
};

/// Name-keyed store of the instances constructed in one resolution run.
///
/// Names are write-once: once bound, an entry never changes for the rest of
/// the run, so every consumer that resolved a name holds the same shared
/// instance. One registry belongs to exactly one resolution run; its sole
/// writer during that run is the graph builder.
#[derive(Default)]
pub struct Registry {
    instances: BTreeMap<String, Instance>,
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_struct("Registry");
        for (name, instance) in &self.instances {
            map.field(name, &instance.info.type_name);
        }
        map.finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            instances: BTreeMap::new(),
        }
    }

    /// Bind `name` to a constructed instance
    pub fn bind(&mut self, name: impl Into<String>, instance: Instance) -> Result<(), BindError> {
        let name = name.into();
        if self.instances.contains_key(&name) {
            return Err(BindError::AlreadyBound { name });
        }
        self.instances.insert(name, instance);
        Ok(())
    }

    /// The type-erased entry under `name`, if bound
    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// Attempts to get the instance bound under `name` as a `T`
    pub fn require<T: Injectable>(&self, name: &str) -> Result<Arc<T>, RequireError> {
        let instance = self.instance(name).ok_or_else(|| RequireError::Missing {
            name: name.to_owned(),
        })?;

        instance
            .downcast()
            .map_err(|actual| RequireError::DowncastFailed {
                name: name.to_owned(),
                required: type_name::<T>(),
                actual,
            })
    }

    /// Clone of the payload bound under `name`.
    ///
    /// For `Arc<dyn Capability>` payloads the clone shares the original
    /// allocation, so the caller receives the identical instance every other
    /// consumer of the name sees.
    pub fn extract<T: Injectable + Clone>(&self, name: &str) -> Result<T, RequireError> {
        let instance = self.instance(name).ok_or_else(|| RequireError::Missing {
            name: name.to_owned(),
        })?;

        instance
            .downcast_clone()
            .map_err(|actual| RequireError::DowncastFailed {
                name: name.to_owned(),
                required: type_name::<T>(),
                actual,
            })
    }

    /// Bound names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
